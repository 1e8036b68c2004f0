//! Shared fixtures for service tests.

mod helpers;

pub(crate) use context::TestContext;
pub(crate) use helpers::{head, promote, promote_until, unpromote};
