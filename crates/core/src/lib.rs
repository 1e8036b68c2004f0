//! Spotlight
//!
//! Spotlight keeps track of the products a store operator has promoted, in the order they were
//! promoted, and decides which one should currently be shown in the storefront banner.
//!
//! The registry itself performs no I/O: callers load a [`promotions::registry::Snapshot`], mutate
//! it through [`promotions::registry::PromotionRegistry`] and persist the result.

pub mod prelude;
pub mod products;
pub mod promotions;
