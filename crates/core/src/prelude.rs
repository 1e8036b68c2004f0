//! Spotlight prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    products::ProductId,
    promotions::{
        Expiration, PromotionRecord,
        expiry::{ExpiresAt, ExpiresAtError},
        registry::{Evicted, PromotionRegistry, SNAPSHOT_KEY, Snapshot},
    },
};
