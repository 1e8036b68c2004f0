//! Promotions service errors.

use thiserror::Error;

use spotlight::prelude::*;

use crate::stores::StoreError;

/// Errors raised by the promotions service.
#[derive(Debug, Error)]
pub enum PromotionsServiceError {
    /// The submitted expiry could not be understood.
    #[error("invalid expiration for product {product_id}")]
    Validation {
        /// Product being saved
        product_id: ProductId,

        /// Why the expiry was rejected
        #[source]
        source: ExpiresAtError,
    },

    /// A storage collaborator failed; nothing was written past the failing step.
    #[error("storage error")]
    Storage(#[from] StoreError),
}
