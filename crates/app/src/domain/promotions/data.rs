//! Promotions Data

use spotlight::prelude::*;

/// A product edit form was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSaved {
    /// Saved product
    pub product_id: ProductId,

    /// "Promote this product" was checked
    pub promote: bool,

    /// Banner title override, unsanitised
    pub custom_title: Option<String>,

    /// "Set expiration date and time" was checked
    pub expiration_enabled: bool,

    /// Expiry as entered, `YYYY-MM-DDTHH:MM` local time
    pub expiration_at: Option<String>,
}

impl ProductSaved {
    /// A submission with every promotion field left blank.
    #[must_use]
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            promote: false,
            custom_title: None,
            expiration_enabled: false,
            expiration_at: None,
        }
    }

    /// Check "Promote this product".
    #[must_use]
    pub fn promoted(mut self) -> Self {
        self.promote = true;
        self
    }

    /// Set the banner title override.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.custom_title = Some(title.into());
        self
    }

    /// Check "Set expiration date and time" with the given input.
    #[must_use]
    pub fn expiring_at(mut self, expiration_at: impl Into<String>) -> Self {
        self.expiration_enabled = true;
        self.expiration_at = Some(expiration_at.into());
        self
    }
}
