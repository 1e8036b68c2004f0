//! Product Models

use serde::{Deserialize, Serialize};

/// Promotion fields stored against a product.
///
/// These mirror the registry record and carry the operator's raw form input, so the edit form
/// can be redisplayed exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductMeta {
    /// "Promote this product" checkbox
    pub promote_enabled: bool,

    /// Title shown in the banner instead of the catalog title
    pub custom_title: Option<String>,

    /// "Set expiration date and time" checkbox
    pub expiration_enabled: bool,

    /// Expiry as entered, `YYYY-MM-DDTHH:MM`
    pub expiration_at: Option<String>,
}

impl ProductMeta {
    /// Whether every field is in its unpromoted state.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }

    /// The custom title, ignoring blank values.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        self.custom_title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }
}

/// Catalog data needed to link to and label a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Catalog title
    pub title: String,

    /// Public storefront URL
    pub permalink: String,

    /// Admin edit URL
    pub edit_link: String,
}
