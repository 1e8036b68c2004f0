//! Promotion Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use spotlight::prelude::*;

use crate::domain::settings::models::HexColor;

/// What a product save did to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionChange {
    /// The product was not promoted before and now is.
    Created,

    /// The product was already promoted; its expiry was replaced and it moved to the head.
    Refreshed,

    /// The product was promoted and no longer is.
    Removed,

    /// The product was not promoted and still is not.
    Unchanged,
}

/// A product whose promotion fields could not be reset after eviction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaClearFailure {
    /// Evicted product
    pub product_id: ProductId,

    /// Storage error message
    pub reason: String,
}

/// Outcome of an expiry sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Products evicted from the registry, most recently promoted first.
    pub evicted: Vec<ProductId>,

    /// Evicted products whose metadata is still marked as promoted.
    pub failures: Vec<MetaClearFailure>,
}

impl SweepReport {
    /// Whether the sweep evicted nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.evicted.is_empty()
    }
}

/// Everything the storefront needs to draw the promotion banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    /// Promoted product
    pub product_id: ProductId,

    /// Configured section title, or the default
    pub section_title: String,

    /// Custom title, or the catalog title
    pub product_title: String,

    /// Storefront link to the product
    pub permalink: String,

    /// Banner background color
    pub background_color: Option<HexColor>,

    /// Banner text color
    pub text_color: Option<HexColor>,
}

impl Display for Banner {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "📢 {}: {}", self.section_title, self.product_title)
    }
}

/// The "current promoted product" line of the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CurrentPromotion {
    /// Nothing is promoted.
    None,

    /// A product is promoted.
    Product {
        /// Promoted product
        product_id: ProductId,

        /// Catalog title
        title: String,

        /// Admin edit link, when the catalog knows the product
        edit_link: Option<String>,

        /// When the promotion ends
        expiration: Expiration,
    },
}

impl Display for CurrentPromotion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => f.write_str("None"),
            Self::Product { title, .. } => f.write_str(title),
        }
    }
}
