//! Promotions

use serde::{Deserialize, Serialize};

use crate::products::ProductId;

pub mod expiry;
pub mod registry;

use expiry::ExpiresAt;

/// When a promotion stops being shown.
///
/// Stored as `"never"` or `{"at": "YYYY-MM-DDTHH:MM"}`. A stored timestamp that cannot be read
/// is kept verbatim as [`Expiration::Unparsed`] instead of failing the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StoredExpiration", into = "StoredExpiration")]
pub enum Expiration {
    /// Shown until explicitly un-promoted.
    #[default]
    Never,

    /// Evicted by the first sweep that runs strictly after this minute.
    At(ExpiresAt),

    /// A stored timestamp in an unknown format. Never lapses.
    Unparsed(String),
}

impl Expiration {
    /// Whether this expiration carries a readable timestamp.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::At(_))
    }

    /// The expiry timestamp, if any.
    #[must_use]
    pub const fn expires_at(&self) -> Option<ExpiresAt> {
        match self {
            Self::At(at) => Some(*at),
            Self::Never | Self::Unparsed(_) => None,
        }
    }

    /// The raw stored value, when it could not be read as a timestamp.
    #[must_use]
    pub fn unparsed(&self) -> Option<&str> {
        match self {
            Self::Unparsed(raw) => Some(raw),
            Self::Never | Self::At(_) => None,
        }
    }

    /// Whether the promotion has lapsed at `now`.
    ///
    /// A promotion expiring at `T` is still live during minute `T` itself.
    #[must_use]
    pub fn has_lapsed(&self, now: ExpiresAt) -> bool {
        self.expires_at().is_some_and(|at| at < now)
    }
}

impl From<Option<ExpiresAt>> for Expiration {
    fn from(value: Option<ExpiresAt>) -> Self {
        value.map_or(Self::Never, Self::At)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum StoredExpiration {
    Never,
    At(String),
}

impl From<StoredExpiration> for Expiration {
    fn from(stored: StoredExpiration) -> Self {
        match stored {
            StoredExpiration::Never => Self::Never,
            StoredExpiration::At(raw) => match raw.parse() {
                Ok(at) => Self::At(at),
                Err(_) => Self::Unparsed(raw),
            },
        }
    }
}

impl From<Expiration> for StoredExpiration {
    fn from(expiration: Expiration) -> Self {
        match expiration {
            Expiration::Never => Self::Never,
            Expiration::At(at) => Self::At(at.to_string()),
            Expiration::Unparsed(raw) => Self::At(raw),
        }
    }
}

/// A single active promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRecord {
    /// Promoted product
    pub product_id: ProductId,

    /// Promotion expiry
    #[serde(default)]
    pub expiration: Expiration,
}

impl PromotionRecord {
    /// Create a record for `product_id`.
    #[must_use]
    pub const fn new(product_id: ProductId, expiration: Expiration) -> Self {
        Self {
            product_id,
            expiration,
        }
    }
}
