//! Settings service errors.

use thiserror::Error;

use crate::stores::StoreError;

/// Errors raised while reading or updating display settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A submitted color is not a CSS hex color.
    #[error("invalid color {0:?}, expected #rgb or #rrggbb")]
    InvalidColor(String),

    /// The settings backend failed.
    #[error("storage error")]
    Storage(#[from] StoreError),
}
