//! CLI errors.

use thiserror::Error;

use spotlight_app::{
    context::AppInitError,
    domain::{promotions::PromotionsServiceError, settings::SettingsError},
    stores::StoreError,
};

/// Errors raised while running a command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The application could not be assembled.
    #[error(transparent)]
    Init(#[from] AppInitError),

    /// A promotion operation failed.
    #[error("promotion update failed: {0}")]
    Promotions(#[from] PromotionsServiceError),

    /// A settings operation failed.
    #[error("settings update failed: {0}")]
    Settings(#[from] SettingsError),

    /// Writing catalog data failed.
    #[error("catalog update failed: {0}")]
    Catalog(#[from] StoreError),

    /// Command output could not be encoded.
    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    /// Command output could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
