//! Storage collaborators.
//!
//! The promotion service never touches storage directly; it talks to these traits so hosts can
//! plug in whatever key-value, metadata and catalog backends they have.

use std::{io, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use spotlight::prelude::*;

use crate::domain::{
    products::models::{ProductMeta, ProductSummary},
    settings::models::DisplaySettings,
};

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors raised by storage collaborators.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing file failed.
    #[error("storage i/o failure on {path}")]
    Io {
        /// File being accessed.
        path: PathBuf,

        /// Underlying failure.
        #[source]
        source: io::Error,
    },

    /// Stored data could not be decoded.
    #[error("failed to decode stored data")]
    Decode(#[source] serde_json::Error),

    /// Data could not be encoded for storage.
    #[error("failed to encode data for storage")]
    Encode(#[source] serde_json::Error),
}

/// Best-effort storage for the registry snapshot under [`SNAPSHOT_KEY`].
///
/// A backend may drop the snapshot at any time; `load` returning `None` means "no promotions".
#[automock]
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the stored snapshot, if one is still retained.
    async fn load(&self) -> Result<Option<Snapshot>, StoreError>;

    /// Replace the stored snapshot.
    async fn store(&self, snapshot: &Snapshot) -> Result<(), StoreError>;
}

/// Per-product promotion fields edited alongside the product.
#[automock]
#[async_trait]
pub trait ProductMetaStore: Send + Sync {
    /// Read the promotion fields of a product; unknown products yield empty fields.
    async fn get_meta(&self, product: ProductId) -> Result<ProductMeta, StoreError>;

    /// Overwrite the promotion fields of a product.
    async fn set_meta(&self, product: ProductId, meta: &ProductMeta) -> Result<(), StoreError>;

    /// Reset the promotion fields of a product to their unpromoted state.
    async fn clear_meta(&self, product: ProductId) -> Result<(), StoreError>;
}

/// Read-only view of the host catalog.
#[automock]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Display data for a product, or `None` when the catalog does not know it.
    async fn product_summary(&self, product: ProductId)
    -> Result<Option<ProductSummary>, StoreError>;
}

/// Banner display settings.
#[automock]
#[async_trait]
pub trait DisplaySettingsStore: Send + Sync {
    /// Read the current settings; unset settings yield defaults.
    async fn load_display_settings(&self) -> Result<DisplaySettings, StoreError>;

    /// Replace the current settings.
    async fn store_display_settings(&self, settings: &DisplaySettings) -> Result<(), StoreError>;
}

/// The full set of collaborators a promotion service needs.
#[derive(Clone)]
pub struct Stores {
    /// Registry snapshot storage
    pub snapshots: Arc<dyn SnapshotStore>,

    /// Per-product promotion fields
    pub meta: Arc<dyn ProductMetaStore>,

    /// Host catalog
    pub catalog: Arc<dyn ProductCatalog>,

    /// Banner display settings
    pub settings: Arc<dyn DisplaySettingsStore>,
}

impl Stores {
    /// Use a single backend for every collaborator.
    pub fn from_shared<S>(store: Arc<S>) -> Self
    where
        S: SnapshotStore + ProductMetaStore + ProductCatalog + DisplaySettingsStore + 'static,
    {
        Self {
            snapshots: store.clone(),
            meta: store.clone(),
            catalog: store.clone(),
            settings: store,
        }
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}
