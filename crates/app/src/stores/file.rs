//! JSON file storage.

use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::{fs, sync::Mutex};
use tracing::debug;

use spotlight::prelude::*;

use crate::{
    domain::{
        products::models::{ProductMeta, ProductSummary},
        settings::models::DisplaySettings,
    },
    stores::{DisplaySettingsStore, ProductCatalog, ProductMetaStore, SnapshotStore, StoreError},
};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Document {
    /// Key-value entries; the registry snapshot lives under [`SNAPSHOT_KEY`].
    entries: BTreeMap<String, Snapshot>,
    meta: BTreeMap<ProductId, ProductMeta>,
    products: BTreeMap<ProductId, ProductSummary>,
    settings: DisplaySettings,
}

/// Every collaborator persisted in a single JSON document.
///
/// Writes go to a sibling temporary file which is then renamed over the document, so a crash
/// never leaves a torn file behind. Writers within one process are serialised; separate
/// processes are not.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the document at `path`, checking that any existing content is readable.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or decoded.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };

        store.read().await?;

        Ok(store)
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add or replace a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be read or written.
    pub async fn insert_product(
        &self,
        product: ProductId,
        summary: ProductSummary,
    ) -> Result<(), StoreError> {
        self.update(|document| {
            document.products.insert(product, summary);
        })
        .await
    }

    async fn read(&self) -> Result<Document, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(Document::default()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(StoreError::Decode),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(Document::default()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    async fn update<F>(&self, apply: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Document) + Send,
    {
        let _guard = self.lock.lock().await;

        let mut document = self.read().await?;

        apply(&mut document);

        self.write(&document).await
    }

    async fn write(&self, document: &Document) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        let tmp = temp_path(&self.path);

        fs::write(&tmp, bytes)
            .await
            .map_err(|source| self.io_error(source))?;

        fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        debug!(path = %self.path.display(), "wrote store document");

        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Sibling path a document is staged at before being renamed into place.
fn temp_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_os_string();

    staged.push(".tmp");

    PathBuf::from(staged)
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        Ok(self.read().await?.entries.remove(SNAPSHOT_KEY))
    }

    async fn store(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let snapshot = snapshot.clone();

        self.update(|document| {
            document.entries.insert(SNAPSHOT_KEY.to_string(), snapshot);
        })
        .await
    }
}

#[async_trait]
impl ProductMetaStore for JsonFileStore {
    async fn get_meta(&self, product: ProductId) -> Result<ProductMeta, StoreError> {
        Ok(self
            .read()
            .await?
            .meta
            .remove(&product)
            .unwrap_or_default())
    }

    async fn set_meta(&self, product: ProductId, meta: &ProductMeta) -> Result<(), StoreError> {
        let meta = meta.clone();

        self.update(|document| {
            document.meta.insert(product, meta);
        })
        .await
    }

    async fn clear_meta(&self, product: ProductId) -> Result<(), StoreError> {
        self.update(|document| {
            document.meta.remove(&product);
        })
        .await
    }
}

#[async_trait]
impl ProductCatalog for JsonFileStore {
    async fn product_summary(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductSummary>, StoreError> {
        Ok(self.read().await?.products.remove(&product))
    }
}

#[async_trait]
impl DisplaySettingsStore for JsonFileStore {
    async fn load_display_settings(&self) -> Result<DisplaySettings, StoreError> {
        Ok(self.read().await?.settings)
    }

    async fn store_display_settings(&self, settings: &DisplaySettings) -> Result<(), StoreError> {
        let settings = settings.clone();

        self.update(|document| document.settings = settings).await
    }
}
