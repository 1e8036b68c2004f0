//! In-memory storage.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;

use spotlight::prelude::*;

use crate::{
    domain::{
        products::models::{ProductMeta, ProductSummary},
        settings::models::DisplaySettings,
    },
    stores::{DisplaySettingsStore, ProductCatalog, ProductMetaStore, SnapshotStore, StoreError},
};

#[derive(Debug, Default)]
struct MemoryState {
    snapshot: Option<(Snapshot, Timestamp)>,
    meta: FxHashMap<ProductId, ProductMeta>,
    catalog: FxHashMap<ProductId, ProductSummary>,
    settings: DisplaySettings,
}

/// Process-local store for every collaborator.
///
/// With a retention window the snapshot behaves like a transient cache entry: once the window
/// has elapsed since the last write it reads back as absent.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    retention: Option<SignedDuration>,
}

impl MemoryStore {
    /// Store that keeps the snapshot indefinitely.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that forgets the snapshot `retention` after it was last written.
    #[must_use]
    pub fn with_retention(retention: SignedDuration) -> Self {
        Self {
            state: Mutex::default(),
            retention: Some(retention),
        }
    }

    /// Add or replace a catalog entry.
    pub async fn insert_product(&self, product: ProductId, summary: ProductSummary) {
        self.state.lock().await.catalog.insert(product, summary);
    }

    /// Drop the snapshot as a cache eviction would.
    pub async fn evict_snapshot(&self) {
        self.state.lock().await.snapshot = None;
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        let mut state = self.state.lock().await;

        let expired = match (&state.snapshot, self.retention) {
            (Some((_, stored_at)), Some(retention)) => {
                Timestamp::now().duration_since(*stored_at) >= retention
            }
            _ => false,
        };

        if expired {
            state.snapshot = None;
        }

        Ok(state.snapshot.as_ref().map(|(snapshot, _)| snapshot.clone()))
    }

    async fn store(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        self.state.lock().await.snapshot = Some((snapshot.clone(), Timestamp::now()));

        Ok(())
    }
}

#[async_trait]
impl ProductMetaStore for MemoryStore {
    async fn get_meta(&self, product: ProductId) -> Result<ProductMeta, StoreError> {
        Ok(self
            .state
            .lock()
            .await
            .meta
            .get(&product)
            .cloned()
            .unwrap_or_default())
    }

    async fn set_meta(&self, product: ProductId, meta: &ProductMeta) -> Result<(), StoreError> {
        self.state.lock().await.meta.insert(product, meta.clone());

        Ok(())
    }

    async fn clear_meta(&self, product: ProductId) -> Result<(), StoreError> {
        self.state.lock().await.meta.remove(&product);

        Ok(())
    }
}

#[async_trait]
impl ProductCatalog for MemoryStore {
    async fn product_summary(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductSummary>, StoreError> {
        Ok(self.state.lock().await.catalog.get(&product).cloned())
    }
}

#[async_trait]
impl DisplaySettingsStore for MemoryStore {
    async fn load_display_settings(&self) -> Result<DisplaySettings, StoreError> {
        Ok(self.state.lock().await.settings.clone())
    }

    async fn store_display_settings(&self, settings: &DisplaySettings) -> Result<(), StoreError> {
        self.state.lock().await.settings = settings.clone();

        Ok(())
    }
}
