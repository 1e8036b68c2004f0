//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::{
    domain::{
        promotions::{PromotionsService, StorePromotionsService},
        settings::{SettingsService, StoreSettingsService},
    },
    stores::{JsonFileStore, StoreError, Stores},
};

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The data file could not be opened.
    #[error("failed to open data file")]
    Store(#[source] StoreError),
}

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppContext {
    /// Promotion registry operations
    pub promotions: Arc<dyn PromotionsService>,

    /// Banner display settings
    pub settings: Arc<dyn SettingsService>,
}

impl AppContext {
    /// Build application context over an explicit set of collaborators.
    #[must_use]
    pub fn from_stores(stores: Stores) -> Self {
        Self {
            settings: Arc::new(StoreSettingsService::new(stores.settings.clone())),
            promotions: Arc::new(StorePromotionsService::new(stores)),
        }
    }

    /// Build application context over a JSON data file.
    ///
    /// # Errors
    ///
    /// Returns an error when the data file exists but cannot be read.
    pub async fn from_data_file(
        path: impl Into<PathBuf>,
    ) -> Result<(Self, Arc<JsonFileStore>), AppInitError> {
        let store = Arc::new(
            JsonFileStore::open(path)
                .await
                .map_err(AppInitError::Store)?,
        );

        Ok((Self::from_stores(Stores::from_shared(store.clone())), store))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
