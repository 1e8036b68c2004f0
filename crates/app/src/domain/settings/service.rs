//! Display settings service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    domain::settings::{
        errors::SettingsError,
        models::{DisplaySettings, DisplaySettingsUpdate, HexColor},
    },
    sanitize,
    stores::DisplaySettingsStore,
};

#[derive(Clone)]
pub struct StoreSettingsService {
    settings: Arc<dyn DisplaySettingsStore>,
}

impl StoreSettingsService {
    #[must_use]
    pub fn new(settings: Arc<dyn DisplaySettingsStore>) -> Self {
        Self { settings }
    }
}

impl std::fmt::Debug for StoreSettingsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreSettingsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl SettingsService for StoreSettingsService {
    async fn display_settings(&self) -> Result<DisplaySettings, SettingsError> {
        Ok(self.settings.load_display_settings().await?)
    }

    #[tracing::instrument(name = "settings.service.update_display_settings", skip_all, err)]
    async fn update_display_settings(
        &self,
        update: DisplaySettingsUpdate,
    ) -> Result<DisplaySettings, SettingsError> {
        let mut settings = self.settings.load_display_settings().await?;

        if let Some(title) = update.section_title {
            settings.section_title = sanitize::optional_text_field(Some(&title));
        }

        if let Some(color) = update.background_color {
            settings.background_color = parse_color(&color)?;
        }

        if let Some(color) = update.text_color {
            settings.text_color = parse_color(&color)?;
        }

        self.settings.store_display_settings(&settings).await?;

        info!(
            section_title = settings.section_title(),
            "updated display settings"
        );

        Ok(settings)
    }
}

fn parse_color(input: &str) -> Result<Option<HexColor>, SettingsError> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    input.parse().map(Some)
}

#[automock]
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Current banner display settings.
    async fn display_settings(&self) -> Result<DisplaySettings, SettingsError>;

    /// Apply changes from the settings page and return the stored result.
    async fn update_display_settings(
        &self,
        update: DisplaySettingsUpdate,
    ) -> Result<DisplaySettings, SettingsError>;
}
