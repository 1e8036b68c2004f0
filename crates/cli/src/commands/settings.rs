//! Display settings command.

use serde_json::{Value, json};

use spotlight_app::{context::AppContext, domain::settings::models::DisplaySettingsUpdate};

use crate::{commands::SettingsArgs, errors::CliError};

pub(super) async fn run(app: &AppContext, args: SettingsArgs) -> Result<Value, CliError> {
    let SettingsArgs {
        title,
        background_color,
        text_color,
    } = args;

    let settings = if title.is_none() && background_color.is_none() && text_color.is_none() {
        app.settings.display_settings().await?
    } else {
        app.settings
            .update_display_settings(DisplaySettingsUpdate {
                section_title: title,
                background_color,
                text_color,
            })
            .await?
    };

    Ok(json!({
        "section_title": settings.section_title(),
        "background_color": settings.background_color,
        "text_color": settings.text_color,
    }))
}
