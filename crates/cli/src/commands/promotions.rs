//! Promotion commands.

use serde_json::{Value, json};
use tracing::info;

use spotlight::prelude::*;
use spotlight_app::{context::AppContext, domain::promotions::data::ProductSaved};

use crate::{
    commands::{SaveArgs, SweepArgs},
    errors::CliError,
};

pub(super) async fn save(app: &AppContext, args: SaveArgs) -> Result<Value, CliError> {
    let SaveArgs {
        product,
        promote,
        title,
        expires,
    } = args;

    let change = app
        .promotions
        .product_saved(ProductSaved {
            product_id: product,
            promote,
            custom_title: title,
            expiration_enabled: expires.is_some(),
            expiration_at: expires,
        })
        .await?;

    Ok(json!({ "product_id": product, "change": change }))
}

pub(super) async fn sweep(app: &AppContext, args: SweepArgs) -> Result<Value, CliError> {
    let now = args.now.unwrap_or_else(ExpiresAt::now);

    let report = app.promotions.sweep_expired(now).await?;

    info!(%now, evicted = report.evicted.len(), "sweep finished");

    Ok(serde_json::to_value(report)?)
}

pub(super) async fn current(app: &AppContext) -> Result<Value, CliError> {
    let summary = app.promotions.settings_summary().await?;

    Ok(json!({ "summary": summary, "text": summary.to_string() }))
}

/// Storefront rendering never fails: a storage problem just means no banner.
pub(super) async fn banner(app: &AppContext) -> Result<Value, CliError> {
    let Some(banner) = app.promotions.banner().await else {
        return Ok(Value::Null);
    };

    let mut value = serde_json::to_value(&banner)?;

    if let Some(object) = value.as_object_mut() {
        object.insert("text".to_string(), Value::String(banner.to_string()));
    }

    Ok(value)
}
