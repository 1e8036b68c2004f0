//! Subcommands.

use clap::{Args, Subcommand};
use serde_json::Value;
use tracing::warn;

use spotlight::prelude::*;
use spotlight_app::{
    context::AppContext, domain::promotions::models::SweepReport, stores::JsonFileStore,
};

use crate::errors::CliError;

mod products;
mod promotions;
mod settings;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Apply a product edit form submission
    Save(SaveArgs),

    /// Evict expired promotions
    Sweep(SweepArgs),

    /// Show the currently promoted product
    Current,

    /// Show the storefront banner
    Banner,

    /// Show or change banner display settings
    Settings(SettingsArgs),

    /// Add or replace a catalog entry
    Product(ProductArgs),
}

#[derive(Debug, Args)]
pub(crate) struct SaveArgs {
    /// Product identifier
    #[arg(long)]
    pub product: ProductId,

    /// Promote the product; omit to un-promote it
    #[arg(long)]
    pub promote: bool,

    /// Banner title override
    #[arg(long)]
    pub title: Option<String>,

    /// Expiry, YYYY-MM-DDTHH:MM local time
    #[arg(long)]
    pub expires: Option<String>,
}

#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct SweepArgs {
    /// Sweep as of this minute instead of the current local time
    #[arg(long)]
    pub now: Option<ExpiresAt>,
}

#[derive(Debug, Args)]
pub(crate) struct SettingsArgs {
    /// Banner section title; empty to reset
    #[arg(long)]
    pub title: Option<String>,

    /// Banner background color (#rgb or #rrggbb); empty to reset
    #[arg(long)]
    pub background_color: Option<String>,

    /// Banner text color (#rgb or #rrggbb); empty to reset
    #[arg(long)]
    pub text_color: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product identifier
    #[arg(long)]
    pub product: ProductId,

    /// Catalog title
    #[arg(long)]
    pub title: String,

    /// Storefront URL
    #[arg(long)]
    pub permalink: String,

    /// Admin edit URL
    #[arg(long)]
    pub edit_link: String,
}

/// Run `command` and return its JSON output.
pub(crate) async fn execute(
    app: &AppContext,
    store: &JsonFileStore,
    command: Command,
) -> Result<Value, CliError> {
    match command {
        Command::Save(args) => promotions::save(app, args).await,
        Command::Sweep(args) => promotions::sweep(app, args).await,
        Command::Current => promotions::current(app).await,
        Command::Banner => promotions::banner(app).await,
        Command::Settings(args) => settings::run(app, args).await,
        Command::Product(args) => products::upsert(store, args).await,
    }
}

/// The per-run expiry tick: sweep before every command except an explicit `sweep`.
///
/// Returns the report when a sweep ran. A failed sweep is logged and does not stop the command.
pub(crate) async fn startup_sweep(
    app: &AppContext,
    enabled: bool,
    command: &Command,
    now: ExpiresAt,
) -> Option<SweepReport> {
    if !enabled || matches!(command, Command::Sweep(_)) {
        return None;
    }

    match app.promotions.sweep_expired(now).await {
        Ok(report) => Some(report),
        Err(sweep_error) => {
            warn!(error = %sweep_error, "startup sweep failed");

            None
        }
    }
}
