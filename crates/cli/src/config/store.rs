//! Store Config

use std::path::PathBuf;

use clap::{ArgAction, Args};

/// Data file settings.
#[derive(Debug, Args)]
pub(crate) struct StoreConfig {
    /// JSON file holding promotions, product fields, catalog entries and display settings
    #[arg(long, env = "SPOTLIGHT_DATA_FILE", default_value = "spotlight.json")]
    pub data_file: PathBuf,

    /// Evict expired promotions before running the command
    #[arg(
        long,
        env = "SPOTLIGHT_SWEEP_ON_START",
        action = ArgAction::Set,
        default_value_t = true
    )]
    pub sweep_on_start: bool,
}
