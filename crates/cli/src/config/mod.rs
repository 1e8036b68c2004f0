//! CLI configuration module

use clap::Parser;

use crate::{
    commands::Command,
    config::{observability::LoggingConfig, store::StoreConfig},
};

pub(crate) mod observability;
pub(crate) mod store;

pub(crate) use observability::LogFormat;

/// Spotlight CLI configuration
#[derive(Debug, Parser)]
#[command(name = "spotlight", about = "Promote a single product in the storefront", long_about = None)]
pub(crate) struct CliConfig {
    /// Data file settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use spotlight::prelude::*;
    use testresult::TestResult;

    use crate::commands::{SaveArgs, SweepArgs};

    use super::*;

    #[test]
    fn parses_save_command() -> TestResult {
        let config = CliConfig::try_parse_from([
            "spotlight",
            "--data-file",
            "/tmp/promotions.json",
            "save",
            "--product",
            "42",
            "--promote",
            "--title",
            "Half price",
            "--expires",
            "2099-01-01T00:00",
        ])?;

        assert_eq!(config.store.data_file, Path::new("/tmp/promotions.json"));

        let Command::Save(SaveArgs {
            product,
            promote,
            title,
            expires,
        }) = config.command
        else {
            return Err("expected save command".into());
        };

        assert_eq!(product, ProductId::new(42));
        assert!(promote);
        assert_eq!(title.as_deref(), Some("Half price"));
        assert_eq!(expires.as_deref(), Some("2099-01-01T00:00"));

        Ok(())
    }

    #[test]
    fn parses_sweep_time() -> TestResult {
        let config =
            CliConfig::try_parse_from(["spotlight", "sweep", "--now", "2030-01-01T12:30"])?;

        let Command::Sweep(SweepArgs { now }) = config.command else {
            return Err("expected sweep command".into());
        };

        assert_eq!(
            now.as_ref().map(ToString::to_string).as_deref(),
            Some("2030-01-01T12:30")
        );

        Ok(())
    }

    #[test]
    fn rejects_malformed_sweep_time() {
        let result = CliConfig::try_parse_from(["spotlight", "sweep", "--now", "noon"]);

        assert!(result.is_err(), "expected parse failure");
    }

    #[test]
    fn rejects_non_numeric_product() {
        let result = CliConfig::try_parse_from(["spotlight", "save", "--product", "mug"]);

        assert!(result.is_err(), "expected parse failure");
    }

    #[test]
    fn parses_log_format() -> TestResult {
        let config = CliConfig::try_parse_from(["spotlight", "--log-format", "json", "current"])?;

        assert!(matches!(config.logging.log_format, LogFormat::Json));

        Ok(())
    }

    #[test]
    fn startup_sweep_is_on_by_default() -> TestResult {
        let config = CliConfig::try_parse_from(["spotlight", "current"])?;

        assert!(config.store.sweep_on_start);

        Ok(())
    }

    #[test]
    fn startup_sweep_can_be_turned_off() -> TestResult {
        let config =
            CliConfig::try_parse_from(["spotlight", "--sweep-on-start", "false", "banner"])?;

        assert!(!config.store.sweep_on_start);

        Ok(())
    }
}
