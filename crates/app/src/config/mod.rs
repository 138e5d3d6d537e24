//! Command-line configuration module

use clap::Parser;

use crate::{
    cli::Commands,
    config::{auth::AuthConfig, observability::LoggingConfig, store::StoreConfig},
};

pub(crate) mod auth;
pub(crate) mod observability;
pub(crate) mod store;

/// Avaria damaged-inventory panel
#[derive(Debug, Parser)]
#[command(name = "avaria", about = "Avaria damaged-inventory panel", long_about = None)]
pub(crate) struct AppConfig {
    /// Data directory and seed settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Login credentials.
    #[command(flatten)]
    pub auth: AuthConfig,

    #[command(subcommand)]
    pub command: Commands,
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
