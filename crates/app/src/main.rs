//! Avaria command-line front end

use std::{io, process};

use avaria::fixtures::{self, SeedData};
use avaria_app::context::AppContext;
use tracing::error;

use crate::config::AppConfig;

mod cli;
mod config;
mod observability;

pub fn main() {
    let config = AppConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init_subscriber(&config.logging) {
        eprintln!("{error}");
        process::exit(1);
    }

    if let Err(error) = run(config) {
        error!(%error, "command failed");
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run(config: AppConfig) -> Result<(), String> {
    let seed = match &config.store.seed_file {
        Some(path) => SeedData::from_path(path)
            .map_err(|error| format!("failed to load seed file {}: {error}", path.display()))?,
        None => fixtures::seed().map_err(|error| format!("invalid bundled seed data: {error}"))?,
    };

    let ctx = AppContext::from_store_dir(
        &config.store.store_dir,
        seed,
        config.auth.into_credentials(),
    )
    .map_err(|error| format!("{error}: {}", config.store.store_dir.display()))?;

    let mut stdout = io::stdout().lock();

    cli::run(config.command, &ctx, &mut stdout)
}
