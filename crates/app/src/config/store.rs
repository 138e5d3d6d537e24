//! Store Config

use std::path::PathBuf;

use clap::Args;

/// Persistence settings.
#[derive(Debug, Args)]
pub(crate) struct StoreConfig {
    /// Directory holding one JSON file per collection
    #[arg(long, env = "AVARIA_STORE_DIR", default_value = "./data")]
    pub store_dir: PathBuf,

    /// YAML file with the products and reports a fresh store starts with
    #[arg(long, env = "AVARIA_SEED_FILE")]
    pub seed_file: Option<PathBuf>,
}
