//! Auth Config

use avaria_app::auth::{Credentials, DEFAULT_PASSWORD, DEFAULT_USERNAME};
use clap::Args;

/// Login settings.
#[derive(Debug, Args)]
pub(crate) struct AuthConfig {
    /// Username accepted by `login`
    #[arg(long, env = "AVARIA_ADMIN_USERNAME", default_value = DEFAULT_USERNAME)]
    pub admin_username: String,

    /// Password accepted by `login`
    #[arg(
        long,
        env = "AVARIA_ADMIN_PASSWORD",
        default_value = DEFAULT_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub admin_password: String,
}

impl AuthConfig {
    /// Move the configured pair into zeroizing credentials.
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.admin_username, self.admin_password)
    }
}
