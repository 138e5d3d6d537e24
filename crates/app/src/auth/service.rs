//! Auth service.

use mockall::automock;
use tracing::{info, warn};

use crate::auth::{AuthError, Credentials, Session};

/// Checks logins against a single configured credential pair.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthService {
    credentials: Credentials,
}

impl StaticAuthService {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl AuthService for StaticAuthService {
    #[tracing::instrument(name = "auth.login", skip(self, password), err)]
    fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        if username != self.credentials.username || password != self.credentials.password.as_str() {
            warn!("login rejected");

            return Err(AuthError::InvalidCredentials);
        }

        info!("login accepted");

        Ok(Session {
            username: username.to_string(),
        })
    }
}

#[automock]
pub trait AuthService: Send + Sync {
    /// Open a session for matching credentials.
    fn login(&self, username: &str, password: &str) -> Result<Session, AuthError>;
}
