//! Settings service.

use mockall::automock;
use tracing::info;

use crate::{
    domain::settings::{errors::SettingsServiceError, models::Settings},
    store::{Collection, RecordStore},
};

#[derive(Debug, Clone)]
pub struct StoreSettingsService {
    store: RecordStore,
}

impl StoreSettingsService {
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl SettingsService for StoreSettingsService {
    fn get_settings(&self) -> Result<Settings, SettingsServiceError> {
        Ok(self
            .store
            .get_document(Collection::Settings)?
            .unwrap_or_default())
    }

    #[tracing::instrument(name = "settings.save", skip(self), err)]
    fn save_settings(&self, settings: &Settings) -> Result<(), SettingsServiceError> {
        self.store.set_document(Collection::Settings, settings)?;

        if settings.audit_log {
            info!(target: "avaria::audit", action = "save_settings", "settings saved");
        }

        Ok(())
    }

    #[tracing::instrument(name = "settings.reset", skip(self), err)]
    fn reset_settings(&self) -> Result<Settings, SettingsServiceError> {
        let defaults = Settings::default();

        self.save_settings(&defaults)?;

        Ok(defaults)
    }
}

#[automock]
pub trait SettingsService: Send + Sync {
    /// Stored settings, or the defaults when none were saved.
    fn get_settings(&self) -> Result<Settings, SettingsServiceError>;

    /// Persist `settings`.
    fn save_settings(&self, settings: &Settings) -> Result<(), SettingsServiceError>;

    /// Restore and persist the defaults.
    fn reset_settings(&self) -> Result<Settings, SettingsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::settings::models::SettingKey, test::TestContext};

    use super::*;

    #[test]
    fn defaults_when_nothing_saved() -> TestResult {
        let ctx = TestContext::new()?;

        assert_eq!(ctx.settings.get_settings()?, Settings::default());

        Ok(())
    }

    #[test]
    fn saved_settings_are_returned() -> TestResult {
        let ctx = TestContext::new()?;

        let updated = Settings::default().with_value(SettingKey::PageSize, "3")?;

        ctx.settings.save_settings(&updated)?;

        assert_eq!(ctx.settings.get_settings()?.page_size.get(), 3);

        Ok(())
    }

    #[test]
    fn reset_restores_defaults() -> TestResult {
        let ctx = TestContext::new()?;

        ctx.settings
            .save_settings(&Settings::default().with_value(SettingKey::AuditLog, "off")?)?;

        let reset = ctx.settings.reset_settings()?;

        assert_eq!(reset, Settings::default());
        assert_eq!(ctx.settings.get_settings()?, Settings::default());

        Ok(())
    }
}
