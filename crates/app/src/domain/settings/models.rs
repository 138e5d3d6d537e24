//! Settings Models

use std::num::NonZeroUsize;

use avaria::{discounts::DiscountPercent, query::DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

use crate::domain::settings::errors::SettingsServiceError;

/// Default registration discount ceiling.
pub const DEFAULT_MAX_DISCOUNT: u8 = 50;

/// Notification preferences.
///
/// Only `new_damage` changes behaviour today; the other two are kept so the settings panel can
/// store and show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notifications {
    /// Announce every newly registered damage report.
    pub new_damage: bool,

    /// Weekly digest preference. Stored only; no digest is produced.
    pub weekly_reports: bool,

    /// System alert preference. Stored only; failures are logged regardless.
    pub system_alerts: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            new_damage: true,
            weekly_reports: false,
            system_alerts: true,
        }
    }
}

/// Panel settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub notifications: Notifications,

    /// Highest discount a registration may apply.
    pub max_discount_percent: DiscountPercent,

    /// Reports per listing page.
    pub page_size: NonZeroUsize,

    /// Record every state-changing action in the audit log.
    pub audit_log: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: Notifications::default(),
            max_discount_percent: DiscountPercent::new(DEFAULT_MAX_DISCOUNT.into())
                .unwrap_or(DiscountPercent::FULL),
            page_size: DEFAULT_PAGE_SIZE,
            audit_log: true,
        }
    }
}

/// A single adjustable setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SettingKey {
    NewDamage,
    WeeklyReports,
    SystemAlerts,
    MaxDiscount,
    PageSize,
    AuditLog,
}

impl SettingKey {
    fn name(self) -> &'static str {
        match self {
            SettingKey::NewDamage => "new-damage",
            SettingKey::WeeklyReports => "weekly-reports",
            SettingKey::SystemAlerts => "system-alerts",
            SettingKey::MaxDiscount => "max-discount",
            SettingKey::PageSize => "page-size",
            SettingKey::AuditLog => "audit-log",
        }
    }
}

impl Settings {
    /// Return a copy with `key` set from its textual `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not valid for `key`.
    pub fn with_value(mut self, key: SettingKey, value: &str) -> Result<Self, SettingsServiceError> {
        let invalid = || SettingsServiceError::InvalidValue {
            key: key.name(),
            value: value.to_string(),
        };

        match key {
            SettingKey::NewDamage => {
                self.notifications.new_damage = parse_toggle(value).ok_or_else(invalid)?;
            }
            SettingKey::WeeklyReports => {
                self.notifications.weekly_reports = parse_toggle(value).ok_or_else(invalid)?;
            }
            SettingKey::SystemAlerts => {
                self.notifications.system_alerts = parse_toggle(value).ok_or_else(invalid)?;
            }
            SettingKey::MaxDiscount => self.max_discount_percent = value.parse()?,
            SettingKey::PageSize => {
                self.page_size = value.trim().parse().map_err(|_err| invalid())?;
            }
            SettingKey::AuditLog => self.audit_log = parse_toggle(value).ok_or_else(invalid)?,
        }

        Ok(self)
    }
}

fn parse_toggle(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" | "sim" => Some(true),
        "off" | "false" | "no" | "0" | "nao" | "não" => Some(false),
        _ => None,
    }
}
