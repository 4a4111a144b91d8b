//! Engine configuration.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXPIRING_WINDOW_DAYS, DEFAULT_REMINDER_DAYS};
use crate::utils::time_utils::DEFAULT_VAULT_TZ;

/// Thresholds and locale settings for the vault engines.
///
/// Stored by the host application next to the items; every field has a
/// default so a partially written settings record still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VaultConfig {
    /// Days before expiry in which a warranty counts as expiring (default: 30)
    pub expiring_window_days: i64,

    /// Days before expiry at which the reminder fires (default: 7)
    pub reminder_days: i64,

    /// Timezone used to derive today's date from the system clock
    pub timezone: Tz,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            expiring_window_days: DEFAULT_EXPIRING_WINDOW_DAYS,
            reminder_days: DEFAULT_REMINDER_DAYS,
            timezone: DEFAULT_VAULT_TZ,
        }
    }
}

impl VaultConfig {
    /// Today's calendar date in the configured timezone.
    pub fn today(&self) -> chrono::NaiveDate {
        crate::utils::time_utils::today_in(self.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VaultConfig::default();
        assert_eq!(config.expiring_window_days, 30);
        assert_eq!(config.reminder_days, 7);
        assert_eq!(config.timezone, chrono_tz::Europe::Rome);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: VaultConfig = serde_json::from_str(r#"{"reminderDays": 3}"#).unwrap();
        assert_eq!(config.reminder_days, 3);
        assert_eq!(config.expiring_window_days, 30);
        assert_eq!(config.timezone, chrono_tz::Europe::Rome);
    }

    #[test]
    fn test_timezone_serializes_by_name() {
        let config = VaultConfig {
            timezone: chrono_tz::America::New_York,
            ..VaultConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"timezone\":\"America/New_York\""));
    }
}
