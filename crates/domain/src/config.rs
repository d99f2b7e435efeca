//! Configuration structures
//!
//! Every field has a default so a partial TOML/JSON document (or none at all)
//! still yields a usable configuration.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CLOSE_HOUR, DEFAULT_DISPLAY_ZONE, DEFAULT_LOG_LEVEL, DEFAULT_OPEN_HOUR,
    DEFAULT_REFERENCE_ZONE, DEFAULT_REMINDER_LOOKAHEAD_MINUTES,
};
use crate::errors::{Result, SchedulerError};
use crate::impl_domain_enum_conversions;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rules-engine settings
    pub scheduler: SchedulerConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

/// Rules-engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Zone in which business hours and conflicts are evaluated
    pub reference_zone: Tz,
    /// Zone whose calendar dates drive week/month views and reminders
    pub display_zone: Tz,
    /// Bookable window per weekday
    pub business_hours: BusinessHours,
    /// Reminder window and selection
    pub reminders: ReminderConfig,
    /// Whether the month view also compares the year
    pub month_match: MonthMatch,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            reference_zone: DEFAULT_REFERENCE_ZONE,
            display_zone: DEFAULT_DISPLAY_ZONE,
            business_hours: BusinessHours::default(),
            reminders: ReminderConfig::default(),
            month_match: MonthMatch::default(),
        }
    }
}

impl SchedulerConfig {
    /// Check cross-field constraints serde cannot express.
    ///
    /// # Errors
    /// Returns `SchedulerError::Config` when the business-hours window is
    /// empty or out of range, or the reminder look-ahead is zero.
    pub fn validate(&self) -> Result<()> {
        let hours = &self.business_hours;
        if hours.close_hour > 23 {
            return Err(SchedulerError::Config(format!(
                "close_hour must be between 0 and 23, got {}",
                hours.close_hour
            )));
        }
        if hours.open_hour >= hours.close_hour {
            return Err(SchedulerError::Config(format!(
                "open_hour ({}) must be before close_hour ({})",
                hours.open_hour, hours.close_hour
            )));
        }
        if self.reminders.look_ahead_minutes == 0 {
            return Err(SchedulerError::Config(
                "reminder look_ahead_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Daily operating window, Monday through Friday in the reference zone.
///
/// Both bounds are whole hours; `close_hour:00` itself is still inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    /// First bookable hour
    pub open_hour: u32,
    /// Closing hour, 0-23
    pub close_hour: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self { open_hour: DEFAULT_OPEN_HOUR, close_hour: DEFAULT_CLOSE_HOUR }
    }
}

/// Reminder scan settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Window after `now` in whole minutes, inclusive
    pub look_ahead_minutes: u32,
    /// Which qualifying appointment to report
    pub selection: ReminderSelection,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            look_ahead_minutes: DEFAULT_REMINDER_LOOKAHEAD_MINUTES,
            selection: ReminderSelection::default(),
        }
    }
}

/// Which qualifying appointment a reminder scan reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderSelection {
    /// Soonest start time, ties broken by snapshot order
    #[default]
    Earliest,
    /// First qualifying appointment in snapshot order
    FirstMatch,
}

impl_domain_enum_conversions!(ReminderSelection {
    Earliest => "earliest",
    FirstMatch => "first_match",
});

/// How the month view compares dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthMatch {
    /// Calendar month only; March 2023 matches March 2024
    #[default]
    MonthOnly,
    /// Month and year must both match
    MonthAndYear,
}

impl_domain_enum_conversions!(MonthMatch {
    MonthOnly => "month_only",
    MonthAndYear => "month_and_year",
});

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of the human-readable format
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();

        assert_eq!(config.reference_zone, chrono_tz::America::New_York);
        assert_eq!(config.display_zone, chrono_tz::UTC);
        assert_eq!(config.business_hours.open_hour, 8);
        assert_eq!(config.business_hours.close_hour, 22);
        assert_eq!(config.reminders.look_ahead_minutes, 15);
        assert_eq!(config.reminders.selection, ReminderSelection::Earliest);
        assert_eq!(config.month_match, MonthMatch::MonthOnly);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(
            r#"{"scheduler": {"reference_zone": "Europe/Berlin", "reminders": {"selection": "first_match"}}}"#,
        )
        .unwrap();

        assert_eq!(config.scheduler.reference_zone, chrono_tz::Europe::Berlin);
        assert_eq!(config.scheduler.reminders.selection, ReminderSelection::FirstMatch);
        assert_eq!(config.scheduler.reminders.look_ahead_minutes, 15);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_unknown_zone_is_rejected() {
        let result: std::result::Result<SchedulerConfig, _> =
            serde_json::from_str(r#"{"reference_zone": "Mars/Olympus_Mons"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_window() {
        let mut config = SchedulerConfig::default();
        config.business_hours = BusinessHours { open_hour: 22, close_hour: 8 };
        assert!(matches!(config.validate(), Err(SchedulerError::Config(_))));

        config.business_hours = BusinessHours { open_hour: 8, close_hour: 24 };
        assert!(matches!(config.validate(), Err(SchedulerError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_look_ahead() {
        let mut config = SchedulerConfig::default();
        config.reminders.look_ahead_minutes = 0;
        assert!(matches!(config.validate(), Err(SchedulerError::Config(_))));
    }

    #[test]
    fn test_enums_parse_next_to_result_alias() {
        let selection: ReminderSelection = "first_match".parse().unwrap();
        let month_match: MonthMatch = "MONTH_AND_YEAR".parse().unwrap();

        assert_eq!(selection, ReminderSelection::FirstMatch);
        assert_eq!(month_match, MonthMatch::MonthAndYear);
        assert!("weekly".parse::<MonthMatch>().is_err());
    }
}
