//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the reference zone is not set there, falls back to a file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Whatever the source, the result is checked with
//! [`SchedulerConfig::validate`](apptcal_domain::SchedulerConfig::validate).
//!
//! ## Environment Variables
//! - `APPTCAL_REFERENCE_ZONE`: IANA zone for business rules (required)
//! - `APPTCAL_DISPLAY_ZONE`: IANA zone for calendar views
//! - `APPTCAL_BUSINESS_OPEN_HOUR`: First bookable hour
//! - `APPTCAL_BUSINESS_CLOSE_HOUR`: Closing hour (`hh:00` still bookable)
//! - `APPTCAL_REMINDER_LOOKAHEAD_MINUTES`: Reminder window in minutes
//! - `APPTCAL_REMINDER_SELECTION`: `earliest` or `first_match`
//! - `APPTCAL_MONTH_MATCH`: `month_only` or `month_and_year`
//! - `APPTCAL_LOG_LEVEL`: Default log filter
//! - `APPTCAL_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./apptcal.json` or `./apptcal.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use apptcal_domain::{
    BusinessHours, Config, LoggingConfig, ReminderConfig, Result, SchedulerConfig, SchedulerError,
};
use chrono_tz::Tz;

const REFERENCE_ZONE_VAR: &str = "APPTCAL_REFERENCE_ZONE";

/// Load configuration with automatic fallback strategy
///
/// Environment variables win when `APPTCAL_REFERENCE_ZONE` is set. Only when
/// it is unset does loading fall back to a config file.
///
/// # Errors
/// Returns `SchedulerError::Config` if:
/// - An environment variable is set to an invalid value
/// - No config file can be found or read
/// - File format is invalid
/// - The loaded values fail validation
pub fn load() -> Result<Config> {
    if std::env::var_os(REFERENCE_ZONE_VAR).is_none() {
        tracing::debug!(var = REFERENCE_ZONE_VAR, "Reference zone not set, loading configuration from file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `APPTCAL_REFERENCE_ZONE` is required; every other variable falls
/// back to its default.
///
/// # Errors
/// Returns `SchedulerError::Config` if the reference zone is missing, a
/// variable has an invalid value, or the result fails validation.
pub fn load_from_env() -> Result<Config> {
    let reference_zone = parse_zone(REFERENCE_ZONE_VAR, &env_var(REFERENCE_ZONE_VAR)?)?;
    let display_zone = match std::env::var("APPTCAL_DISPLAY_ZONE") {
        Ok(value) => parse_zone("APPTCAL_DISPLAY_ZONE", &value)?,
        Err(_) => SchedulerConfig::default().display_zone,
    };

    let hours_default = BusinessHours::default();
    let business_hours = BusinessHours {
        open_hour: env_parse("APPTCAL_BUSINESS_OPEN_HOUR", hours_default.open_hour)?,
        close_hour: env_parse("APPTCAL_BUSINESS_CLOSE_HOUR", hours_default.close_hour)?,
    };

    let reminders_default = ReminderConfig::default();
    let reminders = ReminderConfig {
        look_ahead_minutes: env_parse(
            "APPTCAL_REMINDER_LOOKAHEAD_MINUTES",
            reminders_default.look_ahead_minutes,
        )?,
        selection: env_parse("APPTCAL_REMINDER_SELECTION", reminders_default.selection)?,
    };

    let month_match = env_parse("APPTCAL_MONTH_MATCH", SchedulerConfig::default().month_match)?;

    let logging = LoggingConfig {
        level: std::env::var("APPTCAL_LOG_LEVEL")
            .unwrap_or_else(|_| LoggingConfig::default().level),
        json: env_bool("APPTCAL_LOG_JSON", false),
    };

    let config = Config {
        scheduler: SchedulerConfig {
            reference_zone,
            display_zone,
            business_hours,
            reminders,
            month_match,
        },
        logging,
    };
    config.scheduler.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing sections and fields take their defaults.
///
/// # Errors
/// Returns `SchedulerError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The loaded values fail validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SchedulerError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SchedulerError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SchedulerError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.scheduler.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SchedulerError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SchedulerError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SchedulerError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory (`./config.{json,toml}`,
/// `./apptcal.{json,toml}`), up to two parent directories, then the same
/// names next to the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_paths(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_paths(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_paths(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("apptcal.json"),
        dir.join("apptcal.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `SchedulerError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SchedulerError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse an optional environment variable, `default` when unset
///
/// # Errors
/// Returns `SchedulerError::Config` if the variable is set but unparsable.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| SchedulerError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

fn parse_zone(key: &str, value: &str) -> Result<Tz> {
    value
        .trim()
        .parse::<Tz>()
        .map_err(|_| SchedulerError::Config(format!("Unknown time zone in {key}: {value}")))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
