//! Logging initialisation
//!
//! Installs a global `tracing-subscriber` registry with an `EnvFilter` and
//! either the human-readable or the JSON formatter. `RUST_LOG` wins over the
//! configured level when set.

use apptcal_domain::{LoggingConfig, Result, SchedulerError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to `config.level`
///
/// # Errors
/// Returns `SchedulerError::Config` when `config.level` is not a valid
/// filter directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| SchedulerError::Config(format!("Invalid log level '{}': {e}", config.level)))
}

/// Install the global subscriber
///
/// # Errors
/// `SchedulerError::Config` for an invalid level, `SchedulerError::Internal`
/// if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).try_init()
    };

    installed.map_err(|e| SchedulerError::Internal(format!("Logging already initialised: {e}")))?;
    tracing::debug!(level = %config.level, json = config.json, "Logging initialised");
    Ok(())
}
