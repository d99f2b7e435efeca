//! Scheduler configuration loading
//!
//! Builds an `apptcal_domain::Config` from `APPTCAL_*` environment
//! variables or a TOML/JSON file, and validates it before handing it out.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
