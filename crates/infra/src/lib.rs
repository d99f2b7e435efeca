//! # Apptcal Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment, TOML, JSON)
//! - Logging initialisation
//! - In-memory appointment repository and directory adapters
//!
//! ## Architecture
//! - Implements traits defined in `apptcal-core`
//! - Depends on `apptcal-domain` and `apptcal-core`
//! - Contains all "impure" code (I/O, environment, global subscriber)

pub mod config;
pub mod memory;
pub mod observability;

// Re-export commonly used items
pub use memory::{InMemoryAppointmentRepository, InMemoryDirectory};
pub use observability::init_logging;
