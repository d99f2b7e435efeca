//! # Apptcal Domain
//!
//! Business domain types for the appointment scheduling engine.
//!
//! This crate contains:
//! - Appointment, directory and report types
//! - Domain error types, field-level validation errors and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Apptcal crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use validation::{FieldError, ValidationError};
