//! Error types used throughout the scheduler

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for the scheduler
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SchedulerError {
    /// One or more appointment checks failed. Every failing field is listed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backing store could not be reached
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store rejected the write, e.g. a dangling reference
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected failure inside an adapter
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SchedulerError {
    /// Whether the caller may reasonably retry the operation.
    ///
    /// Only store outages qualify; the core itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }

    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::ConstraintViolation(_) => "constraint_violation",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }

    /// The field errors of a validation failure, `None` for other variants.
    pub fn validation_errors(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_store_outages_are_retryable() {
        assert!(SchedulerError::StoreUnavailable("db down".into()).is_retryable());
        assert!(!SchedulerError::NotFound("appointment 4".into()).is_retryable());
        assert!(!SchedulerError::ConstraintViolation("customer 9".into()).is_retryable());
        assert!(!SchedulerError::from(ValidationError::field("title", "required")).is_retryable());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let err = SchedulerError::NotFound("appointment 7".into());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "appointment 7");
    }

    #[test]
    fn test_validation_display_lists_fields() {
        let mut validation = ValidationError::new();
        validation.add_error_with_code("title", "Title is required", "required");
        validation.add_error_with_code("location", "Location is required", "required");

        let err = SchedulerError::from(validation);

        assert_eq!(err.label(), "validation");
        let message = err.to_string();
        assert!(message.contains("title"));
        assert!(message.contains("location"));
    }
}
