//! Field-level validation errors
//!
//! Appointment checks never stop at the first failure: every rule that fails
//! contributes a [`FieldError`] so a caller can highlight all offending inputs
//! at once.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable codes attached to field errors.
pub mod codes {
    /// A required text field is blank.
    pub const REQUIRED: &str = "required";
    /// A staff, customer or contact reference is not a positive id.
    pub const INVALID_REFERENCE: &str = "invalid_reference";
    /// End instant is not strictly after the start instant.
    pub const TIME_ORDER: &str = "time_order";
    /// An endpoint falls outside the business-hours window.
    pub const OUTSIDE_BUSINESS_HOURS: &str = "outside_business_hours";
    /// The appointment conflicts with another one of the same staff member.
    pub const OVERLAP: &str = "overlap";
    /// Update was requested for an appointment that has no id yet.
    pub const INVALID_ID: &str = "invalid_id";
}

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Every recorded failure, in report order
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create an empty validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Add a field error with code
    pub fn add_error_with_code(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.errors.push(FieldError::new(field, message).with_code(code));
    }

    /// Push a fully built field error
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Whether no field error was recorded
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of field errors across all fields
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Whether any error for `field` carries `code`
    pub fn has(&self, field: &str, code: &str) -> bool {
        self.errors.iter().any(|e| e.field == field && e.code.as_deref() == Some(code))
    }

    /// Distinct field names in first-reported order
    pub fn fields(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !seen.contains(&error.field.as_str()) {
                seen.push(&error.field);
            }
        }
        seen
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Merge another validation error into this one
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            let error = &self.errors[0];
            write!(f, "Validation failed: {}: {}", error.field, error.message)?;
        } else {
            write!(f, "Validation failed with {} errors: ", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending input
    pub field: String,
    /// Human-readable description
    pub message: String,
    /// Stable code from [`codes`]
    pub code: Option<String>,
    /// Extra context such as conflicting ids
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), code: None, metadata: BTreeMap::new() }
    }

    /// Add metadata to the error
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}
