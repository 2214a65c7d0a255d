//! # Error Types
//!
//! Validation error types for tackle-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tackle-core errors (this file)                                        │
//! │  ├── FieldViolation   - One violated constraint on one field           │
//! │  └── ValidationError  - Every violation found in a payload             │
//! │                                                                         │
//! │  tackle-db errors (separate crate)                                     │
//! │  └── DbError          - Storage and factory failures                   │
//! │                                                                         │
//! │  API errors (in the server app)                                        │
//! │  └── ApiError         - What HTTP clients see (status + JSON body)     │
//! │                                                                         │
//! │  Flow: FieldViolation → ValidationError → ApiError → HTTP 400          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Validation reports EVERY violated field, never just the first
//! 3. Errors are enum variants, never bare Strings

use thiserror::Error;

// =============================================================================
// Field Violation
// =============================================================================

/// A single violated constraint on a single field.
///
/// These are collected into a [`ValidationError`] so a caller submitting a
/// payload with three bad fields hears about all three at once.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldViolation {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: &'static str },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: &'static str },

    /// Invalid format (e.g., malformed UUID or timestamp).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },
}

impl FieldViolation {
    /// Returns the name of the field this violation refers to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldViolation::Required { field }
            | FieldViolation::TooLong { field, .. }
            | FieldViolation::MustBePositive { field }
            | FieldViolation::MustBeNonNegative { field }
            | FieldViolation::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A rejected payload, carrying every violated constraint.
///
/// ## Guarantee
/// Construction of a [`crate::Product`] is all-or-nothing: either every rule
/// passes and a well-formed entity comes back, or this error lists the full
/// set of violations and nothing was built.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Wraps a non-empty list of violations.
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        debug_assert!(!violations.is_empty());
        ValidationError { violations }
    }

    /// The violated constraints, in field-declaration order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        let v = FieldViolation::Required { field: "name" };
        assert_eq!(v.to_string(), "name is required");

        let v = FieldViolation::TooLong {
            field: "name",
            max: 255,
        };
        assert_eq!(v.to_string(), "name must be at most 255 characters");

        let v = FieldViolation::MustBePositive { field: "price" };
        assert_eq!(v.to_string(), "price must be greater than zero");
    }

    #[test]
    fn test_validation_error_lists_every_violation() {
        let err = ValidationError::new(vec![
            FieldViolation::Required { field: "name" },
            FieldViolation::MustBeNonNegative { field: "stock" },
        ]);

        assert_eq!(err.violations().len(), 2);
        assert_eq!(
            err.to_string(),
            "validation failed: name is required; stock must not be negative"
        );
    }

    #[test]
    fn test_violation_field_accessor() {
        let v = FieldViolation::InvalidFormat {
            field: "product_id",
            reason: "must be a valid UUID".to_string(),
        };
        assert_eq!(v.field(), "product_id");
    }
}
