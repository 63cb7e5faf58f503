//! Service error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Typed failure raised by the resource service.
///
/// Every variant maps to exactly one status code at the HTTP boundary; the
/// service never swallows a failure or invents an ad hoc one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Resource or tenant absent, or a read-path ownership mismatch.
    /// Callers cannot distinguish the two.
    #[error("{0}")]
    NotFound(String),

    /// A mutating operation targeted a resource owned by a different tenant.
    /// Distinct from `NotFound` by contract.
    #[error("{0}")]
    OwnershipViolation(String),

    /// One or more fields of a submitted payload failed validation.
    #[error("validation failed")]
    ValidationFailed(Vec<FieldError>),

    /// Anything unexpected from a store or serializer.
    #[error("upstream fault: {0}")]
    Upstream(String),
}

impl ServiceError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn ownership_violation(msg: impl Into<String>) -> Self {
        Self::OwnershipViolation(msg.into())
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::ValidationFailed(errors)
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_its_message() {
        let err = ServiceError::not_found("consumer not found");
        assert_eq!(err.to_string(), "consumer not found");
    }

    #[test]
    fn validation_carries_field_errors() {
        let err = ServiceError::validation(vec![FieldError::new("email", "email is required")]);
        match err {
            ServiceError::ValidationFailed(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "email");
            }
            _ => panic!("Expected ValidationFailed"),
        }
    }
}
