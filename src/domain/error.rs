//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Domain-specific errors
///
/// These errors represent validation failures, missing records and
/// capability checks. They are independent of the web layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed validation before reaching the store
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Event lookup by id found nothing
    #[error("Event not found: {0}")]
    EventNotFound(String),

    /// Acting identity lacks the required role
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Student already holds a registration for this event
    #[error("Already registered for event: {0}")]
    AlreadyRegistered(String),

    /// Event has no seats left
    #[error("Event is full: {0}")]
    EventFull(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Check if this is an expected, recoverable outcome (user's fault)
    /// rather than an unexpected fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::EventNotFound(_)
                | Self::Unauthorized(_)
                | Self::AlreadyRegistered(_)
                | Self::EventFull(_)
        )
    }

    /// Check if this is a conflict with current state (retrying with the
    /// same input will not help)
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyRegistered(_) | Self::EventFull(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("Invalid USN format. Example: 4PA21CS001");

        assert!(err.is_client_error());
        assert!(!err.is_conflict());
        assert!(err.to_string().contains("4PA21CS001"));
    }

    #[test]
    fn test_conflict_errors() {
        let err = DomainError::AlreadyRegistered("1".to_string());
        assert!(err.is_client_error());
        assert!(err.is_conflict());

        let err = DomainError::EventFull("1".to_string());
        assert!(err.is_conflict());
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::EventNotFound("nope".to_string());
        assert!(err.is_client_error());
        assert!(!err.is_conflict());
        assert!(err.to_string().contains("nope"));
    }
}
