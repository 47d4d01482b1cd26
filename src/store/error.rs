//! Store Errors
//!
//! Error types for event-store operations. Domain errors pass through;
//! everything else is an unexpected fault.

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur in the event store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Recoverable, client-attributable outcome
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Collection file could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Collection payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Check if this is an expected outcome rather than a fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::Domain(e) if e.is_client_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_pass_through() {
        let err = StoreError::from(DomainError::EventNotFound("42".to_string()));
        assert!(err.is_client_error());
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_storage_errors_are_faults() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = StoreError::from(io);
        assert!(!err.is_client_error());
    }
}
