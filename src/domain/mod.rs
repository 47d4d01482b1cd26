//! Domain module
//!
//! Core domain types shared across the store, session and API layers.

pub mod error;
pub mod event;
pub mod user;

pub use error::DomainError;
pub use event::{Event, EventStatus, EventSubmission, Hall, Registration};
pub use user::{User, UserRole};
