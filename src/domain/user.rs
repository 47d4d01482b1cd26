//! User Identity
//!
//! A resolved user profile attached to the active session.
//! Identity is self-asserted (demo trust model); there is no credential check.

use serde::{Deserialize, Serialize};

/// Role a user acts under for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Club,
    Student,
}

impl UserRole {
    /// Stable lowercase label (matches the persisted form)
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Club => "club",
            UserRole::Student => "student",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved user profile
///
/// Students carry their seat number plus the department and batch decoded
/// from it; admins and clubs leave those fields empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// University Seat Number, students only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
    /// Derived from the seat number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Derived from the seat number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_club(&self) -> bool {
        self.role == UserRole::Club
    }

    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }
}
