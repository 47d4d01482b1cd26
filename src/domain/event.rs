//! Event, Hall and Registration records
//!
//! The three collections owned by the event store. The serialized field
//! names are the portal's document layout (camelCase), shared by the
//! persisted collections and the API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Approval state of an event
///
/// Every submission starts Pending; only an admin moves it from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventStatus::Pending => "Pending",
            EventStatus::Approved => "Approved",
            EventStatus::Rejected => "Rejected",
        };
        f.write_str(s)
    }
}

/// A proposed or approved activity owned by a club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub club_name: String,
    pub club_id: String,
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    /// Start time, HH:MM
    pub time: String,
    pub location: String,
    /// Free text; the UI suggests from a fixed list but storage does not constrain it
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub capacity: u32,
    pub registered_count: u32,
    pub status: EventStatus,
    /// Department head permission letter (digital approval)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hod_letter_url: Option<String>,
    /// Principal permission letter (digital approval)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_letter_url: Option<String>,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.registered_count >= self.capacity
    }

    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.registered_count)
    }
}

/// Club-supplied fields of a new event
///
/// The store stamps on id, owning club, Pending status and a zero count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSubmission {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub capacity: u32,
    #[serde(default)]
    pub hod_letter_url: Option<String>,
    #[serde(default)]
    pub principal_letter_url: Option<String>,
}

/// Bookable venue, static reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hall {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub facilities: Vec<String>,
}

/// A student's enrollment against an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub event_id: String,
    pub student_id: String,
    pub student_name: String,
    pub timestamp: DateTime<Utc>,
}
