//! Event Store Repository
//!
//! The mutable collections behind the portal: events, halls and
//! registrations. The store is constructed explicitly with
//! [`EventStore::open`], loads seed-or-persisted data, and is the sole
//! writer of the persisted collections. Every mutation takes the acting
//! identity and enforces the role capability at this boundary.
//!
//! Persistence is best effort: each mutation rewrites the affected
//! collection file, and a failed write leaves the in-memory state
//! authoritative for the rest of the session (warning logged, no rollback).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{DomainError, Event, EventStatus, EventSubmission, Hall, Registration, User};

use super::seed;
use super::StoreError;

const EVENTS_FILE: &str = "events.json";
const HALLS_FILE: &str = "halls.json";
const REGISTRATIONS_FILE: &str = "registrations.json";

/// The three owned collections
#[derive(Debug)]
struct Collections {
    events: Vec<Event>,
    halls: Vec<Hall>,
    registrations: Vec<Registration>,
}

/// Store for events, halls and registrations
#[derive(Debug)]
pub struct EventStore {
    data_dir: PathBuf,
    inner: RwLock<Collections>,
}

impl EventStore {
    /// Open the store, loading each collection from disk or falling back
    /// to the seed dataset
    pub fn open(data_dir: &Path) -> Self {
        let events = load_collection(&data_dir.join(EVENTS_FILE), seed::seed_events);
        let halls = load_collection(&data_dir.join(HALLS_FILE), seed::seed_halls);
        let registrations = load_collection(&data_dir.join(REGISTRATIONS_FILE), Vec::new);

        Self {
            data_dir: data_dir.to_path_buf(),
            inner: RwLock::new(Collections {
                events,
                halls,
                registrations,
            }),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Submit a new event on behalf of a club
    ///
    /// The submission is stamped with a fresh id, the acting club's
    /// id/name, Pending status and a zero registration count, then
    /// prepended so the newest event lists first.
    pub fn add_event(&self, actor: &User, submission: EventSubmission) -> Result<Event, StoreError> {
        if !actor.is_club() {
            return Err(DomainError::unauthorized("Only clubs can submit events").into());
        }

        validate_submission(&submission)?;

        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: submission.title,
            description: submission.description,
            club_name: actor.name.clone(),
            club_id: actor.id.clone(),
            date: submission.date,
            time: submission.time,
            location: submission.location,
            category: submission.category,
            image_url: submission.image_url,
            capacity: submission.capacity,
            registered_count: 0,
            status: EventStatus::Pending,
            hod_letter_url: submission.hod_letter_url,
            principal_letter_url: submission.principal_letter_url,
        };

        let mut inner = self.write_lock();
        inner.events.insert(0, event.clone());
        self.save_collection(EVENTS_FILE, &inner.events);

        tracing::info!("Event submitted by {}: {}", event.club_name, event.title);
        Ok(event)
    }

    /// Approve or reject an event (admin only)
    pub fn update_event_status(
        &self,
        actor: &User,
        id: &str,
        status: EventStatus,
    ) -> Result<Event, StoreError> {
        if !actor.is_admin() {
            return Err(DomainError::unauthorized("Only admins can change event status").into());
        }

        let mut inner = self.write_lock();
        let event = inner
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DomainError::EventNotFound(id.to_string()))?;

        event.status = status;
        let updated = event.clone();
        self.save_collection(EVENTS_FILE, &inner.events);

        tracing::info!("Event {} set to {}", updated.id, updated.status);
        Ok(updated)
    }

    /// Remove an event (admin only)
    pub fn delete_event(&self, actor: &User, id: &str) -> Result<(), StoreError> {
        if !actor.is_admin() {
            return Err(DomainError::unauthorized("Only admins can delete events").into());
        }

        let mut inner = self.write_lock();
        let before = inner.events.len();
        inner.events.retain(|e| e.id != id);

        if inner.events.len() == before {
            return Err(DomainError::EventNotFound(id.to_string()).into());
        }

        self.save_collection(EVENTS_FILE, &inner.events);
        Ok(())
    }

    /// Register the acting student for an event
    ///
    /// Double booking and over-capacity registration are rejected here,
    /// not left to the caller's pre-check.
    pub fn register_for_event(&self, actor: &User, event_id: &str) -> Result<Registration, StoreError> {
        if !actor.is_student() {
            return Err(DomainError::unauthorized("Only students can register for events").into());
        }

        let mut inner = self.write_lock();

        if inner
            .registrations
            .iter()
            .any(|r| r.event_id == event_id && r.student_id == actor.id)
        {
            return Err(DomainError::AlreadyRegistered(event_id.to_string()).into());
        }

        let event = inner
            .events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| DomainError::EventNotFound(event_id.to_string()))?;

        if event.is_full() {
            return Err(DomainError::EventFull(event_id.to_string()).into());
        }

        event.registered_count += 1;

        let registration = Registration {
            id: Uuid::new_v4().to_string(),
            event_id: event_id.to_string(),
            student_id: actor.id.clone(),
            student_name: actor.name.clone(),
            timestamp: Utc::now(),
        };
        inner.registrations.push(registration.clone());

        self.save_collection(EVENTS_FILE, &inner.events);
        self.save_collection(REGISTRATIONS_FILE, &inner.registrations);

        Ok(registration)
    }

    /// Destructive reset: restore the seed collections and clear all
    /// registrations (admin only)
    pub fn reset(&self, actor: &User) -> Result<(), StoreError> {
        if !actor.is_admin() {
            return Err(DomainError::unauthorized("Only admins can reset the database").into());
        }

        let mut inner = self.write_lock();
        inner.events = seed::seed_events();
        inner.halls = seed::seed_halls();
        inner.registrations.clear();

        self.save_collection(EVENTS_FILE, &inner.events);
        self.save_collection(HALLS_FILE, &inner.halls);
        self.save_collection(REGISTRATIONS_FILE, &inner.registrations);

        tracing::warn!("Database reset to seed data by {}", actor.id);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Snapshot of all events, newest first
    pub fn events(&self) -> Vec<Event> {
        self.read_lock().events.clone()
    }

    /// Snapshot of the hall reference data
    pub fn halls(&self) -> Vec<Hall> {
        self.read_lock().halls.clone()
    }

    /// Snapshot of all registrations
    pub fn registrations(&self) -> Vec<Registration> {
        self.read_lock().registrations.clone()
    }

    /// Single event by id
    pub fn find_event(&self, id: &str) -> Option<Event> {
        self.read_lock().events.iter().find(|e| e.id == id).cloned()
    }

    /// All events owned by a club
    pub fn events_by_club(&self, club_id: &str) -> Vec<Event> {
        self.read_lock()
            .events
            .iter()
            .filter(|e| e.club_id == club_id)
            .cloned()
            .collect()
    }

    /// Events visible to students: approved only
    pub fn events_for_student(&self) -> Vec<Event> {
        self.read_lock()
            .events
            .iter()
            .filter(|e| e.status == EventStatus::Approved)
            .cloned()
            .collect()
    }

    /// Whether a student holds a registration for an event
    pub fn is_registered(&self, event_id: &str, student_id: &str) -> bool {
        self.read_lock()
            .registrations
            .iter()
            .any(|r| r.event_id == event_id && r.student_id == student_id)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Rewrite one collection file; failure is logged, never propagated
    fn save_collection<T: Serialize>(&self, file: &str, items: &[T]) {
        let path = self.data_dir.join(file);
        let result = serde_json::to_string_pretty(items)
            .map_err(StoreError::from)
            .and_then(|json| fs::write(&path, json).map_err(StoreError::from));

        if let Err(e) = result {
            tracing::warn!(
                "Failed to persist {}; in-memory state remains authoritative: {}",
                file,
                e
            );
        }
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, Collections> {
        self.inner.read().expect("store lock poisoned")
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Collections> {
        self.inner.write().expect("store lock poisoned")
    }
}

/// Required submission fields; digital approval needs both letters
fn validate_submission(submission: &EventSubmission) -> Result<(), DomainError> {
    if submission.title.trim().is_empty() {
        return Err(DomainError::validation("Event title is required"));
    }
    if submission.category.trim().is_empty() {
        return Err(DomainError::validation("Event category is required"));
    }
    if submission.capacity == 0 {
        return Err(DomainError::validation("Capacity must be a positive number"));
    }
    if submission.hod_letter_url.is_none() || submission.principal_letter_url.is_none() {
        return Err(DomainError::validation(
            "Digital approval requires both HOD and Principal permission letters",
        ));
    }
    Ok(())
}

/// Load a collection file, falling back to `fallback` when the file is
/// missing or unreadable
fn load_collection<T, F>(path: &Path, fallback: F) -> Vec<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return fallback(),
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Discarding corrupt collection {:?}: {}", path, e);
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity;

    fn open_store() -> (tempfile::TempDir, EventStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path());
        (dir, store)
    }

    fn submission() -> EventSubmission {
        EventSubmission {
            title: "Robotics 101".to_string(),
            description: "Intro session".to_string(),
            date: "2024-07-01".to_string(),
            time: "10:00".to_string(),
            location: "CS Seminar Hall".to_string(),
            category: "Workshop".to_string(),
            image_url: None,
            capacity: 40,
            hod_letter_url: Some("data:application/pdf;base64,aG9k".to_string()),
            principal_letter_url: Some("data:application/pdf;base64,cHJpbg==".to_string()),
        }
    }

    #[test]
    fn test_opens_with_seed_data() {
        let (_dir, store) = open_store();

        assert_eq!(store.events().len(), 6);
        assert_eq!(store.halls().len(), 5);
        assert!(store.registrations().is_empty());
    }

    #[test]
    fn test_add_event_prepends_pending() {
        let (_dir, store) = open_store();
        let club = identity::resolve_club("club_glug");

        let event = store.add_event(&club, submission()).unwrap();

        assert_eq!(event.status, EventStatus::Pending);
        assert_eq!(event.registered_count, 0);
        assert_eq!(event.club_id, "club_glug");
        assert_eq!(event.club_name, "GLUG PACE");

        // Newest first
        assert_eq!(store.events()[0].id, event.id);
        assert_eq!(store.events().len(), 7);
    }

    #[test]
    fn test_add_event_requires_club_role() {
        let (_dir, store) = open_store();
        let student = identity::resolve_student("4PA21CS001").unwrap();

        let result = store.add_event(&student, submission());
        assert!(matches!(
            result,
            Err(StoreError::Domain(DomainError::Unauthorized(_)))
        ));
    }

    #[test]
    fn test_add_event_requires_both_letters() {
        let (_dir, store) = open_store();
        let club = identity::resolve_club("club_glug");

        let mut incomplete = submission();
        incomplete.principal_letter_url = None;

        let result = store.add_event(&club, incomplete);
        assert!(matches!(
            result,
            Err(StoreError::Domain(DomainError::Validation(_)))
        ));
    }

    #[test]
    fn test_update_status_admin_only() {
        let (_dir, store) = open_store();
        let admin = identity::resolve_admin();
        let club = identity::resolve_club("club_embed");

        let result = store.update_event_status(&club, "3", EventStatus::Approved);
        assert!(matches!(
            result,
            Err(StoreError::Domain(DomainError::Unauthorized(_)))
        ));

        let updated = store
            .update_event_status(&admin, "3", EventStatus::Approved)
            .unwrap();
        assert_eq!(updated.status, EventStatus::Approved);
    }

    #[test]
    fn test_update_status_unknown_id_is_an_error() {
        let (_dir, store) = open_store();
        let admin = identity::resolve_admin();

        let result = store.update_event_status(&admin, "no_such_event", EventStatus::Rejected);
        assert!(matches!(
            result,
            Err(StoreError::Domain(DomainError::EventNotFound(_)))
        ));
    }

    #[test]
    fn test_approve_then_reject_controls_student_visibility() {
        let (_dir, store) = open_store();
        let admin = identity::resolve_admin();

        store
            .update_event_status(&admin, "3", EventStatus::Approved)
            .unwrap();
        assert!(store.events_for_student().iter().any(|e| e.id == "3"));

        store
            .update_event_status(&admin, "3", EventStatus::Rejected)
            .unwrap();
        assert!(!store.events_for_student().iter().any(|e| e.id == "3"));
    }

    #[test]
    fn test_events_for_student_is_exactly_the_approved_subset() {
        let (_dir, store) = open_store();

        let visible = store.events_for_student();
        assert!(visible.iter().all(|e| e.status == EventStatus::Approved));
        assert_eq!(visible.len(), 5);
        assert!(!visible.iter().any(|e| e.id == "3"));
    }

    #[test]
    fn test_register_increments_count_and_records() {
        let (_dir, store) = open_store();
        let student = identity::resolve_student("4PA21CS001").unwrap();

        let before = store.find_event("1").unwrap().registered_count;
        assert_eq!(before, 350);

        let registration = store.register_for_event(&student, "1").unwrap();

        assert_eq!(registration.event_id, "1");
        assert_eq!(registration.student_name, "Aditya Rao");
        assert_eq!(store.find_event("1").unwrap().registered_count, 351);
        assert!(store.is_registered("1", &student.id));
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let (_dir, store) = open_store();
        let student = identity::resolve_student("4PA21CS001").unwrap();

        store.register_for_event(&student, "2").unwrap();
        let result = store.register_for_event(&student, "2");

        assert!(matches!(
            result,
            Err(StoreError::Domain(DomainError::AlreadyRegistered(_)))
        ));
        assert_eq!(store.find_event("2").unwrap().registered_count, 73);
    }

    #[test]
    fn test_register_rejects_full_event() {
        let (_dir, store) = open_store();
        let admin = identity::resolve_admin();
        let club = identity::resolve_club("club_glug");

        let mut tiny = submission();
        tiny.capacity = 1;
        let event = store.add_event(&club, tiny).unwrap();
        store
            .update_event_status(&admin, &event.id, EventStatus::Approved)
            .unwrap();

        let first = identity::resolve_student("4PA21CS001").unwrap();
        let second = identity::resolve_student("4PA21CS045").unwrap();

        store.register_for_event(&first, &event.id).unwrap();
        let result = store.register_for_event(&second, &event.id);

        assert!(matches!(
            result,
            Err(StoreError::Domain(DomainError::EventFull(_)))
        ));
    }

    #[test]
    fn test_register_requires_student_role() {
        let (_dir, store) = open_store();
        let admin = identity::resolve_admin();

        let result = store.register_for_event(&admin, "1");
        assert!(matches!(
            result,
            Err(StoreError::Domain(DomainError::Unauthorized(_)))
        ));
    }

    #[test]
    fn test_register_unknown_event() {
        let (_dir, store) = open_store();
        let student = identity::resolve_student("4PA21CS001").unwrap();

        let result = store.register_for_event(&student, "missing");
        assert!(matches!(
            result,
            Err(StoreError::Domain(DomainError::EventNotFound(_)))
        ));
    }

    #[test]
    fn test_events_by_club() {
        let (_dir, store) = open_store();

        let ieee = store.events_by_club("club_ieee");
        assert_eq!(ieee.len(), 1);
        assert_eq!(ieee[0].id, "1");

        assert!(store.events_by_club("club_edc").is_empty());
    }

    #[test]
    fn test_delete_event() {
        let (_dir, store) = open_store();
        let admin = identity::resolve_admin();

        store.delete_event(&admin, "6").unwrap();
        assert!(store.find_event("6").is_none());

        let result = store.delete_event(&admin, "6");
        assert!(matches!(
            result,
            Err(StoreError::Domain(DomainError::EventNotFound(_)))
        ));
    }

    #[test]
    fn test_reset_restores_seed() {
        let (_dir, store) = open_store();
        let admin = identity::resolve_admin();
        let club = identity::resolve_club("club_nss");
        let student = identity::resolve_student("4PA21CV008").unwrap();

        store.add_event(&club, submission()).unwrap();
        store.register_for_event(&student, "4").unwrap();
        store.delete_event(&admin, "5").unwrap();

        store.reset(&admin).unwrap();

        assert_eq!(store.events(), seed::seed_events());
        assert_eq!(store.halls(), seed::seed_halls());
        assert!(store.registrations().is_empty());
    }

    #[test]
    fn test_reset_admin_only() {
        let (_dir, store) = open_store();
        let club = identity::resolve_club("club_nss");

        let result = store.reset(&club);
        assert!(matches!(
            result,
            Err(StoreError::Domain(DomainError::Unauthorized(_)))
        ));
    }

    #[test]
    fn test_persisted_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let club = identity::resolve_club("club_aces");
        let student = identity::resolve_student("4PA21CS101").unwrap();

        let created = {
            let store = EventStore::open(dir.path());
            let event = store.add_event(&club, submission()).unwrap();
            store.register_for_event(&student, "1").unwrap();
            event
        };

        let store = EventStore::open(dir.path());
        assert_eq!(store.events().len(), 7);
        assert_eq!(store.events()[0], created);
        assert_eq!(store.find_event("1").unwrap().registered_count, 351);
        assert!(store.is_registered("1", &student.id));
    }

    #[test]
    fn test_corrupt_collection_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(EVENTS_FILE), "[{broken").unwrap();

        let store = EventStore::open(dir.path());
        assert_eq!(store.events().len(), 6);
    }
}
