//! View Projections
//!
//! Pure derived queries over store snapshots. No state, no side effects;
//! the rendering layer owns any caching.

use serde::Serialize;

use crate::domain::{Event, EventStatus, Registration};

/// Category filter labels the student dashboard offers
///
/// Labels alias onto stored categories where the display name differs from
/// the category a club actually submits.
const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("Technical", "Technology"),
    ("Social", "Social Service"),
];

/// Free-text search combined with a category filter
///
/// Search is a case-insensitive substring match on title and category.
/// A category of "All" (or empty) disables the filter.
pub fn filter_events(events: &[Event], search: &str, category: &str) -> Vec<Event> {
    let needle = search.trim().to_lowercase();

    events
        .iter()
        .filter(|e| {
            let matches_search = needle.is_empty()
                || e.title.to_lowercase().contains(&needle)
                || e.category.to_lowercase().contains(&needle);

            matches_search && matches_category(&e.category, category)
        })
        .cloned()
        .collect()
}

fn matches_category(stored: &str, filter: &str) -> bool {
    if filter.is_empty() || filter == "All" {
        return true;
    }

    let aliased = CATEGORY_ALIASES
        .iter()
        .find(|(label, _)| *label == filter)
        .map(|(_, target)| *target)
        .unwrap_or(filter);

    stored == aliased
}

/// Events awaiting admin review
pub fn pending_events(events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.status == EventStatus::Pending)
        .cloned()
        .collect()
}

/// Events cleared for the student view
pub fn approved_events(events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.status == EventStatus::Approved)
        .cloned()
        .collect()
}

/// Admin dashboard counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_events: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub registrations: usize,
}

/// Counters shown on the admin dashboard
pub fn dashboard_summary(events: &[Event], registrations: &[Registration]) -> DashboardSummary {
    let count = |status: EventStatus| events.iter().filter(|e| e.status == status).count();

    DashboardSummary {
        total_events: events.len(),
        pending: count(EventStatus::Pending),
        approved: count(EventStatus::Approved),
        rejected: count(EventStatus::Rejected),
        registrations: registrations.len(),
    }
}
