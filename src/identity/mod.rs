//! Identity Resolver
//!
//! Turns a role selection plus minimal input (a seat number or a club id)
//! into a fully populated [`User`]. There is no server-side verification;
//! the resolver only validates format and fills in directory data. The
//! caller persists the result via the session store.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::directory;
use crate::domain::{DomainError, User, UserRole};

/// PACE seat number format, e.g. 4PA21CS001
static SEAT_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^4PA\d{2}[A-Z]{2}\d{3}$").expect("seat number pattern is valid"));

/// Department code table for seat-number decoding
const DEPARTMENTS: &[(&str, &str)] = &[
    ("CS", "Computer Science"),
    ("IS", "Information Science"),
    ("EC", "Electronics & Comm."),
    ("ME", "Mechanical"),
    ("CV", "Civil"),
    ("BT", "Biotechnology"),
    ("AI", "Artificial Intelligence"),
];

/// Resolve the fixed admin identity
pub fn resolve_admin() -> User {
    User {
        id: "admin1".to_string(),
        name: "PACE Administrator".to_string(),
        email: "admin@pace.edu.in".to_string(),
        role: UserRole::Admin,
        avatar: Some("https://ui-avatars.com/api/?name=Admin&background=0D8ABC&color=fff".to_string()),
        seat_number: None,
        department: None,
        batch: None,
    }
}

/// Resolve a club coordinator identity
///
/// Unknown club ids fall back to the first registry entry rather than
/// failing, matching the login screen's behavior.
pub fn resolve_club(club_id: &str) -> User {
    let club = directory::find_club(club_id).unwrap_or(&directory::CLUBS[0]);

    User {
        id: club.id.to_string(),
        name: club.name.to_string(),
        email: club.email.to_string(),
        role: UserRole::Club,
        avatar: Some(club.avatar.to_string()),
        seat_number: None,
        department: None,
        batch: None,
    }
}

/// Resolve a student identity from a seat number
///
/// The seat number encodes admission year and department at fixed offsets
/// (4PA **21** **CS** 001). Format violations are validation errors; a seat
/// number missing from the roster still resolves with a placeholder name.
pub fn resolve_student(seat_number: &str) -> Result<User, DomainError> {
    let seat = seat_number.trim().to_uppercase();

    if !SEAT_NUMBER_PATTERN.is_match(&seat) {
        return Err(DomainError::validation(
            "Invalid USN format. Example: 4PA21CS001",
        ));
    }

    let year = &seat[3..5];
    let dept_code = &seat[5..7];

    let department = DEPARTMENTS
        .iter()
        .find(|(code, _)| *code == dept_code)
        .map(|(_, name)| *name)
        .unwrap_or("Engineering");
    let batch = format!("20{} Batch", year);

    let name = directory::find_student(&seat)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Student {}", seat));

    Ok(User {
        id: format!("student_{}", seat),
        email: format!("{}@pace.edu.in", seat.to_lowercase()),
        avatar: Some(format!(
            "https://ui-avatars.com/api/?name={}&background=22c55e&color=fff",
            name
        )),
        name,
        role: UserRole::Student,
        seat_number: Some(seat),
        department: Some(department.to_string()),
        batch: Some(batch),
    })
}
