//! College directory
//!
//! Fixed reference data standing in for the college's people database:
//! the club registry and the student roster. Never persisted, never
//! mutated; the identity resolver reads it at login time.

/// A registered student club
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub avatar: &'static str,
}

/// Club registry, in display order
pub const CLUBS: &[ClubRecord] = &[
    ClubRecord {
        id: "club_ieee",
        name: "IEEE Student Branch",
        email: "ieee@pace.edu.in",
        avatar: "https://ui-avatars.com/api/?name=IEEE&background=00629B&color=fff",
    },
    ClubRecord {
        id: "club_glug",
        name: "GLUG PACE",
        email: "glug@pace.edu.in",
        avatar: "https://ui-avatars.com/api/?name=GLUG&background=333&color=fff",
    },
    ClubRecord {
        id: "club_embed",
        name: "Embed Club",
        email: "embed@pace.edu.in",
        avatar: "https://ui-avatars.com/api/?name=Embed&background=Edbb11&color=fff",
    },
    ClubRecord {
        id: "club_aces",
        name: "ACES (CS Dept)",
        email: "aces@pace.edu.in",
        avatar: "https://ui-avatars.com/api/?name=ACES&background=2563eb&color=fff",
    },
    ClubRecord {
        id: "club_force",
        name: "FORCE (Civil Dept)",
        email: "force@pace.edu.in",
        avatar: "https://ui-avatars.com/api/?name=FORCE&background=dc2626&color=fff",
    },
    ClubRecord {
        id: "club_cultural",
        name: "PACE Cultural Club",
        email: "cultural@pace.edu.in",
        avatar: "https://ui-avatars.com/api/?name=Cultural&background=db2777&color=fff",
    },
    ClubRecord {
        id: "club_sports",
        name: "PACE Sports Association",
        email: "sports@pace.edu.in",
        avatar: "https://ui-avatars.com/api/?name=Sports&background=16a34a&color=fff",
    },
    ClubRecord {
        id: "club_nss",
        name: "NSS Unit",
        email: "nss@pace.edu.in",
        avatar: "https://ui-avatars.com/api/?name=NSS&background=ea580c&color=fff",
    },
    ClubRecord {
        id: "club_edc",
        name: "EDC (Entrepreneurship)",
        email: "edc@pace.edu.in",
        avatar: "https://ui-avatars.com/api/?name=EDC&background=7c3aed&color=fff",
    },
];

/// Student roster: seat number -> enrolled name
///
/// Seat numbers absent from the roster still resolve; the identity layer
/// synthesizes a placeholder name for them.
pub const STUDENTS: &[(&str, &str)] = &[
    ("4PA21CS001", "Aditya Rao"),
    ("4PA21CS045", "Priya Shetty"),
    ("4PA21EC012", "Mohammed Zaid"),
    ("4PA21ME033", "Karthik Bhat"),
    ("4PA21CV008", "Ananya Naik"),
    ("4PA21IS022", "Rahul K"),
    ("4PA21CS101", "Sneha Gupta"),
];

/// Look up a club by id
pub fn find_club(club_id: &str) -> Option<&'static ClubRecord> {
    CLUBS.iter().find(|c| c.id == club_id)
}

/// Look up an enrolled student's name by seat number
pub fn find_student(seat_number: &str) -> Option<&'static str> {
    STUDENTS
        .iter()
        .find(|(seat, _)| *seat == seat_number)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_club() {
        let club = find_club("club_glug").unwrap();
        assert_eq!(club.name, "GLUG PACE");

        assert!(find_club("club_unknown").is_none());
    }

    #[test]
    fn test_find_student() {
        assert_eq!(find_student("4PA21CS001"), Some("Aditya Rao"));
        assert!(find_student("4PA21CS999").is_none());
    }

    #[test]
    fn test_club_ids_are_unique() {
        for (i, club) in CLUBS.iter().enumerate() {
            assert!(
                CLUBS.iter().skip(i + 1).all(|c| c.id != club.id),
                "duplicate club id: {}",
                club.id
            );
        }
    }
}
