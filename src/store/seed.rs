//! Seed dataset
//!
//! Initial content used when no persisted collections exist, and restored
//! verbatim by a database reset. Mirrors the portal's demo fixtures.

use crate::domain::{Event, EventStatus, Hall};

/// The six demo events
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "PACE Tech Fest 2024".to_string(),
            description: "The annual technical symposium of P.A. College of Engineering featuring hackathons, coding contests, and robotics.".to_string(),
            club_name: "IEEE Student Branch".to_string(),
            club_id: "club_ieee".to_string(),
            date: "2024-05-15".to_string(),
            time: "09:00".to_string(),
            location: "PACE Auditorium".to_string(),
            category: "Technology".to_string(),
            image_url: Some("https://picsum.photos/seed/pacetech/800/600".to_string()),
            capacity: 500,
            registered_count: 350,
            status: EventStatus::Approved,
            hod_letter_url: None,
            principal_letter_url: None,
        },
        Event {
            id: "2".to_string(),
            title: "Linux Install Fest".to_string(),
            description: "Learn how to install and configure various Linux distributions. Bring your laptops!".to_string(),
            club_name: "GLUG PACE".to_string(),
            club_id: "club_glug".to_string(),
            date: "2024-06-20".to_string(),
            time: "17:30".to_string(),
            location: "CS Seminar Hall".to_string(),
            category: "Workshop".to_string(),
            image_url: Some("https://picsum.photos/seed/linux/800/600".to_string()),
            capacity: 100,
            registered_count: 72,
            status: EventStatus::Approved,
            hod_letter_url: None,
            principal_letter_url: None,
        },
        Event {
            id: "3".to_string(),
            title: "Embedded Systems Workshop".to_string(),
            description: "Hands-on workshop on Arduino and Raspberry Pi for beginners.".to_string(),
            club_name: "Embed Club".to_string(),
            club_id: "club_embed".to_string(),
            date: "2024-04-10".to_string(),
            time: "14:00".to_string(),
            location: "Electronics Lab".to_string(),
            category: "Technology".to_string(),
            image_url: Some("https://picsum.photos/seed/arduino/800/600".to_string()),
            capacity: 60,
            registered_count: 45,
            status: EventStatus::Pending,
            hod_letter_url: None,
            principal_letter_url: None,
        },
        Event {
            id: "4".to_string(),
            title: "Ethnic Day Celebration".to_string(),
            description: "A day to celebrate our rich cultural heritage. Come dressed in your traditional best! Features dance, music, and fashion show.".to_string(),
            club_name: "PACE Cultural Club".to_string(),
            club_id: "club_cultural".to_string(),
            date: "2024-05-01".to_string(),
            time: "10:00".to_string(),
            location: "PACE Ground".to_string(),
            category: "Cultural".to_string(),
            image_url: Some("https://picsum.photos/seed/ethnic/800/600".to_string()),
            capacity: 2000,
            registered_count: 1200,
            status: EventStatus::Approved,
            hod_letter_url: None,
            principal_letter_url: None,
        },
        Event {
            id: "5".to_string(),
            title: "Inter-Department Cricket Tournament".to_string(),
            description: "The battle for the PACE Cup begins! Register your department teams now.".to_string(),
            club_name: "PACE Sports Association".to_string(),
            club_id: "club_sports".to_string(),
            date: "2024-04-25".to_string(),
            time: "09:00".to_string(),
            location: "College Ground".to_string(),
            category: "Sports".to_string(),
            image_url: Some("https://picsum.photos/seed/cricket/800/600".to_string()),
            capacity: 200,
            registered_count: 150,
            status: EventStatus::Approved,
            hod_letter_url: None,
            principal_letter_url: None,
        },
        Event {
            id: "6".to_string(),
            title: "Mega Blood Donation Camp".to_string(),
            description: "Join hands to save lives. Organized in association with Red Cross Society.".to_string(),
            club_name: "NSS Unit".to_string(),
            club_id: "club_nss".to_string(),
            date: "2024-04-15".to_string(),
            time: "09:30".to_string(),
            location: "Main Block Lobby".to_string(),
            category: "Social Service".to_string(),
            image_url: Some("https://picsum.photos/seed/blood/800/600".to_string()),
            capacity: 500,
            registered_count: 120,
            status: EventStatus::Approved,
            hod_letter_url: None,
            principal_letter_url: None,
        },
    ]
}

/// The five campus halls
pub fn seed_halls() -> Vec<Hall> {
    vec![
        Hall {
            id: "h1".to_string(),
            name: "PACE Main Auditorium".to_string(),
            capacity: 1200,
            facilities: vec!["Projector".to_string(), "Dolby Sound".to_string(), "Central AC".to_string()],
        },
        Hall {
            id: "h2".to_string(),
            name: "CS Seminar Hall".to_string(),
            capacity: 150,
            facilities: vec!["Smart Board".to_string(), "AC".to_string(), "Video Conf".to_string()],
        },
        Hall {
            id: "h3".to_string(),
            name: "Mechanical Block AV Room".to_string(),
            capacity: 100,
            facilities: vec!["Projector".to_string(), "Whiteboard".to_string()],
        },
        Hall {
            id: "h4".to_string(),
            name: "Admin Conference Hall".to_string(),
            capacity: 50,
            facilities: vec!["TV Screen".to_string(), "Round Table".to_string()],
        },
        Hall {
            id: "h5".to_string(),
            name: "College Ground".to_string(),
            capacity: 5000,
            facilities: vec!["PA System".to_string(), "Stage".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let events = seed_events();
        assert_eq!(events.len(), 6);
        assert_eq!(seed_halls().len(), 5);

        // One pending event for the admin review demo
        let pending = events
            .iter()
            .filter(|e| e.status == EventStatus::Pending)
            .count();
        assert_eq!(pending, 1);
    }

    #[test]
    fn test_seed_event_one() {
        let events = seed_events();
        let first = events.iter().find(|e| e.id == "1").unwrap();

        assert_eq!(first.status, EventStatus::Approved);
        assert_eq!(first.capacity, 500);
        assert_eq!(first.registered_count, 350);
    }
}
