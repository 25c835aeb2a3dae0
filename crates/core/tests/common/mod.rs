#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use fake::{
    faker::{internet::en::SafeEmail, name::en::Name},
    Fake,
};
use meetsync_core::models::{
    availability::{Availability, AvailabilityStatus},
    event::{Event, EventStatus, Participant, ParticipantStatus},
    preferred_slot::PreferredSlot,
    time_slot::TimeSlot,
};
use uuid::Uuid;

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid test timestamp")
}

/// 2026-02-13 is a Friday.
pub fn friday_at(hour: u32, minute: u32) -> DateTime<Utc> {
    at(2026, 2, 13, hour, minute)
}

pub fn slot(event_id: Uuid, start: DateTime<Utc>, minutes: i64) -> TimeSlot {
    TimeSlot {
        id: Uuid::new_v4(),
        event_id,
        start_time: start,
        end_time: start + Duration::minutes(minutes),
        timezone: "UTC".to_string(),
        created_at: start - Duration::days(7),
    }
}

pub fn participant(event_id: Uuid, email: &str) -> Participant {
    Participant {
        id: Uuid::new_v4(),
        event_id,
        email: email.to_string(),
        name: Name().fake(),
        status: ParticipantStatus::Pending,
        created_at: friday_at(8, 0),
    }
}

pub fn random_participant(event_id: Uuid) -> Participant {
    let email: String = SafeEmail().fake();
    participant(event_id, &email)
}

pub fn event_with(event_id: Uuid, participants: Vec<Participant>, slots: Vec<TimeSlot>) -> Event {
    Event {
        id: event_id,
        title: "Planning sync".to_string(),
        description: String::new(),
        organizer_id: Uuid::new_v4(),
        duration: "1h".to_string(),
        status: EventStatus::Open,
        finalized_slot_id: None,
        created_at: friday_at(8, 0),
        updated_at: friday_at(8, 0),
        proposed_slots: slots,
        participants,
    }
}

pub fn availability(
    event_id: Uuid,
    participant_id: Uuid,
    slot_id: Uuid,
    status: AvailabilityStatus,
) -> Availability {
    Availability {
        id: Uuid::new_v4(),
        event_id,
        participant_id,
        slot_id,
        status,
        available_from: None,
        available_to: None,
        created_at: friday_at(9, 0),
        updated_at: friday_at(9, 0),
    }
}

pub fn preference(
    email: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    day_of_week: Option<i32>,
) -> PreferredSlot {
    PreferredSlot {
        id: Uuid::new_v4(),
        email: email.to_string(),
        start_time: start,
        end_time: end,
        timezone: "UTC".to_string(),
        day_of_week,
        created_at: friday_at(7, 0),
        updated_at: friday_at(7, 0),
    }
}
