//! Row types as stored in Postgres, and their conversion into domain models.
//!
//! Status columns are plain `VARCHAR`s holding the lowercase wire names;
//! an unknown value in the table is reported as an error rather than mapped
//! to a default.

use chrono::{DateTime, Utc};
use eyre::Result;
use meetsync_core::models::{
    availability::{Availability, AvailabilityStatus},
    event::{Event, EventStatus, Participant, ParticipantStatus},
    preferred_slot::PreferredSlot,
    time_slot::TimeSlot,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEvent {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub organizer_id: Uuid,
    pub duration: String,
    pub status: String,
    pub finalized_slot_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbEvent {
    pub fn into_event(
        self,
        proposed_slots: Vec<TimeSlot>,
        participants: Vec<Participant>,
    ) -> Result<Event> {
        Ok(Event {
            id: self.id,
            title: self.title,
            description: self.description,
            organizer_id: self.organizer_id,
            duration: self.duration,
            status: self.status.parse::<EventStatus>()?,
            finalized_slot_id: self.finalized_slot_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            proposed_slots,
            participants,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlot {
    pub id: Uuid,
    pub event_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbTimeSlot> for TimeSlot {
    fn from(row: DbTimeSlot) -> Self {
        TimeSlot {
            id: row.id,
            event_id: row.event_id,
            start_time: row.start_time,
            end_time: row.end_time,
            timezone: row.timezone,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbParticipant {
    pub id: Uuid,
    pub event_id: Uuid,
    pub email: String,
    pub name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbParticipant> for Participant {
    type Error = eyre::Report;

    fn try_from(row: DbParticipant) -> Result<Self> {
        Ok(Participant {
            id: row.id,
            event_id: row.event_id,
            email: row.email,
            name: row.name,
            status: row.status.parse::<ParticipantStatus>()?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailability {
    pub id: Uuid,
    pub event_id: Uuid,
    pub participant_id: Uuid,
    pub slot_id: Uuid,
    pub status: String,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbAvailability> for Availability {
    type Error = eyre::Report;

    fn try_from(row: DbAvailability) -> Result<Self> {
        Ok(Availability {
            id: row.id,
            event_id: row.event_id,
            participant_id: row.participant_id,
            slot_id: row.slot_id,
            status: row.status.parse::<AvailabilityStatus>()?,
            available_from: row.available_from,
            available_to: row.available_to,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPreferredSlot {
    pub id: Uuid,
    pub email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub timezone: String,
    pub day_of_week: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbPreferredSlot> for PreferredSlot {
    fn from(row: DbPreferredSlot) -> Self {
        PreferredSlot {
            id: row.id,
            email: row.email,
            start_time: row.start_time,
            end_time: row.end_time,
            timezone: row.timezone,
            day_of_week: row.day_of_week,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
