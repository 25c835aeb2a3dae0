use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::errors::MeetError;
use crate::models::time_slot::{CreateSlotRequest, TimeSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Open,
    Finalized,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Open => "open",
            EventStatus::Finalized => "finalized",
            EventStatus::Cancelled => "cancelled",
        }
    }

    /// Finalized and cancelled events accept no further changes.
    pub fn is_terminal(&self) -> bool {
        matches!(self, EventStatus::Finalized | EventStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: EventStatus) -> bool {
        match (self, next) {
            (EventStatus::Draft, EventStatus::Open) => true,
            (EventStatus::Draft | EventStatus::Open, EventStatus::Finalized) => true,
            (EventStatus::Draft | EventStatus::Open, EventStatus::Cancelled) => true,
            _ => false,
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = MeetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(EventStatus::Draft),
            "open" => Ok(EventStatus::Open),
            "finalized" => Ok(EventStatus::Finalized),
            "cancelled" => Ok(EventStatus::Cancelled),
            other => Err(MeetError::Validation(format!("unknown event status: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    Pending,
    Responded,
    Declined,
}

impl ParticipantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantStatus::Pending => "pending",
            ParticipantStatus::Responded => "responded",
            ParticipantStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantStatus {
    type Err = MeetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ParticipantStatus::Pending),
            "responded" => Ok(ParticipantStatus::Responded),
            "declined" => Ok(ParticipantStatus::Declined),
            other => Err(MeetError::Validation(format!(
                "unknown participant status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub event_id: Uuid,
    pub email: String,
    pub name: String,
    pub status: ParticipantStatus,
    pub created_at: DateTime<Utc>,
}

/// An event together with its proposed slots (ordered by start time) and
/// its participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub organizer_id: Uuid,
    pub duration: String,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalized_slot_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub proposed_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Event {
    pub fn slot(&self, slot_id: Uuid) -> Option<&TimeSlot> {
        self.proposed_slots.iter().find(|slot| slot.id == slot_id)
    }

    pub fn participant(&self, participant_id: Uuid) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == participant_id)
    }

    pub fn participant_emails(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.email.clone()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateParticipantRequest {
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "participant name must not be empty"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "duration must not be empty"))]
    pub duration: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "at least one proposed slot is required"))]
    pub proposed_slots: Vec<CreateSlotRequest>,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "at least one participant is required"),
        nested
    )]
    pub participants: Vec<CreateParticipantRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "duration must not be empty"))]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizeEventRequest {
    pub slot_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}
