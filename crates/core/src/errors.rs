use thiserror::Error;
use uuid::Uuid;

use crate::models::event::EventStatus;

#[derive(Error, Debug)]
pub enum MeetError {
    #[error("Event not found: {0}")]
    EventNotFound(Uuid),

    #[error("Slot not found: {0}")]
    SlotNotFound(Uuid),

    #[error("Participant not found: {0}")]
    ParticipantNotFound(Uuid),

    #[error("Availability not found: {0}")]
    AvailabilityNotFound(Uuid),

    #[error("Preferred slot not found: {0}")]
    PreferredSlotNotFound(Uuid),

    #[error("Slot {0} does not belong to this event")]
    SlotNotInEvent(Uuid),

    #[error("Invalid event status for this operation: {0}")]
    InvalidStatus(EventStatus),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to fetch availability: {0}")]
    AvailabilityFetchFailed(eyre::Report),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl MeetError {
    /// True for every kind that means "the addressed resource does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MeetError::EventNotFound(_)
                | MeetError::SlotNotFound(_)
                | MeetError::ParticipantNotFound(_)
                | MeetError::AvailabilityNotFound(_)
                | MeetError::PreferredSlotNotFound(_)
        )
    }
}

pub type MeetResult<T> = Result<T, MeetError>;
