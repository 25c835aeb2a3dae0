//! Read-only views of the stores the recommendation engine consumes.
//!
//! The engine only ever reads a consistent snapshot through these traits, so
//! any backend (Postgres repositories, mocks, in-memory fakes) can stand in.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{availability::Availability, event::Event, preferred_slot::PreferredSlot};

#[async_trait]
pub trait EventReader: Send + Sync {
    /// Loads an event with its proposed slots and participants.
    /// `Ok(None)` means the event does not exist.
    async fn get_event(&self, event_id: Uuid) -> eyre::Result<Option<Event>>;
}

#[async_trait]
pub trait AvailabilityReader: Send + Sync {
    async fn get_availability_by_event(&self, event_id: Uuid) -> eyre::Result<Vec<Availability>>;
}

#[async_trait]
pub trait PreferenceReader: Send + Sync {
    /// Returns every preferred window registered for any of `emails`,
    /// compared case-insensitively.
    async fn get_preferred_slots_by_emails(
        &self,
        emails: &[String],
    ) -> eyre::Result<Vec<PreferredSlot>>;
}
