//! # Recommendation engine
//!
//! Turns an event snapshot, its availability records and its participants'
//! preferred windows into a ranked list of proposed slots, split into slots
//! everyone can attend (`perfect_slots`) and the rest (`best_matches`).
//!
//! The computation itself ([`recommend`]) is pure and synchronous. The
//! [`Scheduler`] service only gathers the snapshot through the reader traits
//! and applies the failure policy:
//!
//! - missing or unreadable event: [`MeetError::EventNotFound`]
//! - availability lookup failure: [`MeetError::AvailabilityFetchFailed`]
//! - preference lookup failure: logged, scored as "no preferences"

pub mod aggregate;
pub mod overlap;
pub mod preference;
pub mod rank;
pub mod score;

use std::{collections::HashSet, sync::Arc};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::{MeetError, MeetResult};
use crate::models::{
    availability::Availability, event::Event, preferred_slot::PreferredSlot,
    recommendation::RecommendationResponse,
};
use crate::readers::{AvailabilityReader, EventReader, PreferenceReader};

/// Scores every proposed slot of `event` and returns them ranked and
/// partitioned. Every slot appears in exactly one bucket.
pub fn recommend(
    event: &Event,
    availabilities: &[Availability],
    preferences: Vec<PreferredSlot>,
) -> RecommendationResponse {
    let total_participants = event.participants.len();
    let participant_ids: HashSet<Uuid> = event.participants.iter().map(|p| p.id).collect();
    let by_slot = aggregate::group_by_slot(availabilities);
    let by_email = preference::group_by_email(preferences);

    let scored = event
        .proposed_slots
        .iter()
        .map(|slot| {
            let available = by_slot
                .get(&slot.id)
                .map(|records| aggregate::available_count(records, &participant_ids))
                .unwrap_or(0);
            let preferred = preference::preferred_count(slot, &event.participants, &by_email);
            score::score_slot(slot, available, preferred, total_participants)
        })
        .collect();

    rank::partition(event.id, rank::rank(scored))
}

/// Gathers the snapshot for one event and runs [`recommend`] over it.
#[derive(Clone)]
pub struct Scheduler {
    events: Arc<dyn EventReader>,
    availability: Arc<dyn AvailabilityReader>,
    preferences: Arc<dyn PreferenceReader>,
}

impl Scheduler {
    pub fn new(
        events: Arc<dyn EventReader>,
        availability: Arc<dyn AvailabilityReader>,
        preferences: Arc<dyn PreferenceReader>,
    ) -> Self {
        Self {
            events,
            availability,
            preferences,
        }
    }

    pub async fn get_recommendations(&self, event_id: Uuid) -> MeetResult<RecommendationResponse> {
        let event = match self.events.get_event(event_id).await {
            Ok(Some(event)) => event,
            Ok(None) => return Err(MeetError::EventNotFound(event_id)),
            Err(err) => {
                warn!(%event_id, error = %err, "Event lookup failed");
                return Err(MeetError::EventNotFound(event_id));
            }
        };

        let availabilities = self
            .availability
            .get_availability_by_event(event_id)
            .await
            .map_err(MeetError::AvailabilityFetchFailed)?;

        let preferences = self.load_preferences(&event).await;

        debug!(
            %event_id,
            slots = event.proposed_slots.len(),
            participants = event.participants.len(),
            availabilities = availabilities.len(),
            preferences = preferences.len(),
            "Computing recommendations"
        );

        Ok(recommend(&event, &availabilities, preferences))
    }

    async fn load_preferences(&self, event: &Event) -> Vec<PreferredSlot> {
        let emails = event.participant_emails();
        if emails.is_empty() {
            return Vec::new();
        }

        match self.preferences.get_preferred_slots_by_emails(&emails).await {
            Ok(preferences) => preferences,
            Err(err) => {
                warn!(
                    event_id = %event.id,
                    error = %err,
                    "Preferred slot lookup failed, scoring without preferences"
                );
                Vec::new()
            }
        }
    }
}
