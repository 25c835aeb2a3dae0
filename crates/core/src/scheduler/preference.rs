use std::collections::HashMap;

use crate::models::{event::Participant, preferred_slot::PreferredSlot, time_slot::TimeSlot};
use crate::scheduler::overlap::slot_overlaps_preference;

pub type PreferencesByEmail = HashMap<String, Vec<PreferredSlot>>;

pub fn email_key(email: &str) -> String {
    email.to_lowercase()
}

pub fn group_by_email(preferences: Vec<PreferredSlot>) -> PreferencesByEmail {
    let mut by_email: PreferencesByEmail = HashMap::new();
    for preference in preferences {
        by_email
            .entry(email_key(&preference.email))
            .or_default()
            .push(preference);
    }
    by_email
}

pub fn matches_any(slot: &TimeSlot, preferences: &[PreferredSlot]) -> bool {
    preferences
        .iter()
        .any(|preference| slot_overlaps_preference(slot, preference))
}

/// Number of participants with at least one preferred window covering `slot`.
/// Participants without registered preferences contribute nothing.
pub fn preferred_count(
    slot: &TimeSlot,
    participants: &[Participant],
    preferences: &PreferencesByEmail,
) -> usize {
    participants
        .iter()
        .filter(|participant| {
            preferences
                .get(&email_key(&participant.email))
                .is_some_and(|windows| matches_any(slot, windows))
        })
        .count()
}
