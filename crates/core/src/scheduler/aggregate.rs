use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::models::availability::Availability;

/// Groups availability records by slot. No filtering happens here.
pub fn group_by_slot(availabilities: &[Availability]) -> HashMap<Uuid, Vec<&Availability>> {
    let mut by_slot: HashMap<Uuid, Vec<&Availability>> = HashMap::new();
    for availability in availabilities {
        by_slot
            .entry(availability.slot_id)
            .or_default()
            .push(availability);
    }
    by_slot
}

/// Number of distinct event participants marked present on a slot.
///
/// Records from participants outside `participant_ids` are ignored, and a
/// participant is counted at most once however many records they have.
pub fn available_count(records: &[&Availability], participant_ids: &HashSet<Uuid>) -> usize {
    records
        .iter()
        .filter(|a| a.status.counts_as_present() && participant_ids.contains(&a.participant_id))
        .map(|a| a.participant_id)
        .collect::<HashSet<_>>()
        .len()
}
