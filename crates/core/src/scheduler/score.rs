use crate::models::{recommendation::Recommendation, time_slot::TimeSlot};

/// `count / total * 100`, or 0 when there is nobody to count.
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// An empty event never yields a perfect match, even though 0 == 0.
pub fn is_perfect_match(available_count: usize, total_participants: usize) -> bool {
    total_participants > 0 && available_count == total_participants
}

pub fn score_slot(
    slot: &TimeSlot,
    available_count: usize,
    preferred_count: usize,
    total_participants: usize,
) -> Recommendation {
    Recommendation {
        slot_id: slot.id,
        slot: slot.clone(),
        available_count,
        total_participants,
        availability_percent: percent(available_count, total_participants),
        preferred_count,
        preferred_percent: percent(preferred_count, total_participants),
        is_perfect_match: is_perfect_match(available_count, total_participants),
    }
}
