use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::time_slot::TimeSlot;

/// Score of one proposed slot. Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub slot_id: Uuid,
    pub slot: TimeSlot,
    pub available_count: usize,
    pub total_participants: usize,
    pub availability_percent: f64,
    pub preferred_count: usize,
    pub preferred_percent: f64,
    pub is_perfect_match: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub event_id: Uuid,
    pub perfect_slots: Vec<Recommendation>,
    pub best_matches: Vec<Recommendation>,
}
