use std::cmp::Ordering;

use uuid::Uuid;

use crate::models::recommendation::{Recommendation, RecommendationResponse};

/// Perfect matches first, then higher availability, then higher preference
/// coverage. Preference only breaks ties between equal availability.
pub fn compare(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.is_perfect_match
        .cmp(&a.is_perfect_match)
        .then_with(|| b.availability_percent.total_cmp(&a.availability_percent))
        .then_with(|| b.preferred_percent.total_cmp(&a.preferred_percent))
}

/// Stable sort by [`compare`]; fully tied slots keep their input order.
pub fn rank(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    recommendations.sort_by(compare);
    recommendations
}

/// Splits ranked recommendations into perfect and best-effort buckets,
/// preserving order within each.
pub fn partition(event_id: Uuid, ranked: Vec<Recommendation>) -> RecommendationResponse {
    let (perfect_slots, best_matches) = ranked
        .into_iter()
        .partition(|recommendation| recommendation.is_perfect_match);

    RecommendationResponse {
        event_id,
        perfect_slots,
        best_matches,
    }
}
