use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A participant's standing time-of-day preference, keyed by email and
/// independent of any event.
///
/// Only the clock time of `start_time`/`end_time` matters for matching; the
/// date part is whatever day the preference was entered on. `day_of_week`
/// (0 = Sunday .. 6 = Saturday) optionally pins the preference to one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferredSlot {
    pub id: Uuid,
    pub email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePreferredSlotRequest {
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    pub start_time: String,
    pub end_time: String,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 6, message = "day_of_week must be between 0 (Sunday) and 6 (Saturday)"))]
    pub day_of_week: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePreferredSlotRequest {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 6, message = "day_of_week must be between 0 (Sunday) and 6 (Saturday)"))]
    pub day_of_week: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferredSlotListResponse {
    pub preferred_slots: Vec<PreferredSlot>,
}
