use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::MeetResult;
use crate::models::preferred_slot::{
    CreatePreferredSlotRequest, PreferredSlot, UpdatePreferredSlotRequest,
};
use crate::time::{parse_time, parse_timezone};
use crate::validation::validate_request;

/// Builds a preferred window from a creation request.
///
/// Start and end are stored as given; a window whose clock end comes before
/// its clock start (22:00 to 02:00) is kept and simply never matches a slot.
pub fn new_preferred_slot(
    request: CreatePreferredSlotRequest,
    now: DateTime<Utc>,
) -> MeetResult<PreferredSlot> {
    validate_request(&request)?;

    let start_time = parse_time(&request.start_time, &request.timezone)?;
    let end_time = parse_time(&request.end_time, &request.timezone)?;

    Ok(PreferredSlot {
        id: Uuid::new_v4(),
        email: request.email,
        start_time,
        end_time,
        timezone: request.timezone,
        day_of_week: request.day_of_week,
        created_at: now,
        updated_at: now,
    })
}

/// Applies a partial update. New start/end strings are read in the new
/// timezone when one is given, otherwise in the slot's existing timezone.
pub fn apply_preferred_slot_update(
    slot: &mut PreferredSlot,
    request: UpdatePreferredSlotRequest,
    now: DateTime<Utc>,
) -> MeetResult<()> {
    validate_request(&request)?;

    let timezone = match request.timezone {
        Some(timezone) => {
            parse_timezone(&timezone)?;
            timezone
        }
        None => slot.timezone.clone(),
    };

    let start_time = match request.start_time.as_deref() {
        Some(start) => parse_time(start, &timezone)?,
        None => slot.start_time,
    };
    let end_time = match request.end_time.as_deref() {
        Some(end) => parse_time(end, &timezone)?,
        None => slot.end_time,
    };

    slot.timezone = timezone;
    slot.start_time = start_time;
    slot.end_time = end_time;
    if request.day_of_week.is_some() {
        slot.day_of_week = request.day_of_week;
    }
    slot.updated_at = now;
    Ok(())
}
