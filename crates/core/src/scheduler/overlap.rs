use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::models::{preferred_slot::PreferredSlot, time_slot::TimeSlot};

pub fn minutes_since_midnight(instant: &DateTime<Utc>) -> u32 {
    instant.hour() * 60 + instant.minute()
}

/// 0 = Sunday .. 6 = Saturday, matching `PreferredSlot::day_of_week`.
pub fn weekday_index(instant: &DateTime<Utc>) -> i32 {
    instant.weekday().num_days_from_sunday() as i32
}

/// Whether `pref` covers `slot`.
///
/// A day-of-week constraint is checked against the slot's start weekday
/// first. After that only clock times count: the slot's minute range must lie
/// entirely inside the preference's minute range. Windows whose end clock
/// time is earlier than their start (e.g. 22:00-02:00) therefore never match.
pub fn slot_overlaps_preference(slot: &TimeSlot, pref: &PreferredSlot) -> bool {
    if let Some(day) = pref.day_of_week {
        if weekday_index(&slot.start_time) != day {
            return false;
        }
    }

    let slot_start = minutes_since_midnight(&slot.start_time);
    let slot_end = minutes_since_midnight(&slot.end_time);
    let pref_start = minutes_since_midnight(&pref.start_time);
    let pref_end = minutes_since_midnight(&pref.end_time);

    slot_start >= pref_start && slot_end <= pref_end
}
