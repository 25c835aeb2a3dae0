//! Parsing of user-entered timestamps.
//!
//! Slots and preferred windows are entered as wall-clock strings plus an IANA
//! timezone name and are stored normalized to UTC.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::{MeetError, MeetResult};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

pub fn parse_timezone(timezone: &str) -> MeetResult<Tz> {
    timezone
        .parse::<Tz>()
        .map_err(|_| MeetError::Validation(format!("unknown timezone: {timezone}")))
}

/// Parses `input` as a point in time, interpreting offset-less strings in
/// `timezone`, and returns it in UTC.
///
/// An RFC 3339 string carries its own offset, which takes precedence over
/// `timezone`. Wall-clock times that fall into a DST gap are rejected; times
/// repeated by a DST fold resolve to the earlier instant.
pub fn parse_time(input: &str, timezone: &str) -> MeetResult<DateTime<Utc>> {
    let tz = parse_timezone(timezone)?;
    let input = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc))
                .ok_or_else(|| MeetError::InvalidTimeFormat(input.to_string()));
        }
    }

    Err(MeetError::InvalidTimeFormat(input.to_string()))
}

/// Parses a strict RFC 3339 timestamp, as used for availability sub-ranges.
pub fn parse_rfc3339(input: &str) -> MeetResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| MeetError::InvalidTimeFormat(input.to_string()))
}

pub fn parse_optional_rfc3339(input: Option<&str>) -> MeetResult<Option<DateTime<Utc>>> {
    input.map(parse_rfc3339).transpose()
}
