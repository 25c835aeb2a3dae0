use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::{MeetError, MeetResult};
use crate::models::{
    availability::{Availability, SubmitAvailabilityRequest, UpdateAvailabilityRequest},
    event::{Event, EventStatus},
};
use crate::time::parse_optional_rfc3339;

fn check_sub_range(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> MeetResult<()> {
    if let (Some(from), Some(to)) = (from, to) {
        if from >= to {
            return Err(MeetError::Validation(
                "available_from must be before available_to".to_string(),
            ));
        }
    }
    Ok(())
}

/// Fails with `InvalidStatus` once the event is finalized or cancelled; its
/// answers are frozen from then on.
pub fn ensure_accepting_answers(event: &Event) -> MeetResult<()> {
    if !matches!(event.status, EventStatus::Draft | EventStatus::Open) {
        return Err(MeetError::InvalidStatus(event.status));
    }
    Ok(())
}

/// Checks a submission against the event it targets and turns it into one
/// availability record per slot, ready to be upserted.
///
/// The event must still be collecting answers, the participant must belong
/// to it, and every referenced slot must be one of its proposed slots.
pub fn submission_records(
    event: &Event,
    request: &SubmitAvailabilityRequest,
    now: DateTime<Utc>,
) -> MeetResult<Vec<Availability>> {
    ensure_accepting_answers(event)?;

    if event.participant(request.participant_id).is_none() {
        return Err(MeetError::ParticipantNotFound(request.participant_id));
    }

    if request.slots.is_empty() {
        return Err(MeetError::Validation(
            "at least one slot availability is required".to_string(),
        ));
    }

    request
        .slots
        .iter()
        .map(|slot| -> MeetResult<Availability> {
            if event.slot(slot.slot_id).is_none() {
                return Err(MeetError::SlotNotInEvent(slot.slot_id));
            }

            let available_from = parse_optional_rfc3339(slot.available_from.as_deref())?;
            let available_to = parse_optional_rfc3339(slot.available_to.as_deref())?;
            check_sub_range(available_from, available_to)?;

            Ok(Availability {
                id: Uuid::new_v4(),
                event_id: event.id,
                participant_id: request.participant_id,
                slot_id: slot.slot_id,
                status: slot.status,
                available_from,
                available_to,
                created_at: now,
                updated_at: now,
            })
        })
        .collect()
}

/// Replaces the status and, where given, the sub-range bounds.
pub fn apply_availability_update(
    availability: &mut Availability,
    request: &UpdateAvailabilityRequest,
    now: DateTime<Utc>,
) -> MeetResult<()> {
    let available_from = match parse_optional_rfc3339(request.available_from.as_deref())? {
        Some(from) => Some(from),
        None => availability.available_from,
    };
    let available_to = match parse_optional_rfc3339(request.available_to.as_deref())? {
        Some(to) => Some(to),
        None => availability.available_to,
    };
    check_sub_range(available_from, available_to)?;

    availability.status = request.status;
    availability.available_from = available_from;
    availability.available_to = available_to;
    availability.updated_at = now;
    Ok(())
}
