use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::{MeetError, MeetResult};
use crate::models::{
    event::{
        CreateEventRequest, Event, EventStatus, Participant, ParticipantStatus, UpdateEventRequest,
    },
    time_slot::{CreateSlotRequest, TimeSlot},
};
use crate::time::parse_time;
use crate::validation::validate_request;

pub fn new_time_slot(
    event_id: Uuid,
    request: &CreateSlotRequest,
    now: DateTime<Utc>,
) -> MeetResult<TimeSlot> {
    let start_time = parse_time(&request.start_time, &request.timezone)?;
    let end_time = parse_time(&request.end_time, &request.timezone)?;

    if start_time >= end_time {
        return Err(MeetError::Validation(format!(
            "slot must start before it ends ({} >= {})",
            request.start_time, request.end_time
        )));
    }

    Ok(TimeSlot {
        id: Uuid::new_v4(),
        event_id,
        start_time,
        end_time,
        timezone: request.timezone.clone(),
        created_at: now,
    })
}

/// Builds a new open event from a creation request. Slots come back sorted
/// by start time and every participant starts out pending.
pub fn new_event(
    request: CreateEventRequest,
    organizer_id: Uuid,
    now: DateTime<Utc>,
) -> MeetResult<Event> {
    validate_request(&request)?;

    let event_id = Uuid::new_v4();

    let mut proposed_slots = request
        .proposed_slots
        .iter()
        .map(|slot| new_time_slot(event_id, slot, now))
        .collect::<MeetResult<Vec<_>>>()?;
    proposed_slots.sort_by_key(|slot| slot.start_time);

    let participants = request
        .participants
        .into_iter()
        .map(|participant| Participant {
            id: Uuid::new_v4(),
            event_id,
            email: participant.email,
            name: participant.name,
            status: ParticipantStatus::Pending,
            created_at: now,
        })
        .collect();

    Ok(Event {
        id: event_id,
        title: request.title,
        description: request.description,
        organizer_id,
        duration: request.duration,
        status: EventStatus::Open,
        finalized_slot_id: None,
        created_at: now,
        updated_at: now,
        proposed_slots,
        participants,
    })
}

pub fn apply_event_update(
    event: &mut Event,
    request: UpdateEventRequest,
    now: DateTime<Utc>,
) -> MeetResult<()> {
    if event.status.is_terminal() {
        return Err(MeetError::InvalidStatus(event.status));
    }
    validate_request(&request)?;

    if let Some(title) = request.title {
        event.title = title;
    }
    if let Some(description) = request.description {
        event.description = description;
    }
    if let Some(duration) = request.duration {
        event.duration = duration;
    }

    event.updated_at = now;
    Ok(())
}

/// Locks the event onto one of its own slots.
pub fn finalize_event(event: &mut Event, slot_id: Uuid, now: DateTime<Utc>) -> MeetResult<()> {
    if !event.status.can_transition_to(EventStatus::Finalized) {
        return Err(MeetError::InvalidStatus(event.status));
    }
    if event.slot(slot_id).is_none() {
        return Err(MeetError::SlotNotInEvent(slot_id));
    }

    event.status = EventStatus::Finalized;
    event.finalized_slot_id = Some(slot_id);
    event.updated_at = now;
    Ok(())
}

pub fn cancel_event(event: &mut Event, now: DateTime<Utc>) -> MeetResult<()> {
    if !event.status.can_transition_to(EventStatus::Cancelled) {
        return Err(MeetError::InvalidStatus(event.status));
    }

    event.status = EventStatus::Cancelled;
    event.updated_at = now;
    Ok(())
}
