pub mod availability;
pub mod event;
pub mod preferred_slot;
pub mod recommendation;

use meetsync_core::{errors::MeetError, models::event::Event};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Loads an event or fails with `EventNotFound`.
pub(crate) async fn load_event(state: &ApiState, id: Uuid) -> Result<Event, AppError> {
    state
        .events
        .get_event_by_id(id)
        .await?
        .ok_or(AppError(MeetError::EventNotFound(id)))
}
