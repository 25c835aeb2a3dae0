use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use meetsync_core::{
    errors::MeetError,
    models::event::{
        CreateEventRequest, Event, FinalizeEventRequest, ListEventsResponse, UpdateEventRequest,
    },
    validation::event as rules,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    handlers::load_event,
    middleware::{error_handling::AppError, organizer::Organizer},
    ApiState,
};

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<Arc<ApiState>>,
    Organizer(organizer_id): Organizer,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let event = rules::new_event(payload, organizer_id, Utc::now())?;
    let event = state.events.create_event(&event).await?;

    info!(
        "Event created: id={}, organizer={}, slots={}",
        event.id,
        organizer_id,
        event.proposed_slots.len()
    );
    Ok((StatusCode::CREATED, Json(event)))
}

#[axum::debug_handler]
pub async fn list_events(
    State(state): State<Arc<ApiState>>,
    Organizer(organizer_id): Organizer,
) -> Result<Json<ListEventsResponse>, AppError> {
    let events = state.events.list_events_by_organizer(organizer_id).await?;
    Ok(Json(ListEventsResponse { events }))
}

#[axum::debug_handler]
pub async fn get_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, AppError> {
    Ok(Json(load_event(&state, id).await?))
}

#[axum::debug_handler]
pub async fn update_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<Json<Event>, AppError> {
    let mut event = load_event(&state, id).await?;
    rules::apply_event_update(&mut event, payload, Utc::now())?;

    if !state.events.update_event(&event).await? {
        return Err(AppError(MeetError::EventNotFound(id)));
    }
    Ok(Json(event))
}

#[axum::debug_handler]
pub async fn delete_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.events.delete_event(id).await? {
        return Err(AppError(MeetError::EventNotFound(id)));
    }

    info!("Event deleted: id={}", id);
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn finalize_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<FinalizeEventRequest>,
) -> Result<Json<Event>, AppError> {
    let mut event = load_event(&state, id).await?;
    rules::finalize_event(&mut event, payload.slot_id, Utc::now())?;
    state.events.update_event_status(&event).await?;

    info!("Event finalized: id={}, slot={}", id, payload.slot_id);
    Ok(Json(event))
}

#[axum::debug_handler]
pub async fn cancel_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, AppError> {
    let mut event = load_event(&state, id).await?;
    rules::cancel_event(&mut event, Utc::now())?;
    state.events.update_event_status(&event).await?;

    info!("Event cancelled: id={}", id);
    Ok(Json(event))
}
