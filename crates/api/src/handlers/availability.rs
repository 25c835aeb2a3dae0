//! # Availability Handlers
//!
//! Participants answer each proposed slot of an event with `available`,
//! `unavailable` or `partial`. A submission replaces earlier answers for the
//! same slots and marks the participant as responded.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use meetsync_core::{
    errors::MeetError,
    models::availability::{
        Availability, AvailabilityListResponse, SubmitAvailabilityRequest,
        SubmitAvailabilityResponse, UpdateAvailabilityRequest,
    },
    validation::availability as rules,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{handlers::load_event, middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn submit_availability(
    State(state): State<Arc<ApiState>>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<SubmitAvailabilityRequest>,
) -> Result<(StatusCode, Json<SubmitAvailabilityResponse>), AppError> {
    let event = load_event(&state, event_id).await?;
    let records = rules::submission_records(&event, &payload, Utc::now())?;
    let saved = state.availability.submit_availability(&records).await?;

    info!(
        "Availability submitted: event={}, participant={}, slots={}",
        event_id,
        payload.participant_id,
        saved.len()
    );
    Ok((
        StatusCode::CREATED,
        Json(SubmitAvailabilityResponse {
            message: "Availability submitted".to_string(),
            submitted: saved.len(),
        }),
    ))
}

#[axum::debug_handler]
pub async fn list_availability(
    State(state): State<Arc<ApiState>>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<AvailabilityListResponse>, AppError> {
    load_event(&state, event_id).await?;
    let availabilities = state.availability.get_availability_by_event_id(event_id).await?;
    Ok(Json(AvailabilityListResponse { availabilities }))
}

/// Every answer one participant gave for the event.
#[axum::debug_handler]
pub async fn get_participant_availability(
    State(state): State<Arc<ApiState>>,
    Path((event_id, participant_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<AvailabilityListResponse>, AppError> {
    let event = load_event(&state, event_id).await?;
    if event.participant(participant_id).is_none() {
        return Err(AppError(MeetError::ParticipantNotFound(participant_id)));
    }

    let availabilities = state
        .availability
        .get_availability_by_participant(event_id, participant_id)
        .await?;
    Ok(Json(AvailabilityListResponse { availabilities }))
}

async fn load_availability(
    state: &ApiState,
    event_id: Uuid,
    availability_id: Uuid,
) -> Result<Availability, AppError> {
    state
        .availability
        .get_availability_by_id(availability_id)
        .await?
        .filter(|availability| availability.event_id == event_id)
        .ok_or(AppError(MeetError::AvailabilityNotFound(availability_id)))
}

#[axum::debug_handler]
pub async fn update_availability(
    State(state): State<Arc<ApiState>>,
    Path((event_id, availability_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateAvailabilityRequest>,
) -> Result<Json<Availability>, AppError> {
    let event = load_event(&state, event_id).await?;
    rules::ensure_accepting_answers(&event)?;

    let mut availability = load_availability(&state, event_id, availability_id).await?;
    rules::apply_availability_update(&mut availability, &payload, Utc::now())?;
    state.availability.update_availability(&availability).await?;

    Ok(Json(availability))
}

#[axum::debug_handler]
pub async fn delete_availability(
    State(state): State<Arc<ApiState>>,
    Path((event_id, availability_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let event = load_event(&state, event_id).await?;
    rules::ensure_accepting_answers(&event)?;

    load_availability(&state, event_id, availability_id).await?;
    state.availability.delete_availability(availability_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
