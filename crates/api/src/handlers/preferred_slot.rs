use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use meetsync_core::{
    errors::MeetError,
    models::preferred_slot::{
        CreatePreferredSlotRequest, PreferredSlot, PreferredSlotListResponse,
        UpdatePreferredSlotRequest,
    },
    validation::{preferred_slot as rules, validate_email},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_preferred_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreatePreferredSlotRequest>,
) -> Result<(StatusCode, Json<PreferredSlot>), AppError> {
    let slot = rules::new_preferred_slot(payload, Utc::now())?;
    let slot = state.preferred_slots.create_preferred_slot(&slot).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

#[axum::debug_handler]
pub async fn list_preferred_slots(
    State(state): State<Arc<ApiState>>,
    Path(email): Path<String>,
) -> Result<Json<PreferredSlotListResponse>, AppError> {
    validate_email(&email)?;
    let preferred_slots = state
        .preferred_slots
        .get_preferred_slots_by_email(&email)
        .await?;
    Ok(Json(PreferredSlotListResponse { preferred_slots }))
}

#[axum::debug_handler]
pub async fn update_preferred_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePreferredSlotRequest>,
) -> Result<Json<PreferredSlot>, AppError> {
    let mut slot = state
        .preferred_slots
        .get_preferred_slot_by_id(id)
        .await?
        .ok_or(AppError(MeetError::PreferredSlotNotFound(id)))?;

    rules::apply_preferred_slot_update(&mut slot, payload, Utc::now())?;
    state.preferred_slots.update_preferred_slot(&slot).await?;

    Ok(Json(slot))
}

#[axum::debug_handler]
pub async fn delete_preferred_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.preferred_slots.delete_preferred_slot(id).await? {
        return Err(AppError(MeetError::PreferredSlotNotFound(id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
