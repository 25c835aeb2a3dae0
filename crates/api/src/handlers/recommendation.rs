use axum::{
    extract::{Path, State},
    Json,
};
use meetsync_core::models::recommendation::RecommendationResponse;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Ranks the event's proposed slots into perfect slots and best matches.
///
/// # Endpoint
///
/// ```text
/// GET /events/:id/recommendations
/// ```
///
/// A missing event is a 404. A failing availability lookup is a 500. A
/// failing preference lookup is not an error; slots are then ranked on
/// availability alone.
#[axum::debug_handler]
pub async fn get_recommendations(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let recommendations = state.scheduler.get_recommendations(id).await?;
    Ok(Json(recommendations))
}
