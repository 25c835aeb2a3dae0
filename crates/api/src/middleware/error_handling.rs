//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and a uniform JSON body of the form
//! `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use meetsync_core::errors::MeetError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use meetsync_api::middleware::error_handling::AppError;
/// use meetsync_core::errors::MeetError;
/// use uuid::Uuid;
///
/// async fn handler(id: Uuid) -> Result<Json<()>, AppError> {
///     Err(AppError(MeetError::EventNotFound(id)))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub MeetError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            err if err.is_not_found() => StatusCode::NOT_FOUND,
            MeetError::InvalidStatus(_) => StatusCode::CONFLICT,
            MeetError::SlotNotInEvent(_)
            | MeetError::InvalidTimeFormat(_)
            | MeetError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Lets handlers use `?` on `MeetResult` values.
impl From<MeetError> for AppError {
    fn from(err: MeetError) -> Self {
        AppError(err)
    }
}

/// Repository failures surface as database errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(MeetError::Database(err))
    }
}
