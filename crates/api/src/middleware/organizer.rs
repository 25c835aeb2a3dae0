use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderName},
};
use meetsync_core::errors::MeetError;
use uuid::Uuid;

use crate::middleware::error_handling::AppError;

pub static ORGANIZER_HEADER: HeaderName = HeaderName::from_static("x-organizer-id");

/// Used when a request carries no organizer header.
pub const DEFAULT_ORGANIZER_ID: Uuid = Uuid::from_u128(1);

/// The organizer a request acts on behalf of, read from `x-organizer-id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Organizer(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for Organizer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(&ORGANIZER_HEADER) else {
            return Ok(Organizer(DEFAULT_ORGANIZER_ID));
        };

        value
            .to_str()
            .ok()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
            .map(Organizer)
            .ok_or_else(|| {
                AppError(MeetError::Validation(
                    "x-organizer-id must be a UUID".to_string(),
                ))
            })
    }
}
