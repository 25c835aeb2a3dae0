use axum::{
    body::to_bytes,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    response::IntoResponse,
};
use meetsync_api::middleware::{
    error_handling::AppError,
    organizer::{Organizer, DEFAULT_ORGANIZER_ID},
};
use meetsync_core::{errors::MeetError, models::event::EventStatus};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use uuid::Uuid;

#[rstest]
#[case(MeetError::EventNotFound(Uuid::nil()), StatusCode::NOT_FOUND)]
#[case(MeetError::SlotNotFound(Uuid::nil()), StatusCode::NOT_FOUND)]
#[case(MeetError::ParticipantNotFound(Uuid::nil()), StatusCode::NOT_FOUND)]
#[case(MeetError::AvailabilityNotFound(Uuid::nil()), StatusCode::NOT_FOUND)]
#[case(MeetError::PreferredSlotNotFound(Uuid::nil()), StatusCode::NOT_FOUND)]
#[case(MeetError::InvalidStatus(EventStatus::Finalized), StatusCode::CONFLICT)]
#[case(MeetError::SlotNotInEvent(Uuid::nil()), StatusCode::BAD_REQUEST)]
#[case(MeetError::InvalidTimeFormat("noon".to_string()), StatusCode::BAD_REQUEST)]
#[case(MeetError::Validation("bad".to_string()), StatusCode::BAD_REQUEST)]
#[case(MeetError::AvailabilityFetchFailed(eyre::eyre!("down")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(MeetError::Database(eyre::eyre!("down")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] err: MeetError, #[case] status: StatusCode) {
    assert_eq!(AppError(err).status(), status);
}

#[tokio::test]
async fn test_error_body() {
    let id = Uuid::new_v4();
    let response = AppError(MeetError::SlotNotInEvent(id)).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({ "error": format!("Slot {id} does not belong to this event") })
    );
}

#[test]
fn test_report_becomes_database_error() {
    let err: AppError = eyre::eyre!("deadlock detected").into();
    assert!(matches!(err.0, MeetError::Database(_)));
}

async fn organizer_from(header: Option<&str>) -> Result<Organizer, AppError> {
    let mut builder = Request::builder().uri("/events");
    if let Some(value) = header {
        builder = builder.header("x-organizer-id", value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();
    Organizer::from_request_parts(&mut parts, &()).await
}

#[tokio::test]
async fn test_organizer_defaults_when_header_missing() {
    let organizer = organizer_from(None).await.unwrap();
    assert_eq!(organizer, Organizer(DEFAULT_ORGANIZER_ID));
    assert_eq!(
        DEFAULT_ORGANIZER_ID.to_string(),
        "00000000-0000-0000-0000-000000000001"
    );
}

#[tokio::test]
async fn test_organizer_from_header() {
    let id = Uuid::new_v4();
    let organizer = organizer_from(Some(&id.to_string())).await.unwrap();
    assert_eq!(organizer, Organizer(id));
}

#[tokio::test]
async fn test_organizer_header_must_be_uuid() {
    let err = organizer_from(Some("alice")).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}
