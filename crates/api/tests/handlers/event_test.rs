use axum::http::{HeaderName, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::TestContext;

fn event_body() -> Value {
    json!({
        "title": "Kickoff",
        "description": "First sync",
        "duration": "1h",
        "proposed_slots": [
            { "start_time": "2026-03-02T09:00:00", "end_time": "2026-03-02T10:00:00", "timezone": "UTC" }
        ],
        "participants": [
            { "email": "hana@example.com", "name": "Hana" }
        ]
    })
}

// Each of these is rejected before any storage access.
#[rstest]
#[case::blank_title("/title", json!(""), "Validation error: title must not be empty")]
#[case::no_slots("/proposed_slots", json!([]), "Validation error: at least one proposed slot is required")]
#[case::no_participants("/participants", json!([]), "Validation error: at least one participant is required")]
#[case::bad_email(
    "/participants",
    json!([{ "email": "hana", "name": "Hana" }]),
    "Validation error: invalid email address"
)]
#[case::bad_time(
    "/proposed_slots",
    json!([{ "start_time": "soon", "end_time": "2026-03-02T10:00:00", "timezone": "UTC" }]),
    "Invalid time format: soon"
)]
#[case::unknown_timezone(
    "/proposed_slots",
    json!([{ "start_time": "2026-03-02T09:00:00", "end_time": "2026-03-02T10:00:00", "timezone": "Moon/Base" }]),
    "Validation error: unknown timezone: Moon/Base"
)]
#[tokio::test]
async fn test_create_event_rejects_invalid_input(
    #[case] pointer: &str,
    #[case] replacement: Value,
    #[case] message: &str,
) {
    let mut body = event_body();
    *body.pointer_mut(pointer).unwrap() = replacement;

    let response = TestContext::new().server().post("/events").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": message }));
}

#[tokio::test]
async fn test_create_event_with_missing_fields_is_rejected() {
    let response = TestContext::new()
        .server()
        .post("/events")
        .json(&json!({ "description": "no title" }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_invalid_organizer_header_is_rejected() {
    let response = TestContext::new()
        .server()
        .get("/events")
        .add_header(
            HeaderName::from_static("x-organizer-id"),
            HeaderValue::from_static("organizer-42"),
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Validation error: x-organizer-id must be a UUID"));
}

#[tokio::test]
async fn test_storage_failure_is_500() {
    // Valid input reaches the (unreachable) database.
    let response = TestContext::new()
        .server()
        .post("/events")
        .json(&event_body())
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Database error"));
}
