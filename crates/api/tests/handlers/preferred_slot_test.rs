use axum::http::StatusCode;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::TestContext;

#[rstest]
#[case::bad_email(json!({
    "email": "not-an-email",
    "start_time": "2026-03-02 09:00:00",
    "end_time": "2026-03-02 12:00:00",
    "timezone": "UTC"
}))]
#[case::day_out_of_range(json!({
    "email": "ivy@example.com",
    "start_time": "2026-03-02 09:00:00",
    "end_time": "2026-03-02 12:00:00",
    "timezone": "UTC",
    "day_of_week": 7
}))]
#[case::unknown_timezone(json!({
    "email": "ivy@example.com",
    "start_time": "2026-03-02 09:00:00",
    "end_time": "2026-03-02 12:00:00",
    "timezone": "Middle/Earth"
}))]
#[tokio::test]
async fn test_create_preferred_slot_rejects_invalid_input(#[case] body: Value) {
    let response = TestContext::new()
        .server()
        .post("/preferred-slots")
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_window_crossing_midnight_passes_validation() {
    // Accepted input reaches the (unreachable) database.
    let response = TestContext::new()
        .server()
        .post("/preferred-slots")
        .json(&json!({
            "email": "ivy@example.com",
            "start_time": "2026-03-02 22:00:00",
            "end_time": "2026-03-02 02:00:00",
            "timezone": "UTC"
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Database error"));
}

#[tokio::test]
async fn test_list_by_invalid_email_is_rejected() {
    let response = TestContext::new()
        .server()
        .get("/preferred-slots/email/nobody")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_email_route_does_not_shadow_id_route() {
    // PUT on the email path has no handler.
    let response = TestContext::new()
        .server()
        .put("/preferred-slots/email/ivy@example.com")
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
