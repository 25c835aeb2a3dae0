use axum::http::StatusCode;
use mockall::predicate;
use meetsync_core::models::{
    availability::AvailabilityStatus, recommendation::RecommendationResponse,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{EventFixture, TestContext};

#[tokio::test]
async fn test_recommendations_are_partitioned_and_ranked() {
    let fixture = EventFixture::new(2, &[9, 11, 14]);
    let event_id = fixture.id();
    let records = vec![
        fixture.answer(0, 0, AvailabilityStatus::Available),
        fixture.answer(0, 1, AvailabilityStatus::Available),
        fixture.answer(1, 1, AvailabilityStatus::Partial),
        fixture.answer(0, 2, AvailabilityStatus::Unavailable),
        fixture.answer(1, 2, AvailabilityStatus::Available),
    ];
    let preferences = vec![fixture.preference(1, 13, 17)];
    let (slot_9, slot_11, slot_14) = (fixture.slot_id(0), fixture.slot_id(1), fixture.slot_id(2));

    let mut ctx = TestContext::new();
    let event = fixture.event.clone();
    ctx.event_repo
        .expect_get_event()
        .with(predicate::eq(event_id))
        .times(1)
        .returning(move |_| Ok(Some(event.clone())));
    ctx.availability_repo
        .expect_get_availability_by_event()
        .with(predicate::eq(event_id))
        .times(1)
        .returning(move |_| Ok(records.clone()));
    ctx.preferred_slot_repo
        .expect_get_preferred_slots_by_emails()
        .times(1)
        .returning(move |emails| {
            assert_eq!(emails.len(), 2);
            Ok(preferences.clone())
        });

    let server = ctx.server();
    let response = server
        .get(&format!("/events/{event_id}/recommendations"))
        .await;

    response.assert_status_ok();
    let body: RecommendationResponse = response.json();
    assert_eq!(body.event_id, event_id);

    let perfect: Vec<Uuid> = body.perfect_slots.iter().map(|r| r.slot_id).collect();
    assert_eq!(perfect, vec![slot_11]);

    // 14:00 and 9:00 both have one of two; the preference puts 14:00 first.
    let best: Vec<Uuid> = body.best_matches.iter().map(|r| r.slot_id).collect();
    assert_eq!(best, vec![slot_14, slot_9]);
    assert_eq!(body.best_matches[0].preferred_percent, 50.0);
    assert_eq!(body.best_matches[1].preferred_percent, 0.0);
}

#[tokio::test]
async fn test_recommendation_wire_shape() {
    let fixture = EventFixture::new(1, &[10]);
    let event_id = fixture.id();
    let slot_id = fixture.slot_id(0);
    let records = vec![fixture.answer(0, 0, AvailabilityStatus::Available)];

    let mut ctx = TestContext::new();
    let event = fixture.event.clone();
    ctx.event_repo
        .expect_get_event()
        .returning(move |_| Ok(Some(event.clone())));
    ctx.availability_repo
        .expect_get_availability_by_event()
        .returning(move |_| Ok(records.clone()));
    ctx.preferred_slot_repo
        .expect_get_preferred_slots_by_emails()
        .returning(|_| Ok(vec![]));

    let response = ctx
        .server()
        .get(&format!("/events/{event_id}/recommendations"))
        .await;

    let body: Value = response.json();
    assert_eq!(body["event_id"], json!(event_id));
    assert_eq!(body["best_matches"], json!([]));
    let rec = &body["perfect_slots"][0];
    assert_eq!(rec["slot_id"], json!(slot_id));
    assert_eq!(rec["slot"]["event_id"], json!(event_id));
    assert_eq!(rec["available_count"], json!(1));
    assert_eq!(rec["total_participants"], json!(1));
    assert_eq!(rec["availability_percent"], json!(100.0));
    assert_eq!(rec["preferred_count"], json!(0));
    assert_eq!(rec["preferred_percent"], json!(0.0));
    assert_eq!(rec["is_perfect_match"], json!(true));
}

#[tokio::test]
async fn test_unknown_event_is_404() {
    let event_id = Uuid::new_v4();

    let mut ctx = TestContext::new();
    ctx.event_repo.expect_get_event().returning(|_| Ok(None));
    ctx.availability_repo
        .expect_get_availability_by_event()
        .times(0);

    let response = ctx
        .server()
        .get(&format!("/events/{event_id}/recommendations"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": format!("Event not found: {event_id}") }));
}

#[tokio::test]
async fn test_failing_event_lookup_is_404() {
    let mut ctx = TestContext::new();
    ctx.event_repo
        .expect_get_event()
        .returning(|_| Err(eyre::eyre!("connection refused")));

    let response = ctx
        .server()
        .get(&format!("/events/{}/recommendations", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_failing_availability_lookup_is_500() {
    let fixture = EventFixture::new(2, &[9]);
    let event_id = fixture.id();

    let mut ctx = TestContext::new();
    let event = fixture.event.clone();
    ctx.event_repo
        .expect_get_event()
        .returning(move |_| Ok(Some(event.clone())));
    ctx.availability_repo
        .expect_get_availability_by_event()
        .returning(|_| Err(eyre::eyre!("statement timeout")));
    ctx.preferred_slot_repo
        .expect_get_preferred_slots_by_emails()
        .times(0);

    let response = ctx
        .server()
        .get(&format!("/events/{event_id}/recommendations"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        json!("Failed to fetch availability: statement timeout")
    );
}

#[tokio::test]
async fn test_failing_preference_lookup_still_succeeds() {
    let fixture = EventFixture::new(2, &[9, 10]);
    let event_id = fixture.id();
    let records = vec![
        fixture.answer(0, 0, AvailabilityStatus::Available),
        fixture.answer(1, 0, AvailabilityStatus::Available),
    ];

    let mut ctx = TestContext::new();
    let event = fixture.event.clone();
    ctx.event_repo
        .expect_get_event()
        .returning(move |_| Ok(Some(event.clone())));
    ctx.availability_repo
        .expect_get_availability_by_event()
        .returning(move |_| Ok(records.clone()));
    ctx.preferred_slot_repo
        .expect_get_preferred_slots_by_emails()
        .times(1)
        .returning(|_| Err(eyre::eyre!("preferred_slots is locked")));

    let response = ctx
        .server()
        .get(&format!("/events/{event_id}/recommendations"))
        .await;

    response.assert_status_ok();
    let body: RecommendationResponse = response.json();
    assert_eq!(body.perfect_slots.len(), 1);
    assert_eq!(body.best_matches.len(), 1);
    for rec in body.perfect_slots.iter().chain(&body.best_matches) {
        assert_eq!(rec.preferred_count, 0);
        assert_eq!(rec.preferred_percent, 0.0);
    }
}

#[tokio::test]
async fn test_event_without_participants_skips_preferences() {
    let fixture = EventFixture::new(0, &[9, 10]);
    let event_id = fixture.id();

    let mut ctx = TestContext::new();
    let event = fixture.event.clone();
    ctx.event_repo
        .expect_get_event()
        .returning(move |_| Ok(Some(event.clone())));
    ctx.availability_repo
        .expect_get_availability_by_event()
        .returning(|_| Ok(vec![]));
    ctx.preferred_slot_repo
        .expect_get_preferred_slots_by_emails()
        .times(0);

    let response = ctx
        .server()
        .get(&format!("/events/{event_id}/recommendations"))
        .await;

    response.assert_status_ok();
    let body: RecommendationResponse = response.json();
    assert!(body.perfect_slots.is_empty());
    assert_eq!(body.best_matches.len(), 2);
    assert!(body.best_matches.iter().all(|r| r.availability_percent == 0.0));
}

#[tokio::test]
async fn test_malformed_event_id_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx.server().get("/events/not-a-uuid/recommendations").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
