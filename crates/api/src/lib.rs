//! # MeetSync API
//!
//! HTTP surface of the MeetSync meeting scheduler: events with proposed slots,
//! participant availability, standing time-of-day preferences, and slot
//! recommendations.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into repository calls and domain rules
//! - **Middleware**: Error mapping and organizer identity
//! - **Config**: Environment-driven server settings
//!
//! The API uses Axum as the web framework and SQLx for database interactions.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error mapping and request extractors
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::{header, HeaderValue, Method, StatusCode},
    Json, Router,
};
use eyre::Result;
use meetsync_core::scheduler::Scheduler;
use meetsync_db::repositories::{
    AvailabilityRepository, EventRepository, PreferredSlotRepository,
};
use serde_json::json;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::{BoxError, ServiceBuilder};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::middleware::organizer::ORGANIZER_HEADER;

/// Shared application state that is accessible to all request handlers
///
/// The repositories write through the pool; recommendations are computed by
/// a [`Scheduler`] that only sees the read side of storage, so tests can
/// swap it for one backed by mocks.
///
/// # Example
///
/// ```no_run
/// # async fn example(db_pool: sqlx::PgPool) {
/// use std::sync::Arc;
/// use meetsync_api::{app, ApiState};
///
/// let router = app(Arc::new(ApiState::new(db_pool)));
/// # }
/// ```
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    pub events: EventRepository,
    pub availability: AvailabilityRepository,
    pub preferred_slots: PreferredSlotRepository,
    pub scheduler: Scheduler,
}

impl ApiState {
    pub fn new(db_pool: PgPool) -> Self {
        let events = EventRepository::new(db_pool.clone());
        let availability = AvailabilityRepository::new(db_pool.clone());
        let preferred_slots = PreferredSlotRepository::new(db_pool.clone());
        let scheduler = Scheduler::new(
            Arc::new(events.clone()),
            Arc::new(availability.clone()),
            Arc::new(preferred_slots.clone()),
        );

        Self {
            db_pool,
            events,
            availability,
            preferred_slots,
            scheduler,
        }
    }

    /// Replaces the recommendation engine's data sources.
    pub fn with_scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = scheduler;
        self
    }
}

/// Builds the application router with every route and the trace layer.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::event::routes())
        .merge(routes::availability::routes())
        .merge(routes::preferred_slot::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            ORGANIZER_HEADER.clone(),
        ])
        .allow_origin(origins)
        .allow_credentials(true)
}

async fn handle_timeout_error(err: BoxError) -> (StatusCode, Json<serde_json::Value>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(json!({ "error": "Request timed out" })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Unhandled internal error: {err}") })),
        )
    }
}

/// Starts the API server with the provided configuration and database connection
///
/// Installs the global tracing subscriber, wires the router with CORS and the
/// request timeout, and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(db_pool));
    let app = app(state);

    let app = match config.cors_origins.clone() {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout_error))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
