use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/events",
            post(handlers::event::create_event).get(handlers::event::list_events),
        )
        .route(
            "/events/:id",
            get(handlers::event::get_event)
                .put(handlers::event::update_event)
                .delete(handlers::event::delete_event),
        )
        .route("/events/:id/finalize", post(handlers::event::finalize_event))
        .route("/events/:id/cancel", post(handlers::event::cancel_event))
        .route(
            "/events/:id/recommendations",
            get(handlers::recommendation::get_recommendations),
        )
}
