use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    // GET takes a participant id in the last segment, PUT and DELETE an
    // availability id.
    Router::new()
        .route(
            "/events/:id/availability",
            post(handlers::availability::submit_availability)
                .get(handlers::availability::list_availability),
        )
        .route(
            "/events/:id/availability/:item_id",
            get(handlers::availability::get_participant_availability)
                .put(handlers::availability::update_availability)
                .delete(handlers::availability::delete_availability),
        )
}
