use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/preferred-slots",
            post(handlers::preferred_slot::create_preferred_slot),
        )
        .route(
            "/preferred-slots/email/:email",
            get(handlers::preferred_slot::list_preferred_slots),
        )
        .route(
            "/preferred-slots/:id",
            put(handlers::preferred_slot::update_preferred_slot)
                .delete(handlers::preferred_slot::delete_preferred_slot),
        )
}
