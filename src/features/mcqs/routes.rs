use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::mcqs::{handlers, services::McqService};

/// Multiple-choice question routes
pub fn admin_routes(service: Arc<McqService>) -> Router {
    Router::new()
        .route(
            "/api/admin/mcqs",
            get(handlers::list_mcqs).post(handlers::create_mcq),
        )
        .route(
            "/api/admin/mcqs/{id}",
            get(handlers::get_mcq)
                .put(handlers::update_mcq)
                .delete(handlers::delete_mcq),
        )
        .with_state(service)
}
