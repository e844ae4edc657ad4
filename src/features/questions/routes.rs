use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::questions::{handlers, services::QuestionService};

/// Fill-in-the-blank question routes
pub fn admin_routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route(
            "/api/admin/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route(
            "/api/admin/questions/{id}",
            get(handlers::get_question)
                .put(handlers::update_question)
                .delete(handlers::delete_question),
        )
        .with_state(service)
}
