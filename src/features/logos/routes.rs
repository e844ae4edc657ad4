use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::logos::{handlers, services::LogoService};

/// Logo management routes
pub fn admin_routes(service: Arc<LogoService>) -> Router {
    Router::new()
        .route(
            "/api/admin/logos",
            get(handlers::list_logos).post(handlers::create_logo),
        )
        .route(
            "/api/admin/logos/{id}",
            get(handlers::get_logo)
                .put(handlers::update_logo)
                .delete(handlers::delete_logo),
        )
        .with_state(service)
}
