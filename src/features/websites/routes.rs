use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::websites::{handlers, services::WebsiteService};

/// Website directory routes
pub fn admin_routes(service: Arc<WebsiteService>) -> Router {
    Router::new()
        .route(
            "/api/admin/websites",
            get(handlers::list_websites).post(handlers::create_website),
        )
        .route(
            "/api/admin/websites/{id}",
            get(handlers::get_website)
                .put(handlers::update_website)
                .delete(handlers::delete_website),
        )
        .with_state(service)
}
