use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::users::{handlers, services::UserService};

/// User administration routes
pub fn admin_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/admin/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/admin/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .with_state(service)
}
