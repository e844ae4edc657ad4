use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::roles::{handlers, services::RoleService};

/// Role management routes; mounted behind the bearer middleware
pub fn admin_routes(service: Arc<RoleService>) -> Router {
    Router::new()
        .route(
            "/api/admin/roles",
            get(handlers::list_roles).post(handlers::create_role),
        )
        .route("/api/admin/roles/tree", get(handlers::role_tree))
        .route(
            "/api/admin/roles/{id}",
            get(handlers::get_role)
                .put(handlers::update_role)
                .delete(handlers::delete_role),
        )
        .with_state(service)
}
