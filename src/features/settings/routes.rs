use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::settings::{handlers, services::SettingsService};

pub fn admin_routes(service: Arc<SettingsService>) -> Router {
    Router::new()
        .route("/api/admin/settings", get(handlers::list_settings))
        .route(
            "/api/admin/settings/options/{name}",
            get(handlers::get_setting_options),
        )
        .with_state(service)
}
