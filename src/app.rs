use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use crate::core::middleware;
use crate::features::logos::{routes as logos_routes, LogoService};
use crate::features::mcqs::{routes as mcqs_routes, McqService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::roles::{routes as roles_routes, RoleService};
use crate::features::settings::{routes as settings_routes, SettingsService};
use crate::features::users::{routes as users_routes, UserService};
use crate::features::websites::{routes as websites_routes, WebsiteService};
use crate::modules::upstream::UpstreamApi;

/// One service per admin resource, all talking to the same upstream
pub struct AdminServices {
    pub logos: Arc<LogoService>,
    pub websites: Arc<WebsiteService>,
    pub questions: Arc<QuestionService>,
    pub mcqs: Arc<McqService>,
    pub users: Arc<UserService>,
    pub roles: Arc<RoleService>,
    pub settings: Arc<SettingsService>,
}

impl AdminServices {
    pub fn new(upstream: Arc<dyn UpstreamApi>, settings: Arc<SettingsService>) -> Self {
        Self {
            logos: Arc::new(LogoService::new(Arc::clone(&upstream))),
            websites: Arc::new(WebsiteService::new(Arc::clone(&upstream))),
            questions: Arc::new(QuestionService::new(Arc::clone(&upstream))),
            mcqs: Arc::new(McqService::new(Arc::clone(&upstream))),
            users: Arc::new(UserService::new(Arc::clone(&upstream))),
            roles: Arc::new(RoleService::new(upstream)),
            settings,
        }
    }
}

/// All `/api/admin` routes; each requires a bearer token
pub fn admin_router(services: &AdminServices) -> Router {
    Router::new()
        .merge(logos_routes::admin_routes(Arc::clone(&services.logos)))
        .merge(websites_routes::admin_routes(Arc::clone(&services.websites)))
        .merge(questions_routes::admin_routes(Arc::clone(&services.questions)))
        .merge(mcqs_routes::admin_routes(Arc::clone(&services.mcqs)))
        .merge(users_routes::admin_routes(Arc::clone(&services.users)))
        .merge(roles_routes::admin_routes(Arc::clone(&services.roles)))
        .merge(settings_routes::admin_routes(Arc::clone(&services.settings)))
        .route_layer(axum::middleware::from_fn(middleware::bearer_middleware))
}

/// Simple health check endpoint (no auth required)
pub fn health_router() -> Router {
    async fn health_check() -> StatusCode {
        StatusCode::OK
    }
    Router::new().route("/health", get(health_check))
}
