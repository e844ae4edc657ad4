use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::logos::{dtos as logos_dtos, handlers as logos_handlers, models as logos_models};
use crate::features::mcqs::{dtos as mcqs_dtos, handlers as mcqs_handlers, models as mcqs_models};
use crate::features::questions::{
    dtos as questions_dtos, handlers as questions_handlers, models as questions_models,
};
use crate::features::roles::{dtos as roles_dtos, handlers as roles_handlers, models as roles_models};
use crate::features::settings::{
    dtos as settings_dtos, handlers as settings_handlers, models as settings_models,
};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers, models as users_models};
use crate::features::websites::{
    dtos as websites_dtos, handlers as websites_handlers, models as websites_models,
};
use crate::shared::crud::{DialogAction, FieldErrors};
use crate::shared::types::{ApiResponse, AuditFields, Meta, SortDirection};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Logos
        logos_handlers::list_logos,
        logos_handlers::get_logo,
        logos_handlers::create_logo,
        logos_handlers::update_logo,
        logos_handlers::delete_logo,
        // Websites
        websites_handlers::list_websites,
        websites_handlers::get_website,
        websites_handlers::create_website,
        websites_handlers::update_website,
        websites_handlers::delete_website,
        // Fill-in-the-blank questions
        questions_handlers::list_questions,
        questions_handlers::get_question,
        questions_handlers::create_question,
        questions_handlers::update_question,
        questions_handlers::delete_question,
        // MCQs
        mcqs_handlers::list_mcqs,
        mcqs_handlers::get_mcq,
        mcqs_handlers::create_mcq,
        mcqs_handlers::update_mcq,
        mcqs_handlers::delete_mcq,
        // Users
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::create_user,
        users_handlers::update_user,
        users_handlers::delete_user,
        // Roles
        roles_handlers::list_roles,
        roles_handlers::role_tree,
        roles_handlers::get_role,
        roles_handlers::create_role,
        roles_handlers::update_role,
        roles_handlers::delete_role,
        // Settings
        settings_handlers::list_settings,
        settings_handlers::get_setting_options,
    ),
    components(
        schemas(
            // Shared
            Meta,
            FieldErrors,
            AuditFields,
            SortDirection,
            DialogAction,
            // Logos
            logos_models::Logo,
            logos_dtos::LogoForm,
            ApiResponse<logos_models::Logo>,
            ApiResponse<Vec<logos_models::Logo>>,
            // Websites
            websites_models::Website,
            websites_dtos::WebsiteForm,
            ApiResponse<websites_models::Website>,
            ApiResponse<Vec<websites_models::Website>>,
            // Questions
            questions_models::FillBlankQuestion,
            questions_dtos::QuestionForm,
            ApiResponse<questions_models::FillBlankQuestion>,
            ApiResponse<Vec<questions_models::FillBlankQuestion>>,
            // MCQs
            mcqs_models::Mcq,
            mcqs_dtos::McqForm,
            ApiResponse<mcqs_models::Mcq>,
            ApiResponse<Vec<mcqs_models::Mcq>>,
            // Users
            users_models::AccountStatus,
            users_models::User,
            users_dtos::UserForm,
            ApiResponse<users_models::User>,
            ApiResponse<Vec<users_models::User>>,
            // Roles
            roles_models::RoleStatus,
            roles_models::Role,
            roles_dtos::RoleForm,
            roles_dtos::RoleTreeNode,
            roles_dtos::RoleRow,
            ApiResponse<roles_models::Role>,
            ApiResponse<Vec<roles_models::Role>>,
            ApiResponse<Vec<roles_dtos::RoleRow>>,
            // Settings
            settings_models::AppSetting,
            settings_dtos::SettingOptionsDto,
            ApiResponse<Vec<settings_models::AppSetting>>,
            ApiResponse<settings_dtos::SettingOptionsDto>,
        )
    ),
    tags(
        (name = "logos", description = "Logo library"),
        (name = "websites", description = "Website directory"),
        (name = "questions", description = "Fill-in-the-blank quiz questions"),
        (name = "mcqs", description = "Multiple-choice quiz questions"),
        (name = "users", description = "User administration"),
        (name = "roles", description = "Roles and the role hierarchy"),
        (name = "settings", description = "Application settings and option lists"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "GJPB Admin API",
        version = "0.1.0",
        description = "Administrative CRUD API in front of the GJPB content service",
    )
)]
pub struct ApiDoc;

/// Adds the bearer security scheme; tokens are forwarded to the upstream
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_admin_paths_and_bearer_scheme() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Admin".to_string(),
            version: "9.9.9".to_string(),
            description: "test".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Admin");
        assert!(doc.paths.paths.contains_key("/api/admin/roles/tree"));
        assert!(doc.paths.paths.contains_key("/api/admin/mcqs/{id}"));
        assert!(doc.paths.paths.contains_key("/api/admin/settings/options/{name}"));

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
