use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::extractor::AccessToken;
use crate::features::settings::dtos::{OptionsQuery, SettingOptionsDto};
use crate::features::settings::models::AppSetting;
use crate::features::settings::services::SettingsService;
use crate::shared::types::{ApiResponse, Meta};

/// All application settings
#[utoipa::path(
    get,
    path = "/api/admin/settings",
    responses(
        (status = 200, description = "Settings retrieved successfully", body = ApiResponse<Vec<AppSetting>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_settings(
    token: AccessToken,
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<Vec<AppSetting>>>> {
    let settings = service.all(Some(token.as_str())).await?;
    let total = settings.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(settings),
        None,
        Some(Meta {
            total,
            ..Default::default()
        }),
    )))
}

/// Option list of one setting, e.g. `logo_tags` or `difficulty_level`
#[utoipa::path(
    get,
    path = "/api/admin/settings/options/{name}",
    params(
        ("name" = String, Path, description = "Setting name"),
        OptionsQuery
    ),
    responses(
        (status = 200, description = "Options retrieved successfully", body = ApiResponse<SettingOptionsDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_setting_options(
    token: AccessToken,
    State(service): State<Arc<SettingsService>>,
    Path(name): Path<String>,
    Query(query): Query<OptionsQuery>,
) -> Result<Json<ApiResponse<SettingOptionsDto>>> {
    let options = service
        .options(&name, query.lang.as_deref(), Some(token.as_str()))
        .await?;
    Ok(Json(ApiResponse::success(
        Some(SettingOptionsDto {
            name,
            lang: query.lang,
            options,
        }),
        None,
        None,
    )))
}
