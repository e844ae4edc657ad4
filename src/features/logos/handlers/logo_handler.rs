use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::extractor::{AccessToken, AppJson};
use crate::features::logos::dtos::{LogoForm, LogoSearch};
use crate::features::logos::models::Logo;
use crate::features::logos::services::LogoService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// List logos of one page, filtered by the search form
#[utoipa::path(
    get,
    path = "/api/admin/logos",
    params(PaginationQuery, LogoSearch),
    responses(
        (status = 200, description = "Logos retrieved successfully", body = ApiResponse<Vec<Logo>>),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Upstream unavailable")
    ),
    tag = "logos",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_logos(
    token: AccessToken,
    State(service): State<Arc<LogoService>>,
    Query(pagination): Query<PaginationQuery>,
    Query(search): Query<LogoSearch>,
) -> Result<Json<ApiResponse<Vec<Logo>>>> {
    let (logos, meta) = service
        .search(&pagination, &search, Some(token.as_str()))
        .await?;
    Ok(Json(ApiResponse::success(Some(logos), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/admin/logos/{id}",
    params(
        ("id" = i64, Path, description = "Logo ID")
    ),
    responses(
        (status = 200, description = "Logo retrieved successfully", body = ApiResponse<Logo>),
        (status = 404, description = "Logo not found")
    ),
    tag = "logos",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_logo(
    token: AccessToken,
    State(service): State<Arc<LogoService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Logo>>> {
    let logo = service.get(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(Some(logo), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/logos",
    request_body = LogoForm,
    responses(
        (status = 200, description = "Logo created successfully", body = ApiResponse<Logo>),
        (status = 400, description = "Validation error")
    ),
    tag = "logos",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_logo(
    token: AccessToken,
    State(service): State<Arc<LogoService>>,
    AppJson(form): AppJson<LogoForm>,
) -> Result<Json<ApiResponse<Logo>>> {
    let logo = service.create(form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        logo,
        Some("Logo created successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/logos/{id}",
    params(
        ("id" = i64, Path, description = "Logo ID")
    ),
    request_body = LogoForm,
    responses(
        (status = 200, description = "Logo updated successfully", body = ApiResponse<Logo>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Logo not found")
    ),
    tag = "logos",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_logo(
    token: AccessToken,
    State(service): State<Arc<LogoService>>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<LogoForm>,
) -> Result<Json<ApiResponse<Logo>>> {
    let logo = service.update(id, form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        logo,
        Some("Logo updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/logos/{id}",
    params(
        ("id" = i64, Path, description = "Logo ID")
    ),
    responses(
        (status = 200, description = "Logo deleted successfully"),
        (status = 404, description = "Logo not found")
    ),
    tag = "logos",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_logo(
    token: AccessToken,
    State(service): State<Arc<LogoService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Logo deleted successfully".to_string()),
        None,
    )))
}
