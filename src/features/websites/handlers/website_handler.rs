use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::extractor::{AccessToken, AppJson};
use crate::features::websites::dtos::{WebsiteForm, WebsiteSearch};
use crate::features::websites::models::Website;
use crate::features::websites::services::WebsiteService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// List websites of one page, filtered by the search form
#[utoipa::path(
    get,
    path = "/api/admin/websites",
    params(PaginationQuery, WebsiteSearch),
    responses(
        (status = 200, description = "Websites retrieved successfully", body = ApiResponse<Vec<Website>>),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Upstream unavailable")
    ),
    tag = "websites",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_websites(
    token: AccessToken,
    State(service): State<Arc<WebsiteService>>,
    Query(pagination): Query<PaginationQuery>,
    Query(search): Query<WebsiteSearch>,
) -> Result<Json<ApiResponse<Vec<Website>>>> {
    let (websites, meta) = service
        .search(&pagination, &search, Some(token.as_str()))
        .await?;
    Ok(Json(ApiResponse::success(Some(websites), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/admin/websites/{id}",
    params(
        ("id" = i64, Path, description = "Website ID")
    ),
    responses(
        (status = 200, description = "Website retrieved successfully", body = ApiResponse<Website>),
        (status = 404, description = "Website not found")
    ),
    tag = "websites",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_website(
    token: AccessToken,
    State(service): State<Arc<WebsiteService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Website>>> {
    let website = service.get(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(Some(website), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/websites",
    request_body = WebsiteForm,
    responses(
        (status = 200, description = "Website created successfully", body = ApiResponse<Website>),
        (status = 400, description = "Validation error")
    ),
    tag = "websites",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_website(
    token: AccessToken,
    State(service): State<Arc<WebsiteService>>,
    AppJson(form): AppJson<WebsiteForm>,
) -> Result<Json<ApiResponse<Website>>> {
    let website = service.create(form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        website,
        Some("Website created successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/websites/{id}",
    params(
        ("id" = i64, Path, description = "Website ID")
    ),
    request_body = WebsiteForm,
    responses(
        (status = 200, description = "Website updated successfully", body = ApiResponse<Website>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Website not found")
    ),
    tag = "websites",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_website(
    token: AccessToken,
    State(service): State<Arc<WebsiteService>>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<WebsiteForm>,
) -> Result<Json<ApiResponse<Website>>> {
    let website = service.update(id, form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        website,
        Some("Website updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/websites/{id}",
    params(
        ("id" = i64, Path, description = "Website ID")
    ),
    responses(
        (status = 200, description = "Website deleted successfully"),
        (status = 404, description = "Website not found")
    ),
    tag = "websites",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_website(
    token: AccessToken,
    State(service): State<Arc<WebsiteService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Website deleted successfully".to_string()),
        None,
    )))
}
