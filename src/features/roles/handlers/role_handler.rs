use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::extractor::{AccessToken, AppJson};
use crate::features::roles::dtos::{RoleForm, RoleRow, RoleSearch, RoleTreeQuery};
use crate::features::roles::models::Role;
use crate::features::roles::services::RoleService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// List roles of one page, filtered by the search form
#[utoipa::path(
    get,
    path = "/api/admin/roles",
    params(PaginationQuery, RoleSearch),
    responses(
        (status = 200, description = "Roles retrieved successfully", body = ApiResponse<Vec<Role>>),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Upstream unavailable")
    ),
    tag = "roles",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_roles(
    token: AccessToken,
    State(service): State<Arc<RoleService>>,
    Query(pagination): Query<PaginationQuery>,
    Query(search): Query<RoleSearch>,
) -> Result<Json<ApiResponse<Vec<Role>>>> {
    let (roles, meta) = service
        .search(&pagination, &search, Some(token.as_str()))
        .await?;
    Ok(Json(ApiResponse::success(Some(roles), None, Some(meta))))
}

/// Role hierarchy flattened into table rows
#[utoipa::path(
    get,
    path = "/api/admin/roles/tree",
    params(PaginationQuery, RoleSearch, RoleTreeQuery),
    responses(
        (status = 200, description = "Role rows in display order", body = ApiResponse<Vec<RoleRow>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "roles",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn role_tree(
    token: AccessToken,
    State(service): State<Arc<RoleService>>,
    Query(pagination): Query<PaginationQuery>,
    Query(search): Query<RoleSearch>,
    Query(tree): Query<RoleTreeQuery>,
) -> Result<Json<ApiResponse<Vec<RoleRow>>>> {
    let (rows, meta) = service
        .tree(&pagination, &search, &tree, Some(token.as_str()))
        .await?;
    Ok(Json(ApiResponse::success(Some(rows), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/admin/roles/{id}",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role retrieved successfully", body = ApiResponse<Role>),
        (status = 404, description = "Role not found")
    ),
    tag = "roles",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_role(
    token: AccessToken,
    State(service): State<Arc<RoleService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Role>>> {
    let role = service.get(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(Some(role), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/roles",
    request_body = RoleForm,
    responses(
        (status = 200, description = "Role created successfully", body = ApiResponse<Role>),
        (status = 400, description = "Validation error")
    ),
    tag = "roles",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_role(
    token: AccessToken,
    State(service): State<Arc<RoleService>>,
    AppJson(form): AppJson<RoleForm>,
) -> Result<Json<ApiResponse<Role>>> {
    let role = service.create(form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        role,
        Some("Role created successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/roles/{id}",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    request_body = RoleForm,
    responses(
        (status = 200, description = "Role updated successfully", body = ApiResponse<Role>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Role not found")
    ),
    tag = "roles",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_role(
    token: AccessToken,
    State(service): State<Arc<RoleService>>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<RoleForm>,
) -> Result<Json<ApiResponse<Role>>> {
    let role = service.update(id, form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        role,
        Some("Role updated successfully".to_string()),
        None,
    )))
}

/// Delete a role; system roles are refused
#[utoipa::path(
    delete,
    path = "/api/admin/roles/{id}",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role deleted successfully"),
        (status = 403, description = "System roles cannot be deleted"),
        (status = 404, description = "Role not found")
    ),
    tag = "roles",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_role(
    token: AccessToken,
    State(service): State<Arc<RoleService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Role deleted successfully".to_string()),
        None,
    )))
}
