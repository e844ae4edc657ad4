use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::extractor::{AccessToken, AppJson};
use crate::features::users::dtos::{UserForm, UserSearch};
use crate::features::users::models::User;
use crate::features::users::services::UserService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// List users of one page, filtered by the search form
#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(PaginationQuery, UserSearch),
    responses(
        (status = 200, description = "Users retrieved successfully", body = ApiResponse<Vec<User>>),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Upstream unavailable")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_users(
    token: AccessToken,
    State(service): State<Arc<UserService>>,
    Query(pagination): Query<PaginationQuery>,
    Query(search): Query<UserSearch>,
) -> Result<Json<ApiResponse<Vec<User>>>> {
    let (users, meta) = service
        .search(&pagination, &search, Some(token.as_str()))
        .await?;
    Ok(Json(ApiResponse::success(Some(users), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/admin/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = ApiResponse<User>),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_user(
    token: AccessToken,
    State(service): State<Arc<UserService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<User>>> {
    let user = service.get(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}

/// Create a user; a password is required
#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = UserForm,
    responses(
        (status = 200, description = "User created successfully", body = ApiResponse<User>),
        (status = 400, description = "Validation error")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_user(
    token: AccessToken,
    State(service): State<Arc<UserService>>,
    AppJson(form): AppJson<UserForm>,
) -> Result<Json<ApiResponse<User>>> {
    let user = service.create(form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        user,
        Some("User created successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserForm,
    responses(
        (status = 200, description = "User updated successfully", body = ApiResponse<User>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_user(
    token: AccessToken,
    State(service): State<Arc<UserService>>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<UserForm>,
) -> Result<Json<ApiResponse<User>>> {
    let user = service.update(id, form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        user,
        Some("User updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully"),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_user(
    token: AccessToken,
    State(service): State<Arc<UserService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("User deleted successfully".to_string()),
        None,
    )))
}
