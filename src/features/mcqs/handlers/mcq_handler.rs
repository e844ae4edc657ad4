use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::extractor::{AccessToken, AppJson};
use crate::features::mcqs::dtos::{McqForm, McqSearch};
use crate::features::mcqs::models::Mcq;
use crate::features::mcqs::services::McqService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// List multiple-choice questions of one page
#[utoipa::path(
    get,
    path = "/api/admin/mcqs",
    params(PaginationQuery, McqSearch),
    responses(
        (status = 200, description = "MCQs retrieved successfully", body = ApiResponse<Vec<Mcq>>),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Upstream unavailable")
    ),
    tag = "mcqs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_mcqs(
    token: AccessToken,
    State(service): State<Arc<McqService>>,
    Query(pagination): Query<PaginationQuery>,
    Query(search): Query<McqSearch>,
) -> Result<Json<ApiResponse<Vec<Mcq>>>> {
    let (mcqs, meta) = service
        .search(&pagination, &search, Some(token.as_str()))
        .await?;
    Ok(Json(ApiResponse::success(Some(mcqs), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/admin/mcqs/{id}",
    params(
        ("id" = i64, Path, description = "MCQ ID")
    ),
    responses(
        (status = 200, description = "MCQ retrieved successfully", body = ApiResponse<Mcq>),
        (status = 404, description = "MCQ not found")
    ),
    tag = "mcqs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_mcq(
    token: AccessToken,
    State(service): State<Arc<McqService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Mcq>>> {
    let mcq = service.get(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(Some(mcq), None, None)))
}

/// Create an MCQ; correct answers must reference filled options
#[utoipa::path(
    post,
    path = "/api/admin/mcqs",
    request_body = McqForm,
    responses(
        (status = 200, description = "MCQ created successfully", body = ApiResponse<Mcq>),
        (status = 400, description = "Validation error")
    ),
    tag = "mcqs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_mcq(
    token: AccessToken,
    State(service): State<Arc<McqService>>,
    AppJson(form): AppJson<McqForm>,
) -> Result<Json<ApiResponse<Mcq>>> {
    let mcq = service.create(form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        mcq,
        Some("MCQ created successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/mcqs/{id}",
    params(
        ("id" = i64, Path, description = "MCQ ID")
    ),
    request_body = McqForm,
    responses(
        (status = 200, description = "MCQ updated successfully", body = ApiResponse<Mcq>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "MCQ not found")
    ),
    tag = "mcqs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_mcq(
    token: AccessToken,
    State(service): State<Arc<McqService>>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<McqForm>,
) -> Result<Json<ApiResponse<Mcq>>> {
    let mcq = service.update(id, form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        mcq,
        Some("MCQ updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/mcqs/{id}",
    params(
        ("id" = i64, Path, description = "MCQ ID")
    ),
    responses(
        (status = 200, description = "MCQ deleted successfully"),
        (status = 404, description = "MCQ not found")
    ),
    tag = "mcqs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_mcq(
    token: AccessToken,
    State(service): State<Arc<McqService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("MCQ deleted successfully".to_string()),
        None,
    )))
}
