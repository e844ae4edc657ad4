use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::extractor::{AccessToken, AppJson};
use crate::features::questions::dtos::{QuestionForm, QuestionSearch};
use crate::features::questions::models::FillBlankQuestion;
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// List fill-in-the-blank questions of one page
#[utoipa::path(
    get,
    path = "/api/admin/questions",
    params(PaginationQuery, QuestionSearch),
    responses(
        (status = 200, description = "Questions retrieved successfully", body = ApiResponse<Vec<FillBlankQuestion>>),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Upstream unavailable")
    ),
    tag = "questions",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_questions(
    token: AccessToken,
    State(service): State<Arc<QuestionService>>,
    Query(pagination): Query<PaginationQuery>,
    Query(search): Query<QuestionSearch>,
) -> Result<Json<ApiResponse<Vec<FillBlankQuestion>>>> {
    let (questions, meta) = service
        .search(&pagination, &search, Some(token.as_str()))
        .await?;
    Ok(Json(ApiResponse::success(Some(questions), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/admin/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question retrieved successfully", body = ApiResponse<FillBlankQuestion>),
        (status = 404, description = "Question not found")
    ),
    tag = "questions",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_question(
    token: AccessToken,
    State(service): State<Arc<QuestionService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<FillBlankQuestion>>> {
    let question = service.get(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(Some(question), None, None)))
}

/// Create a question; the text must contain a blank marker
#[utoipa::path(
    post,
    path = "/api/admin/questions",
    request_body = QuestionForm,
    responses(
        (status = 200, description = "Question created successfully", body = ApiResponse<FillBlankQuestion>),
        (status = 400, description = "Validation error")
    ),
    tag = "questions",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_question(
    token: AccessToken,
    State(service): State<Arc<QuestionService>>,
    AppJson(form): AppJson<QuestionForm>,
) -> Result<Json<ApiResponse<FillBlankQuestion>>> {
    let question = service.create(form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        question,
        Some("Question created successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    request_body = QuestionForm,
    responses(
        (status = 200, description = "Question updated successfully", body = ApiResponse<FillBlankQuestion>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Question not found")
    ),
    tag = "questions",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_question(
    token: AccessToken,
    State(service): State<Arc<QuestionService>>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<QuestionForm>,
) -> Result<Json<ApiResponse<FillBlankQuestion>>> {
    let question = service.update(id, form, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        question,
        Some("Question updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted successfully"),
        (status = 404, description = "Question not found")
    ),
    tag = "questions",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_question(
    token: AccessToken,
    State(service): State<Arc<QuestionService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, Some(token.as_str())).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Question deleted successfully".to_string()),
        None,
    )))
}
