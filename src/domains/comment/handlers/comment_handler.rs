use crate::domains::comment::models::{CommentRequest, CommentResponse};
use crate::shared::services::AppState;
use crate::shared::errors::ApiError;
use crate::shared::middleware::auth::SecurityPrincipal;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

// 댓글 작성 핸들러
#[utoipa::path(
    post,
    path = "/api/comments/add-comment/{id_task}",
    request_body = CommentRequest,
    params(
        ("id_task" = u64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Comment added successfully", body = CommentResponse),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Comments",
    security(("BearerAuth" = []))
)]
pub async fn add_comment(
    State(app_state): State<AppState>,
    Path(id_task): Path<u64>,
    principal: SecurityPrincipal,
    Json(request): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .comment_state
        .comment_service
        .add_comment(&principal, id_task, request)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}
