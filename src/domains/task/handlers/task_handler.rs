use crate::domains::task::models::{PageQuery, Priority, Status, TaskFullResponse, TaskRequest, TaskResponse};
use crate::shared::services::AppState;
use crate::shared::errors::ApiError;
use crate::shared::middleware::auth::SecurityPrincipal;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

// 작업 생성 시 상태/우선순위 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct TaskCreateQuery {
    pub status: Status,
    pub priority: Priority,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Status,
}

#[derive(Debug, Deserialize)]
pub struct PriorityQuery {
    pub priority: Priority,
}

#[derive(Debug, Deserialize)]
pub struct PerformerQuery {
    pub email: String,
}

// 작업 생성 핸들러
#[utoipa::path(
    post,
    path = "/api/tasks/add-task",
    request_body = TaskRequest,
    params(
        ("status" = Status, Query, description = "Initial task status"),
        ("priority" = Priority, Query, description = "Initial task priority")
    ),
    responses(
        (status = 200, description = "Task added successfully", body = TaskResponse),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks",
    security(("BearerAuth" = []))
)]
pub async fn add_task(
    State(app_state): State<AppState>,
    Query(params): Query<TaskCreateQuery>,
    principal: SecurityPrincipal,
    Json(request): Json<TaskRequest>,
) -> Result<Json<TaskResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .task_state
        .task_service
        .add_task(&principal, request, params.status, params.priority)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

// 작업 수정 핸들러 (작성자만)
#[utoipa::path(
    put,
    path = "/api/tasks/update-task/{id}",
    request_body = TaskRequest,
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task updated successfully", body = TaskResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the task author"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks",
    security(("BearerAuth" = []))
)]
pub async fn update_task(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    principal: SecurityPrincipal,
    Json(request): Json<TaskRequest>,
) -> Result<Json<TaskResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .task_state
        .task_service
        .update_task(&principal, request, id)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

// 작업 상세 조회 핸들러 (작성자만, 댓글 포함)
#[utoipa::path(
    get,
    path = "/api/tasks/get-task/{id}",
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task retrieved successfully", body = TaskFullResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the task author"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks",
    security(("BearerAuth" = []))
)]
pub async fn get_task(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    principal: SecurityPrincipal,
) -> Result<Json<TaskFullResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .task_state
        .task_service
        .get_task(&principal, id)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

// 작업 삭제 핸들러 (작성자만)
#[utoipa::path(
    delete,
    path = "/api/tasks/delete-task/{id}",
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the task author"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks",
    security(("BearerAuth" = []))
)]
pub async fn delete_task(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    principal: SecurityPrincipal,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let message = app_state
        .task_state
        .task_service
        .delete_task(&principal, id)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(serde_json::json!({ "message": message })))
}

// 작업 상태 변경 핸들러 (실행자만)
#[utoipa::path(
    post,
    path = "/api/tasks/update-status/{id}",
    params(
        ("id" = u64, Path, description = "Task ID"),
        ("status" = Status, Query, description = "New task status")
    ),
    responses(
        (status = 200, description = "Task status updated successfully", body = TaskResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the task executor"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks",
    security(("BearerAuth" = []))
)]
pub async fn update_status_task(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Query<StatusQuery>,
    principal: SecurityPrincipal,
) -> Result<Json<TaskResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .task_state
        .task_service
        .update_status_task(&principal, id, params.status)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

// 작업 우선순위 변경 핸들러 (작성자만)
#[utoipa::path(
    post,
    path = "/api/tasks/update-priority/{id}",
    params(
        ("id" = u64, Path, description = "Task ID"),
        ("priority" = Priority, Query, description = "New task priority")
    ),
    responses(
        (status = 200, description = "Task priority updated successfully", body = TaskResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the task author"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks",
    security(("BearerAuth" = []))
)]
pub async fn update_priority_task(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Query<PriorityQuery>,
    principal: SecurityPrincipal,
) -> Result<Json<TaskResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .task_state
        .task_service
        .update_priority_task(&principal, id, params.priority)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

// 실행자 지정 핸들러 (작성자만)
#[utoipa::path(
    post,
    path = "/api/tasks/assign-performer/{id_task}",
    params(
        ("id_task" = u64, Path, description = "Task ID"),
        ("email" = String, Query, description = "Executor email")
    ),
    responses(
        (status = 200, description = "Executor assigned successfully", body = TaskResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the task author"),
        (status = 404, description = "Task or executor not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks",
    security(("BearerAuth" = []))
)]
pub async fn assign_performer_task(
    State(app_state): State<AppState>,
    Path(id_task): Path<u64>,
    Query(params): Query<PerformerQuery>,
    principal: SecurityPrincipal,
) -> Result<Json<TaskResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .task_state
        .task_service
        .assign_performer_task(&principal, id_task, &params.email)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

// 작성자별 작업 목록 핸들러
#[utoipa::path(
    get,
    path = "/api/tasks/author-task/{id}",
    params(
        ("id" = u64, Path, description = "Author user ID"),
        ("page" = u32, Query, description = "Page number (starts at 1)"),
        ("size" = u32, Query, description = "Tasks per page")
    ),
    responses(
        (status = 200, description = "Tasks retrieved successfully", body = [TaskFullResponse]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Author not found or page is empty"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks",
    security(("BearerAuth" = []))
)]
pub async fn get_author_tasks(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Query<PageQuery>,
    _principal: SecurityPrincipal,
) -> Result<Json<Vec<TaskFullResponse>>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .task_state
        .task_service
        .get_author_tasks(id, params.page, params.size)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

// 실행자별 작업 목록 핸들러
#[utoipa::path(
    get,
    path = "/api/tasks/executor-task/{id}",
    params(
        ("id" = u64, Path, description = "Executor user ID"),
        ("page" = u32, Query, description = "Page number (starts at 1)"),
        ("size" = u32, Query, description = "Tasks per page")
    ),
    responses(
        (status = 200, description = "Tasks retrieved successfully", body = [TaskFullResponse]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Executor not found or page is empty"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tasks",
    security(("BearerAuth" = []))
)]
pub async fn get_executor_tasks(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Query<PageQuery>,
    _principal: SecurityPrincipal,
) -> Result<Json<Vec<TaskFullResponse>>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .task_state
        .task_service
        .get_executor_tasks(id, params.page, params.size)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}
