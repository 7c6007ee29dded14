// Task domain routes
// 작업 도메인 라우터
use axum::{routing::{delete, get, post, put}, Router};
use crate::domains::task::handlers::task_handler;
use crate::shared::services::AppState;

/// Create task router
/// 작업 라우터 생성
pub fn create_task_router() -> Router<AppState> {
    Router::new()
        .route("/add-task", post(task_handler::add_task))
        .route("/update-task/:id", put(task_handler::update_task))
        .route("/get-task/:id", get(task_handler::get_task))
        .route("/delete-task/:id", delete(task_handler::delete_task))
        .route("/update-status/:id", post(task_handler::update_status_task))
        .route("/update-priority/:id", post(task_handler::update_priority_task))
        .route("/assign-performer/:id_task", post(task_handler::assign_performer_task))
        .route("/author-task/:id", get(task_handler::get_author_tasks))
        .route("/executor-task/:id", get(task_handler::get_executor_tasks))
}
