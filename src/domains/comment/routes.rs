// Comment domain routes
// 댓글 도메인 라우터
use axum::{routing::post, Router};
use crate::domains::comment::handlers::comment_handler;
use crate::shared::services::AppState;

/// Create comment router
/// 댓글 라우터 생성
pub fn create_comment_router() -> Router<AppState> {
    Router::new()
        .route("/add-comment/:id_task", post(comment_handler::add_comment))
}
