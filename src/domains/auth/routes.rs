// Auth domain routes
// 인증 도메인 라우터
use axum::{routing::post, Router};
use crate::domains::auth::handlers::{auth_handler, token_handler};
use crate::shared::services::AppState;

/// Create authentication router
/// 인증 라우터 생성
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/registration", post(auth_handler::registration))
        .route("/authentication", post(auth_handler::authentication))
}

/// Create token router
/// 토큰 라우터 생성
pub fn create_token_router() -> Router<AppState> {
    Router::new()
        .route("/access-new", post(token_handler::replace_access_token))
}
