use thiserror::Error;
use axum::{http::StatusCode, Json};
use chrono::Utc;
use serde_json::json;

/// 애플리케이션 전체 에러 (닫힌 열거형)
/// Application-wide error taxonomy. Every failure that reaches the request
/// boundary is one of these variants; the mapping to an HTTP status lives in
/// one place below.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 이메일이 이미 등록되어 있음
    /// Email already registered
    #[error("Login already exists: {email}")]
    LoginAlreadyExists { email: String },

    /// 인증 실패 (잘못된 비밀번호 또는 유효하지 않은 refresh token)
    /// Authentication failed (wrong password, or refresh token invalid/mismatched)
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// 사용자를 찾을 수 없음 (이메일로)
    /// User not found by email
    #[error("User not found: email={email}")]
    UserNotFoundByEmail { email: String },

    /// 사용자를 찾을 수 없음 (ID로)
    /// User not found by id
    #[error("User not found: id={id}")]
    UserByIdNotFound { id: u64 },

    /// 작업을 찾을 수 없음
    /// Task not found
    #[error("Task not found")]
    TaskNotFound,

    /// 접근 권한 없음 (작성자/실행자 확인 실패)
    /// Ownership check failed
    #[error("Access to this task is forbidden")]
    Forbidden,

    /// 잘못된 또는 만료된 토큰
    /// Invalid or expired token
    #[error("Invalid or expired token")]
    InvalidToken,

    /// 토큰이 제공되지 않음
    /// Token not provided
    #[error("Token not provided")]
    MissingToken,

    /// 비밀번호 해싱 실패
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    PasswordHashingFailed(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// 에러 종류 → HTTP 상태 코드 매핑 (한 곳에서만 평가)
    /// The single error-kind → status-code table
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::LoginAlreadyExists { .. } => StatusCode::BAD_REQUEST,
            ApiError::AuthenticationFailed
            | ApiError::InvalidToken
            | ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::UserNotFoundByEmail { .. }
            | ApiError::UserByIdNotFound { .. }
            | ApiError::TaskNotFound => StatusCode::NOT_FOUND,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::PasswordHashingFailed(_)
            | ApiError::DatabaseError(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// ApiError를 HTTP 응답으로 변환
/// 응답 본문: { code, message, timestamp }
impl From<ApiError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: ApiError) -> Self {
        let status = err.status_code();
        tracing::error!(status = status.as_u16(), "{}", err);

        (
            status,
            Json(json!({
                "code": status.as_u16(),
                "message": err.to_string(),
                "timestamp": Utc::now(),
            })),
        )
    }
}
