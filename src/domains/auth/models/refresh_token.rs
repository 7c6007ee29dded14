use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Refresh Token 모델 (DB 저장용)
/// 사용자당 정확히 한 행 (UNIQUE(user_id))
/// Refresh token record (one row per user)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    pub id: i64,
    pub user_id: i64,
    /// 저장된 토큰 문자열이 refresh token 유효성의 유일한 기준
    /// The stored token string is the sole source of truth for liveness
    pub refresh_token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Refresh Token 저장/교체 요청 (로그인 시)
/// Refresh token upsert payload (written on every successful login)
#[derive(Debug)]
pub struct RefreshTokenUpsert {
    pub user_id: u64,  // u64로 통일 (User 모델과 일치, repository에서 i64로 변환)
    pub refresh_token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
