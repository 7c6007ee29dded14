use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::domains::auth::models::user::User;

/// Access Token Claims (토큰에 포함될 데이터)
/// Access token claim set: subject is the user email, role/email travel as
/// custom claims so handlers never need a second lookup for authorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// 발급자
    /// Issuer
    pub iss: String,

    /// 주체 (사용자 이메일)
    /// Subject (user email)
    pub sub: String,

    /// 역할 이름
    /// Role name
    pub role: String,

    /// 이메일
    /// Email
    pub email: String,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    pub fn new(issuer: &str, user: &User, issued_at: i64, expires_at: i64) -> Self {
        Self {
            iss: issuer.to_string(),
            sub: user.email.clone(),
            role: user.role.as_str().to_string(),
            email: user.email.clone(),
            iat: issued_at,
            exp: expires_at,
        }
    }
}

/// Refresh Token Claims
/// 주체(이메일) 외에는 사용자 정보를 담지 않음
/// Refresh token claim set: carries nothing beyond the subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub iss: String,
    /// 주체 (사용자 이메일)
    /// Subject (user email)
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl RefreshClaims {
    pub fn new(issuer: &str, user: &User, issued_at: i64, expires_at: i64) -> Self {
        Self {
            iss: issuer.to_string(),
            sub: user.email.clone(),
            iat: issued_at,
            exp: expires_at,
        }
    }
}

/// 발급된 토큰과 만료 시각
/// 만료 시각은 발급 시 한 번만 계산하여 서명(exp claim)과 응답에 같은 값을 사용
/// An issued token plus the expiration instant it was signed with. The
/// instant is computed once per issuance and reused for the reported expiry,
/// so the signed exp claim and the client-visible value never drift.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
