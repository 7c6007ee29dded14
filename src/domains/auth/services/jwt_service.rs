// src/domains/auth/services/jwt_service.rs
use crate::domains::auth::models::jwt::{AccessClaims, IssuedToken, RefreshClaims};
use crate::domains::auth::models::user::User;
use crate::shared::errors::ApiError;
use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Access Token 유효 기간 (분)
/// Access token validity window (minutes)
const ACCESS_VALIDITY_MINUTES: i64 = 60;

/// Refresh Token 유효 기간 (일)
/// Refresh token validity window (days)
const REFRESH_VALIDITY_DAYS: i64 = 30;

/// JWT 서비스
/// Access/Refresh 두 종류의 토큰을 서로 독립된 비밀키로 서명/검증.
/// 독립된 키를 사용하므로 access 토큰을 refresh 토큰으로 (또는 그 반대로)
/// 재사용하는 것은 서명 단계에서 거부됨.
///
/// 만료 경계: 토큰은 exp 초까지(포함) 유효하고 그 이후에는 무효 (leeway 0).
/// Token is accepted while now <= exp and rejected after (zero leeway).
#[derive(Clone)]
pub struct JwtService {
    issuer: String,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
}

impl JwtService {
    /// JWT Service 생성
    /// 두 비밀키는 base64 인코딩 문자열로 전달받아 디코딩 후 사용
    /// Create JWT service from two base64-encoded secrets and an issuer
    pub fn new(secret_access: &str, secret_refresh: &str, issuer: String) -> Result<Self> {
        let access = BASE64
            .decode(secret_access)
            .context("Failed to decode access token secret (expected base64)")?;
        let refresh = BASE64
            .decode(secret_refresh)
            .context("Failed to decode refresh token secret (expected base64)")?;

        Ok(Self {
            issuer,
            access_encoding_key: EncodingKey::from_secret(&access),
            access_decoding_key: DecodingKey::from_secret(&access),
            refresh_encoding_key: EncodingKey::from_secret(&refresh),
            refresh_decoding_key: DecodingKey::from_secret(&refresh),
        })
    }

    /// Access Token 발급 (60분)
    /// 만료 시각은 한 번만 계산해서 exp claim과 응답용 expires_at에 같이 사용
    /// Issue access token; the expiration instant is computed once and reused
    pub fn issue_access_token(&self, user: &User) -> Result<IssuedToken, ApiError> {
        let issued_at = Utc::now();
        let expires_at = Self::access_expiration(issued_at);
        let claims = AccessClaims::new(
            &self.issuer,
            user,
            issued_at.timestamp(),
            expires_at.timestamp(),
        );

        let token = encode(&Header::default(), &claims, &self.access_encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to generate access token: {}", e)))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Refresh Token 발급 (30일, 만료 시각은 분 단위로 절삭)
    /// Issue refresh token (30 days, expiry truncated to the minute)
    pub fn issue_refresh_token(&self, user: &User) -> Result<IssuedToken, ApiError> {
        let issued_at = Utc::now();
        let expires_at = Self::refresh_expiration(issued_at);
        let claims = RefreshClaims::new(
            &self.issuer,
            user,
            issued_at.timestamp(),
            expires_at.timestamp(),
        );

        let token = encode(&Header::default(), &claims, &self.refresh_encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to generate refresh token: {}", e)))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Access Token 검증 (실패 시 false, 에러를 던지지 않음)
    /// Verify access token; any parse failure collapses to false
    pub fn validate_access_token(&self, token: &str) -> bool {
        Self::validate_token(token, &self.access_decoding_key, "access")
    }

    /// Refresh Token 검증 (실패 시 false, 에러를 던지지 않음)
    /// Verify refresh token; any parse failure collapses to false
    pub fn validate_refresh_token(&self, token: &str) -> bool {
        Self::validate_token(token, &self.refresh_decoding_key, "refresh")
    }

    /// Access Token에서 클레임 추출
    /// validate_access_token 성공 후에만 호출할 것 (실패 시 에러 전파)
    /// Extract access claims; fails loudly, callers must validate first
    pub fn get_access_claims(&self, token: &str) -> Result<AccessClaims, ApiError> {
        decode::<AccessClaims>(token, &self.access_decoding_key, &Self::validation())
            .map(|data| data.claims)
            .map_err(|_| ApiError::InvalidToken)
    }

    /// Refresh Token에서 클레임 추출
    /// Extract refresh claims; fails loudly, callers must validate first
    pub fn get_refresh_claims(&self, token: &str) -> Result<RefreshClaims, ApiError> {
        decode::<RefreshClaims>(token, &self.refresh_decoding_key, &Self::validation())
            .map(|data| data.claims)
            .map_err(|_| ApiError::InvalidToken)
    }

    /// Access Token 만료 시각: 발급 시각 + 60분
    fn access_expiration(now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::minutes(ACCESS_VALIDITY_MINUTES)
    }

    /// Refresh Token 만료 시각: 발급 시각 + 30일, 분 단위 절삭
    fn refresh_expiration(now: DateTime<Utc>) -> DateTime<Utc> {
        let expires = now + Duration::days(REFRESH_VALIDITY_DAYS);
        let seconds = expires.timestamp();
        DateTime::from_timestamp(seconds - seconds % 60, 0).unwrap_or(expires)
    }

    /// 검증 옵션: HS256 고정, leeway 0
    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }

    /// 토큰 검증 공통 처리
    /// 실패 종류별로 로그를 남기고 호출자에게는 bool로만 전달 (fail-closed)
    /// Shared validation: log each failure kind, collapse to a boolean
    fn validate_token(token: &str, key: &DecodingKey, kind: &str) -> bool {
        match decode::<serde_json::Value>(token, key, &Self::validation()) {
            Ok(_) => true,
            Err(e) => {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::warn!(kind, "Expired token");
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!(kind, "Invalid token signature");
                    }
                    ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                        tracing::warn!(kind, "Unsupported token algorithm");
                    }
                    ErrorKind::InvalidToken => {
                        tracing::warn!(kind, "Malformed token");
                    }
                    _ => {
                        tracing::warn!(kind, error = %e, "Failed to parse token");
                    }
                }
                false
            }
        }
    }
}
