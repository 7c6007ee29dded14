use crate::shared::database::{Database, UserRepository, RefreshTokenRepository};
use crate::domains::auth::models::{AccessTokenRequest, AccessTokenResponse};
use crate::domains::auth::services::JwtService;
use crate::shared::errors::ApiError;

/// Access Token 재발급 서비스
/// Refresh Token으로 새 Access Token을 발급.
/// 저장된 refresh token 문자열이 유효성의 유일한 기준: 서명이 유효해도
/// 저장된 값과 바이트 단위로 일치하지 않으면 거부 (rotation/replay 처리)
/// Replaces the access token for a presented refresh token. The stored token
/// string is the sole source of truth: a cryptographically valid token that
/// does not byte-for-byte match the stored value is rejected.
#[derive(Clone)]
pub struct TokenService {
    db: Database,
    jwt_service: JwtService,
}

impl TokenService {
    pub fn new(db: Database, jwt_service: JwtService) -> Self {
        Self { db, jwt_service }
    }

    /// Refresh Token 검증 후 새 Access Token 발급
    /// refresh token 자체는 이 경로에서 교체되지 않음 (rotation은 로그인 시에만)
    pub async fn replace_access_token(
        &self,
        request: AccessTokenRequest,
    ) -> Result<AccessTokenResponse, ApiError> {
        // 1. 서명/만료 검증 (모든 파싱 실패는 인증 실패로 수렴)
        if !self.jwt_service.validate_refresh_token(&request.refresh_token) {
            return Err(ApiError::AuthenticationFailed);
        }

        // 2. 주체(이메일) 추출 — validate 통과 후이므로 실패는 전파
        let claims = self.jwt_service.get_refresh_claims(&request.refresh_token)?;
        let email = claims.sub;

        // 3. 사용자와 저장된 refresh token 조회
        let user_repo = UserRepository::new(self.db.pool().clone());
        let user = user_repo
            .get_user_by_email(&email)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or_else(|| ApiError::UserNotFoundByEmail { email: email.clone() })?;

        let refresh_token_repo = RefreshTokenRepository::new(self.db.pool().clone());
        let stored = refresh_token_repo
            .find_by_user_id(user.id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to find refresh token: {}", e)))?;

        // 4. 저장된 값과 바이트 단위 비교
        //    로그인으로 교체된 이전 토큰은 서명이 유효해도 여기서 거부됨
        let stored = match stored {
            Some(record) => record,
            None => return Err(ApiError::AuthenticationFailed),
        };

        if stored.refresh_token != request.refresh_token {
            tracing::warn!(user_id = user.id, "Presented refresh token does not match the stored one");
            return Err(ApiError::AuthenticationFailed);
        }

        // 5. 새 Access Token만 발급
        let access = self.jwt_service.issue_access_token(&user)?;

        tracing::info!(user_id = user.id, email = %user.email, "Access token replaced");

        Ok(AccessTokenResponse {
            email: user.email,
            access_token: access.token,
            expires_at_access: access.expires_at,
        })
    }
}
