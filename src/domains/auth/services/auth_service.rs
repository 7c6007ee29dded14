use crate::shared::database::{Database, UserRepository, RefreshTokenRepository};
use crate::domains::auth::models::{
    AuthenticationRequest, AuthenticationResponse, RegistrationRequest, RegistrationResponse,
    RefreshTokenUpsert, Role,
};
use crate::domains::auth::services::JwtService;
use crate::shared::errors::ApiError;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, SaltString};
use chrono::Utc;

// 인증 서비스
// 역할: NestJS의 Service 같은 것
// AuthService: registration and login orchestration
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(db: Database, jwt_service: JwtService) -> Self {
        Self { db, jwt_service }
    }

    // 회원가입 (비즈니스 로직)
    pub async fn registration(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        // 1. 이메일 중복 확인
        let exists = user_repo
            .exists_by_email(&request.email)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to check email existence: {}", e)))?;

        if exists {
            return Err(ApiError::LoginAlreadyExists { email: request.email });
        }

        // 2. 비밀번호 해싱
        let password_hash = Self::hash_password(&request.password)?;

        // 3. 사용자 생성 (역할은 USER 고정)
        let user = user_repo
            .create_user(
                &request.first_name,
                &request.last_name,
                &request.email,
                &password_hash,
                Role::User,
            )
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to create user: {}", e)))?;

        tracing::info!(user_id = user.id, email = %user.email, "New user registered");

        Ok(RegistrationResponse {
            user: user.into(),
            message: "User created successfully".to_string(),
        })
    }

    // 로그인 (비즈니스 로직)
    // 비밀번호 검증 성공 → 두 토큰 발급 → refresh 레코드 교체 → 응답
    // refresh 레코드 저장이 끝난 뒤에만 토큰이 클라이언트에 전달됨
    pub async fn authentication(
        &self,
        request: AuthenticationRequest,
    ) -> Result<AuthenticationResponse, ApiError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        // 1. 이메일로 사용자 조회
        let user = user_repo
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or_else(|| ApiError::UserNotFoundByEmail { email: request.email.clone() })?;

        // 2. 비밀번호 검증 (불일치는 401)
        Self::verify_password(&request.password, &user.password_hash)?;

        // 3. 토큰 발급 (각 토큰의 만료 시각은 발급 시 한 번만 계산됨)
        let access = self.jwt_service.issue_access_token(&user)?;
        let refresh = self.jwt_service.issue_refresh_token(&user)?;

        // 4. Refresh 레코드 교체 (rotation: 이전 로그인의 토큰은 이 시점에 무효화)
        let refresh_token_repo = RefreshTokenRepository::new(self.db.pool().clone());
        refresh_token_repo
            .upsert(RefreshTokenUpsert {
                user_id: user.id,
                refresh_token: refresh.token.clone(),
                issued_at: Utc::now(),
                expires_at: refresh.expires_at,
            })
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to store refresh token: {}", e)))?;

        tracing::info!(user_id = user.id, email = %user.email, "User authenticated");

        Ok(AuthenticationResponse {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role.as_str().to_string(),
            access_token: access.token,
            refresh_token: refresh.token,
            expires_at_access: access.expires_at,
            expires_at_refresh: refresh.expires_at,
        })
    }

    pub(crate) fn hash_password(password: &str) -> Result<String, ApiError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApiError::PasswordHashingFailed(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(password_hash)
    }

    pub(crate) fn verify_password(password: &str, password_hash: &str) -> Result<(), ApiError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| ApiError::Internal(format!("Invalid password hash: {}", e)))?;

        let argon2 = Argon2::default();

        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| ApiError::AuthenticationFailed)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let hash = AuthService::hash_password("password123").expect("Failed to hash");
        assert!(AuthService::verify_password("password123", &hash).is_ok());
    }

    #[test]
    fn test_wrong_password_is_authentication_failure() {
        let hash = AuthService::hash_password("password123").expect("Failed to hash");
        let result = AuthService::verify_password("wrong-password", &hash);
        assert!(matches!(result, Err(ApiError::AuthenticationFailed)));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = AuthService::hash_password("password123").expect("Failed to hash");
        let second = AuthService::hash_password("password123").expect("Failed to hash");
        assert_ne!(first, second);
    }

    #[test]
    fn test_corrupt_stored_hash_is_internal_error() {
        let result = AuthService::verify_password("password123", "not-a-phc-string");
        assert!(matches!(result, Err(ApiError::Internal(_))));
    }
}
