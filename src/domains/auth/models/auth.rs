use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;
use crate::domains::auth::models::user::UserResponse;

// 회원가입 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = RegistrationRequest)]
pub struct RegistrationRequest {
    /// 이름
    /// First name
    #[schema(example = "Ivan")]
    pub first_name: String,

    /// 성
    /// Last name
    #[schema(example = "Petrov")]
    pub last_name: String,

    /// 이메일 주소 (로그인 키)
    /// Email address (login key)
    #[schema(example = "user@example.com")]
    pub email: String,

    /// 비밀번호 (해싱됨)
    /// Password (will be hashed)
    #[schema(example = "password123")]
    pub password: String,
}

// 회원가입 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = RegistrationResponse)]
pub struct RegistrationResponse {
    /// 사용자 정보 (비밀번호 제외)
    /// User information (without password)
    pub user: UserResponse,

    /// 성공 메시지
    /// Success message
    pub message: String,
}

// 로그인(인증) 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = AuthenticationRequest)]
pub struct AuthenticationRequest {
    /// 이메일 주소
    /// Email address
    #[schema(example = "user@example.com")]
    pub email: String,

    /// 비밀번호
    /// Password
    #[schema(example = "password123")]
    pub password: String,
}

// 로그인(인증) 응답 모델
// 프로필 전체 + 두 토큰 + 두 만료 시각
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = AuthenticationResponse)]
pub struct AuthenticationResponse {
    /// 사용자 ID
    /// User ID
    pub id: u64,

    /// 이름
    /// First name
    pub first_name: String,

    /// 성
    /// Last name
    pub last_name: String,

    /// 이메일
    /// Email
    #[schema(example = "user@example.com")]
    pub email: String,

    /// 비밀번호 해시 (원래 응답 계약의 일부)
    /// Password hash (part of the login contract)
    pub password_hash: String,

    /// 역할 이름
    /// Role name
    #[schema(example = "USER")]
    pub role: String,

    /// JWT Access Token (짧은 수명, 60분)
    /// JWT access token (short lifetime, 60 minutes)
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub access_token: String,

    /// JWT Refresh Token (긴 수명, 30일, DB에 저장)
    /// JWT refresh token (long lifetime, 30 days, stored in database)
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub refresh_token: String,

    /// Access Token 만료 시각
    /// Access token expiry
    pub expires_at_access: DateTime<Utc>,

    /// Refresh Token 만료 시각 (분 단위로 절삭)
    /// Refresh token expiry (truncated to the minute)
    pub expires_at_refresh: DateTime<Utc>,
}

// Access Token 재발급 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = AccessTokenRequest)]
pub struct AccessTokenRequest {
    /// Refresh Token
    /// 리프레시 토큰
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub refresh_token: String,
}

// Access Token 재발급 응답 모델
// refresh token은 이 경로에서 교체되지 않음
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = AccessTokenResponse)]
pub struct AccessTokenResponse {
    /// 이메일
    /// Email
    #[schema(example = "user@example.com")]
    pub email: String,

    /// 새 Access Token
    /// New access token
    pub access_token: String,

    /// 새 Access Token 만료 시각
    /// New access token expiry
    pub expires_at_access: DateTime<Utc>,
}
