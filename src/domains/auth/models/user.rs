use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 사용자 역할 (단일 권한)
/// User role. Each user carries exactly one role; the role name is the
/// single authority attached to the request's security principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
        }
    }

    /// DB에 저장된 문자열에서 역할 복원
    /// Restore role from its stored name
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(Role::User),
            _ => None,
        }
    }
}

/// 사용자 모델 (DB 저장용)
/// User model (database row)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// 이메일 (로그인 키, 유니크)
    /// Email (login key, unique)
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 사용자 응답 모델 (비밀번호 해시 제외)
/// User response model (without password hash)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = UserResponse)]
pub struct UserResponse {
    /// 사용자 ID
    /// User ID
    pub id: u64,

    /// 이름
    /// First name
    #[schema(example = "Ivan")]
    pub first_name: String,

    /// 성
    /// Last name
    #[schema(example = "Petrov")]
    pub last_name: String,

    /// 이메일
    /// Email
    #[schema(example = "user@example.com")]
    pub email: String,

    /// 역할 이름
    /// Role name
    #[schema(example = "USER")]
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role.as_str().to_string(),
        }
    }
}
