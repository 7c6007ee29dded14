use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use crate::domains::auth::models::user::User;
use crate::shared::database::UserRepository;
use crate::shared::errors::ApiError;
use crate::shared::services::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// 요청의 보안 주체 (인증 필터가 요청마다 새로 구성)
/// 전역 컨텍스트가 아니라 요청 확장(extension)으로만 전달됨
/// The authenticated identity for one request: the resolved user plus a
/// single authority derived from the role. Carried as a request extension,
/// constructed fresh per request, never persisted.
#[derive(Debug, Clone)]
pub struct SecurityPrincipal {
    user: User,
}

impl SecurityPrincipal {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> u64 {
        self.user.id
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    /// 단일 권한: 역할 이름
    /// The single derived authority (the role name)
    pub fn authority(&self) -> &str {
        self.user.role.as_str()
    }
}

/// 인증 필터 (요청당 정확히 한 번, 핸들러보다 먼저 실행)
///
/// - Authorization 헤더가 없거나 Bearer 형식이 아니면: 익명으로 통과
/// - 토큰이 유효하지 않으면: 익명으로 통과 (보호된 라우트는 추출 단계에서 401)
/// - 토큰이 유효하면: 사용자 조회 후 SecurityPrincipal을 요청에 설치
/// - 토큰은 유효한데 사용자가 삭제된 경우: 404로 즉시 실패 (조용히 무시하지 않음)
///
/// Runs once per request before any handler. Invalid tokens never reject the
/// request here; a valid token whose user no longer exists is a hard failure.
pub async fn token_filter(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, axum::Json<serde_json::Value>)> {
    let token = bearer_token(request.headers()).map(str::to_string);

    if let Some(token) = token {
        if app_state.auth_state.jwt_service.validate_access_token(&token) {
            // validate가 참이므로 클레임 추출 실패는 예외적 상황 (전파)
            let claims = app_state
                .auth_state
                .jwt_service
                .get_access_claims(&token)
                .map_err(|e: ApiError| -> (StatusCode, axum::Json<serde_json::Value>) { e.into() })?;

            let user_repo = UserRepository::new(app_state.db.pool().clone());
            let user = match user_repo.get_user_by_email(&claims.sub).await {
                Ok(Some(user)) => user,
                Ok(None) => {
                    // 토큰 발급 이후 계정이 삭제된 경우
                    return Err(ApiError::UserNotFoundByEmail { email: claims.sub }.into());
                }
                Err(e) => {
                    return Err(ApiError::DatabaseError(format!("Failed to fetch user: {}", e)).into());
                }
            };

            request.extensions_mut().insert(SecurityPrincipal::new(user));
        }
        // 유효하지 않은 토큰: 익명으로 계속 진행
    }

    Ok(next.run(request).await)
}

/// Authorization 헤더에서 Bearer 토큰 추출
/// "Bearer " 접두사(대소문자 구분, 공백 하나)를 정확히 벗겨냄
/// Extract the bearer token: exact, case-sensitive "Bearer " prefix
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

/// SecurityPrincipal을 Axum Extractor로 구현
/// 역할: NestJS의 @UseGuards(AuthGuard) 같은 것
///
/// 사용법:
/// ```rust,ignore
/// pub async fn add_task(
///     State(app_state): State<AppState>,
///     principal: SecurityPrincipal,  // <- 이렇게 사용!
/// ) -> Result<...> {
///     let email = principal.email();
///     // ...
/// }
/// ```
#[async_trait]
impl<S> FromRequestParts<S> for SecurityPrincipal
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // 필터가 설치해 둔 주체가 없으면 보호된 라우트 접근 거부
        parts
            .extensions
            .get::<SecurityPrincipal>()
            .cloned()
            .ok_or_else(|| ApiError::MissingToken.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::models::user::Role;
    use axum::http::HeaderValue;
    use chrono::Utc;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).expect("header value"));
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header_is_none() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(bearer_token(&headers_with("bearer abc")), None);
        assert_eq!(bearer_token(&headers_with("BEARER abc")), None);
    }

    #[test]
    fn test_prefix_requires_single_space() {
        // 공백 없는 형식은 거부
        assert_eq!(bearer_token(&headers_with("Bearerabc")), None);
        assert_eq!(bearer_token(&headers_with("Bearer")), None);
        // 접두사만 정확히 제거: 나머지는 그대로 (이중 공백은 토큰 검증에서 걸러짐)
        assert_eq!(bearer_token(&headers_with("Bearer  abc")), Some(" abc"));
    }

    #[test]
    fn test_other_scheme_rejected() {
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwdw==")), None);
    }

    #[test]
    fn test_principal_authority_is_role_name() {
        let principal = SecurityPrincipal::new(User {
            id: 3,
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            email: "user@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });

        assert_eq!(principal.authority(), "USER");
        assert_eq!(principal.email(), "user@example.com");
        assert_eq!(principal.user_id(), 3);
    }
}
