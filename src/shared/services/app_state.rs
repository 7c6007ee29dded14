use crate::shared::database::Database;
use crate::domains::auth::services::state::AuthState;
use crate::domains::auth::services::JwtService;
use crate::domains::comment::services::state::CommentState;
use crate::domains::task::services::state::TaskState;
use anyhow::Result;

// 개발용 기본 비밀키 (base64, 운영 환경에서는 반드시 환경변수로 교체)
// Development fallbacks; override via environment in production
const DEFAULT_SECRET_ACCESS: &str = "dGFzay1hcGktYWNjZXNzLXNlY3JldC1jaGFuZ2UtaW4tcHJvZHVjdGlvbg==";
const DEFAULT_SECRET_REFRESH: &str = "dGFzay1hcGktcmVmcmVzaC1zZWNyZXQtY2hhbmdlLWluLXByb2R1Y3Rpb24=";

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 역할: NestJS의 Module에서 모든 Service를 주입하는 것과 유사
#[derive(Clone)]
pub struct AppState {
    /// 데이터베이스 연결 (공유)
    /// Database connection (shared)
    pub db: Database,
    pub auth_state: AuthState,
    pub task_state: TaskState,
    pub comment_state: CommentState,
}

impl AppState {
    /// Create AppState with database
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(db: Database) -> Result<Self> {
        // 1. 공유 서비스 생성 (JWT)
        // access/refresh 서명 비밀키는 서로 독립적인 base64 문자열
        let secret_access = std::env::var("JWT_SECRET_ACCESS")
            .unwrap_or_else(|_| DEFAULT_SECRET_ACCESS.to_string());
        let secret_refresh = std::env::var("JWT_SECRET_REFRESH")
            .unwrap_or_else(|_| DEFAULT_SECRET_REFRESH.to_string());
        let issuer = std::env::var("JWT_ISSUER")
            .unwrap_or_else(|_| "task-api-server".to_string());

        let jwt_service = JwtService::new(&secret_access, &secret_refresh, issuer)?;

        // 2. 각 도메인 State 생성
        let auth_state = AuthState::new(db.clone(), jwt_service);
        let task_state = TaskState::new(db.clone());
        let comment_state = CommentState::new(db.clone());

        // 3. AppState 조합
        Ok(Self {
            db,
            auth_state,
            task_state,
            comment_state,
        })
    }
}
