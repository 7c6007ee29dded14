use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 댓글 모델 (DB 저장용, 작업 상세 응답에도 그대로 포함)
/// Comment model (database row, embedded as-is in the full task response)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub date_time: DateTime<Utc>,
    pub task_id: u64,
    pub user_id: u64,
}

// 댓글 작성 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CommentRequest)]
pub struct CommentRequest {
    /// 댓글 내용
    /// Comment text
    #[schema(example = "Looks good, shipping it")]
    pub text: String,
}

// 댓글 작성 응답 모델 (댓글 + 작업 요약 + 작성자 프로필)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = CommentResponse)]
pub struct CommentResponse {
    pub id: u64,
    pub text: String,
    pub date_time: DateTime<Utc>,

    /// 댓글이 달린 작업 제목
    /// Heading of the commented task
    pub heading_task: String,

    /// 댓글이 달린 작업 설명
    /// Description of the commented task
    pub description_task: String,

    /// 작업 상태 이름
    /// Task status name
    #[schema(example = "IN_WAITING")]
    pub status_task: String,

    /// 작업 우선순위 이름
    /// Task priority name
    #[schema(example = "HIGH")]
    pub priority_task: String,

    /// 댓글 작성자 이름
    /// Comment author first name
    pub first_name: String,

    /// 댓글 작성자 성
    /// Comment author last name
    pub last_name: String,

    /// 댓글 작성자 이메일
    /// Comment author email
    pub email: String,

    /// 댓글 작성자 역할
    /// Comment author role
    #[schema(example = "USER")]
    pub role: String,
}
