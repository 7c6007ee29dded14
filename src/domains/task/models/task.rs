use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

use crate::domains::comment::models::comment::Comment;

/// 작업 상태
/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    InWaiting,
    InProgress,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InWaiting => "IN_WAITING",
            Status::InProgress => "IN_PROGRESS",
            Status::Completed => "COMPLETED",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "IN_WAITING" => Some(Status::InWaiting),
            "IN_PROGRESS" => Some(Status::InProgress),
            "COMPLETED" => Some(Status::Completed),
            _ => None,
        }
    }
}

/// 작업 우선순위
/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Average,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Average => "AVERAGE",
            Priority::Low => "LOW",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "HIGH" => Some(Priority::High),
            "AVERAGE" => Some(Priority::Average),
            "LOW" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// 작업 모델 (DB 저장용)
/// Task model (database row)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub heading: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
    pub status: Status,
    pub priority: Priority,
    /// 작성자 (소유권 검사의 기준)
    /// Author (ownership checks compare against this user)
    pub author_id: u64,
    /// 실행자 (지정 전에는 비어 있음)
    /// Executor (empty until assigned)
    pub executor_id: Option<u64>,
}

// 작업 생성/수정 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = TaskRequest)]
pub struct TaskRequest {
    /// 작업 제목
    /// Task heading
    #[schema(example = "Prepare the release")]
    pub heading: String,

    /// 작업 설명
    /// Task description
    #[schema(example = "Collect the changelog and tag the build")]
    pub description: String,
}

// 작업 응답 모델 (작업 + 작성자 프로필)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = TaskResponse)]
pub struct TaskResponse {
    pub id: u64,
    pub heading: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
    pub status: Status,
    pub priority: Priority,

    /// 작성자 이름
    /// Author first name
    pub first_name: String,

    /// 작성자 성
    /// Author last name
    pub last_name: String,

    /// 작성자 이메일
    /// Author email
    pub email: String,

    /// 작성자 역할
    /// Author role
    #[schema(example = "USER")]
    pub role: String,
}

// 작업 상세 응답 모델 (댓글 포함)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = TaskFullResponse)]
pub struct TaskFullResponse {
    pub id: u64,
    pub heading: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
    pub status: Status,
    pub priority: Priority,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[schema(example = "USER")]
    pub role: String,

    /// 작업에 달린 댓글들
    /// Comments attached to the task
    pub comments: Vec<Comment>,
}

/// 작업 목록 페이지 요청 (페이지 번호는 1부터)
/// Page query for task listings (page numbers start at 1)
#[derive(Debug, Deserialize, ToSchema)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names_round_trip() {
        for status in [Status::InWaiting, Status::InProgress, Status::Completed] {
            assert_eq!(Status::from_str(status.as_str()), Some(status));
        }
        assert_eq!(Status::from_str("DONE"), None);
    }

    #[test]
    fn test_priority_names_round_trip() {
        for priority in [Priority::High, Priority::Average, Priority::Low] {
            assert_eq!(Priority::from_str(priority.as_str()), Some(priority));
        }
        assert_eq!(Priority::from_str("URGENT"), None);
    }

    #[test]
    fn test_status_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&Status::InWaiting).expect("serialize");
        assert_eq!(json, "\"IN_WAITING\"");
        let parsed: Priority = serde_json::from_str("\"AVERAGE\"").expect("deserialize");
        assert_eq!(parsed, Priority::Average);
    }
}
