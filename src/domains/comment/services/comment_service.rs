use crate::shared::database::{CommentRepository, Database, TaskRepository};
use crate::domains::comment::models::{CommentRequest, CommentResponse};
use crate::shared::errors::ApiError;
use crate::shared::middleware::auth::SecurityPrincipal;
use chrono::Utc;

// 댓글 서비스
// CommentService: comments on published tasks
#[derive(Clone)]
pub struct CommentService {
    db: Database,
}

impl CommentService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    // 댓글 작성
    // 존재하는 작업에만 댓글을 달 수 있음
    pub async fn add_comment(
        &self,
        principal: &SecurityPrincipal,
        id_task: u64,
        request: CommentRequest,
    ) -> Result<CommentResponse, ApiError> {
        let task_repo = TaskRepository::new(self.db.pool().clone());
        let task = task_repo
            .find_by_id(id_task)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch task: {}", e)))?
            .ok_or(ApiError::TaskNotFound)?;

        let comment_repo = CommentRepository::new(self.db.pool().clone());
        let comment = comment_repo
            .create(&request.text, Utc::now(), task.id, principal.user_id())
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to create comment: {}", e)))?;

        tracing::info!(comment_id = comment.id, task_id = task.id, "Comment added");

        let user = principal.user();
        Ok(CommentResponse {
            id: comment.id,
            text: comment.text,
            date_time: comment.date_time,
            heading_task: task.heading,
            description_task: task.description,
            status_task: task.status.as_str().to_string(),
            priority_task: task.priority.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
        })
    }
}
