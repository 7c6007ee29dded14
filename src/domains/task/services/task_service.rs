use crate::shared::database::{CommentRepository, Database, TaskRepository, UserRepository};
use crate::domains::auth::models::user::User;
use crate::domains::comment::models::comment::Comment;
use crate::domains::task::models::{Priority, Status, Task, TaskFullResponse, TaskRequest, TaskResponse};
use crate::shared::errors::ApiError;
use crate::shared::middleware::auth::SecurityPrincipal;
use chrono::Utc;

// 작업 서비스
// 소유권 검사: 작성자/실행자와 요청 주체의 단순 동등 비교
// TaskService: task CRUD with ownership checks against the acting principal
#[derive(Clone)]
pub struct TaskService {
    db: Database,
}

impl TaskService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    // 작업 생성 (작성자 = 요청 주체)
    pub async fn add_task(
        &self,
        principal: &SecurityPrincipal,
        request: TaskRequest,
        status: Status,
        priority: Priority,
    ) -> Result<TaskResponse, ApiError> {
        let task_repo = TaskRepository::new(self.db.pool().clone());

        let task = task_repo
            .create(
                &request.heading,
                &request.description,
                Utc::now(),
                status,
                priority,
                principal.user_id(),
            )
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to create task: {}", e)))?;

        tracing::info!(task_id = task.id, author_id = principal.user_id(), "Task added");
        Ok(Self::task_response(task, principal.user()))
    }

    // 작업 제목/설명 수정 (작성자만)
    pub async fn update_task(
        &self,
        principal: &SecurityPrincipal,
        request: TaskRequest,
        id: u64,
    ) -> Result<TaskResponse, ApiError> {
        let task_repo = TaskRepository::new(self.db.pool().clone());
        let task = Self::find_task_by_id(&task_repo, id).await?;

        if task.author_id != principal.user_id() {
            return Err(ApiError::Forbidden);
        }

        let result = task_repo
            .update_content(id, &request.heading, &request.description)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to update task: {}", e)))?;

        tracing::info!(task_id = id, "Task updated");
        Ok(Self::task_response(result, principal.user()))
    }

    // 작업 상세 조회 (작성자만, 댓글 포함)
    pub async fn get_task(
        &self,
        principal: &SecurityPrincipal,
        id: u64,
    ) -> Result<TaskFullResponse, ApiError> {
        let task_repo = TaskRepository::new(self.db.pool().clone());
        let task = Self::find_task_by_id(&task_repo, id).await?;

        if task.author_id != principal.user_id() {
            return Err(ApiError::Forbidden);
        }

        let comment_repo = CommentRepository::new(self.db.pool().clone());
        let comments = comment_repo
            .find_by_task_id(id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch comments: {}", e)))?;

        Ok(Self::task_full_response(task, principal.user(), comments))
    }

    // 작업 삭제 (작성자만, 댓글 먼저 정리)
    pub async fn delete_task(
        &self,
        principal: &SecurityPrincipal,
        id: u64,
    ) -> Result<String, ApiError> {
        let task_repo = TaskRepository::new(self.db.pool().clone());
        let task = Self::find_task_by_id(&task_repo, id).await?;

        if task.author_id != principal.user_id() {
            return Err(ApiError::Forbidden);
        }

        let comment_repo = CommentRepository::new(self.db.pool().clone());
        comment_repo
            .delete_by_task_id(id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to delete comments: {}", e)))?;

        task_repo
            .delete(id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to delete task: {}", e)))?;

        tracing::info!(task_id = id, "Task deleted");
        Ok("Task deleted successfully".to_string())
    }

    // 작업 상태 변경 (실행자만)
    pub async fn update_status_task(
        &self,
        principal: &SecurityPrincipal,
        id: u64,
        status: Status,
    ) -> Result<TaskResponse, ApiError> {
        let task_repo = TaskRepository::new(self.db.pool().clone());
        let task = Self::find_task_by_id(&task_repo, id).await?;

        // 상태는 실행자에게만 허용됨
        if task.executor_id != Some(principal.user_id()) {
            return Err(ApiError::Forbidden);
        }

        let result = task_repo
            .update_status(id, status)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to update task status: {}", e)))?;

        tracing::info!(task_id = id, status = status.as_str(), "Task status updated");
        Ok(Self::task_response(result, principal.user()))
    }

    // 작업 우선순위 변경 (작성자만)
    pub async fn update_priority_task(
        &self,
        principal: &SecurityPrincipal,
        id: u64,
        priority: Priority,
    ) -> Result<TaskResponse, ApiError> {
        let task_repo = TaskRepository::new(self.db.pool().clone());
        let task = Self::find_task_by_id(&task_repo, id).await?;

        if task.author_id != principal.user_id() {
            return Err(ApiError::Forbidden);
        }

        let result = task_repo
            .update_priority(id, priority)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to update task priority: {}", e)))?;

        tracing::info!(task_id = id, priority = priority.as_str(), "Task priority updated");
        Ok(Self::task_response(result, principal.user()))
    }

    // 실행자 지정 (작성자만)
    pub async fn assign_performer_task(
        &self,
        principal: &SecurityPrincipal,
        id_task: u64,
        email: &str,
    ) -> Result<TaskResponse, ApiError> {
        let task_repo = TaskRepository::new(self.db.pool().clone());
        let task = Self::find_task_by_id(&task_repo, id_task).await?;

        if task.author_id != principal.user_id() {
            return Err(ApiError::Forbidden);
        }

        let user_repo = UserRepository::new(self.db.pool().clone());
        let executor = user_repo
            .get_user_by_email(email)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch executor: {}", e)))?
            .ok_or_else(|| ApiError::UserNotFoundByEmail { email: email.to_string() })?;

        let result = task_repo
            .update_executor(id_task, executor.id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to assign executor: {}", e)))?;

        tracing::info!(task_id = id_task, executor_id = executor.id, "Task executor assigned");
        Ok(Self::task_response(result, principal.user()))
    }

    // 작성자의 작업 목록 (페이지네이션, id 내림차순)
    pub async fn get_author_tasks(
        &self,
        id: u64,
        page: u32,
        size: u32,
    ) -> Result<Vec<TaskFullResponse>, ApiError> {
        let user_repo = UserRepository::new(self.db.pool().clone());
        let user = user_repo
            .get_user_by_id(id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(ApiError::UserByIdNotFound { id })?;

        let (limit, offset) = Self::page_bounds(page, size);
        let task_repo = TaskRepository::new(self.db.pool().clone());
        let tasks = task_repo
            .find_by_author_id(user.id, limit, offset)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch tasks by author: {}", e)))?;

        // 작성자 목록이므로 모든 작업의 작성자는 조회된 사용자 본인
        self.generating_task_list(tasks, Some(&user)).await
    }

    // 실행자의 작업 목록 (페이지네이션, id 내림차순)
    pub async fn get_executor_tasks(
        &self,
        id: u64,
        page: u32,
        size: u32,
    ) -> Result<Vec<TaskFullResponse>, ApiError> {
        let user_repo = UserRepository::new(self.db.pool().clone());
        let user = user_repo
            .get_user_by_id(id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(ApiError::UserByIdNotFound { id })?;

        let (limit, offset) = Self::page_bounds(page, size);
        let task_repo = TaskRepository::new(self.db.pool().clone());
        let tasks = task_repo
            .find_by_executor_id(user.id, limit, offset)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch tasks by executor: {}", e)))?;

        // 실행자 목록의 프로필은 각 작업의 작성자 기준
        self.generating_task_list(tasks, None).await
    }

    // 목록 응답 생성 (빈 페이지는 404)
    // author가 None이면 각 작업의 작성자를 개별 조회
    async fn generating_task_list(
        &self,
        tasks: Vec<Task>,
        author: Option<&User>,
    ) -> Result<Vec<TaskFullResponse>, ApiError> {
        if tasks.is_empty() {
            return Err(ApiError::TaskNotFound);
        }

        let user_repo = UserRepository::new(self.db.pool().clone());
        let comment_repo = CommentRepository::new(self.db.pool().clone());
        let mut responses = Vec::with_capacity(tasks.len());

        for task in tasks {
            let task_author = match author {
                Some(user) => user.clone(),
                None => user_repo
                    .get_user_by_id(task.author_id)
                    .await
                    .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch task author: {}", e)))?
                    .ok_or(ApiError::UserByIdNotFound { id: task.author_id })?,
            };

            let comments = comment_repo
                .find_by_task_id(task.id)
                .await
                .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch comments: {}", e)))?;

            responses.push(Self::task_full_response(task, &task_author, comments));
        }

        Ok(responses)
    }

    async fn find_task_by_id(task_repo: &TaskRepository, id: u64) -> Result<Task, ApiError> {
        task_repo
            .find_by_id(id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch task: {}", e)))?
            .ok_or(ApiError::TaskNotFound)
    }

    // 페이지 번호(1부터)를 LIMIT/OFFSET으로 변환
    fn page_bounds(page: u32, size: u32) -> (i64, i64) {
        let page = page.max(1);
        let size = size.max(1);
        (size as i64, ((page - 1) * size) as i64)
    }

    fn task_response(task: Task, user: &User) -> TaskResponse {
        TaskResponse {
            id: task.id,
            heading: task.heading,
            description: task.description,
            date_time: task.date_time,
            status: task.status,
            priority: task.priority,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
        }
    }

    fn task_full_response(task: Task, user: &User, comments: Vec<Comment>) -> TaskFullResponse {
        TaskFullResponse {
            id: task.id,
            heading: task.heading,
            description: task.description,
            date_time: task.date_time,
            status: task.status,
            priority: task.priority,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::models::user::Role;

    fn sample_user() -> User {
        User {
            id: 5,
            first_name: "Anna".to_string(),
            last_name: "Ivanova".to_string(),
            email: "anna@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_task() -> Task {
        Task {
            id: 11,
            heading: "Prepare the release".to_string(),
            description: "Collect the changelog".to_string(),
            date_time: Utc::now(),
            status: Status::InWaiting,
            priority: Priority::High,
            author_id: 5,
            executor_id: None,
        }
    }

    #[test]
    fn test_task_response_carries_author_profile() {
        let response = TaskService::task_response(sample_task(), &sample_user());
        assert_eq!(response.id, 11);
        assert_eq!(response.status, Status::InWaiting);
        assert_eq!(response.email, "anna@example.com");
        assert_eq!(response.role, "USER");
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(TaskService::page_bounds(1, 10), (10, 0));
        assert_eq!(TaskService::page_bounds(3, 10), (10, 20));
        // 0 페이지는 1 페이지로 취급
        assert_eq!(TaskService::page_bounds(0, 10), (10, 0));
        assert_eq!(TaskService::page_bounds(2, 0), (1, 1));
    }
}
