use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use crate::domains::task::models::task::{Priority, Status, Task};

pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 작업 생성
    // Create task (executor starts empty)
    pub async fn create(
        &self,
        heading: &str,
        description: &str,
        date_time: DateTime<Utc>,
        status: Status,
        priority: Priority,
        author_id: u64,
    ) -> Result<Task> {
        let row = sqlx::query(
            r#"
            INSERT INTO tasks (heading, description, date_time, status, priority, author_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, heading, description, date_time, status, priority, author_id, executor_id
            "#,
        )
        .bind(heading)
        .bind(description)
        .bind(date_time)
        .bind(status.as_str())
        .bind(priority.as_str())
        .bind(author_id as i64)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create task")?;

        Self::map_task(&row)
    }

    // ID로 작업 조회
    // Get task by ID
    pub async fn find_by_id(&self, id: u64) -> Result<Option<Task>> {
        let row = sqlx::query(
            r#"
            SELECT id, heading, description, date_time, status, priority, author_id, executor_id
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch task by id")?;

        match row {
            Some(r) => Ok(Some(Self::map_task(&r)?)),
            None => Ok(None),
        }
    }

    // 제목/설명 수정
    // Update heading and description
    pub async fn update_content(&self, id: u64, heading: &str, description: &str) -> Result<Task> {
        let row = sqlx::query(
            r#"
            UPDATE tasks
            SET heading = $2, description = $3
            WHERE id = $1
            RETURNING id, heading, description, date_time, status, priority, author_id, executor_id
            "#,
        )
        .bind(id as i64)
        .bind(heading)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .context("Failed to update task")?;

        Self::map_task(&row)
    }

    // 상태 변경
    // Update status
    pub async fn update_status(&self, id: u64, status: Status) -> Result<Task> {
        let row = sqlx::query(
            r#"
            UPDATE tasks
            SET status = $2
            WHERE id = $1
            RETURNING id, heading, description, date_time, status, priority, author_id, executor_id
            "#,
        )
        .bind(id as i64)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .context("Failed to update task status")?;

        Self::map_task(&row)
    }

    // 우선순위 변경
    // Update priority
    pub async fn update_priority(&self, id: u64, priority: Priority) -> Result<Task> {
        let row = sqlx::query(
            r#"
            UPDATE tasks
            SET priority = $2
            WHERE id = $1
            RETURNING id, heading, description, date_time, status, priority, author_id, executor_id
            "#,
        )
        .bind(id as i64)
        .bind(priority.as_str())
        .fetch_one(&self.pool)
        .await
        .context("Failed to update task priority")?;

        Self::map_task(&row)
    }

    // 실행자 지정
    // Assign executor
    pub async fn update_executor(&self, id: u64, executor_id: u64) -> Result<Task> {
        let row = sqlx::query(
            r#"
            UPDATE tasks
            SET executor_id = $2
            WHERE id = $1
            RETURNING id, heading, description, date_time, status, priority, author_id, executor_id
            "#,
        )
        .bind(id as i64)
        .bind(executor_id as i64)
        .fetch_one(&self.pool)
        .await
        .context("Failed to assign task executor")?;

        Self::map_task(&row)
    }

    // 작업 삭제
    // Delete task
    pub async fn delete(&self, id: u64) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id as i64)
        .execute(&self.pool)
        .await
        .context("Failed to delete task")?;

        Ok(())
    }

    // 작성자의 작업 목록 (id 내림차순, 페이지네이션)
    // Tasks by author (id descending, paginated)
    pub async fn find_by_author_id(&self, author_id: u64, limit: i64, offset: i64) -> Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"
            SELECT id, heading, description, date_time, status, priority, author_id, executor_id
            FROM tasks
            WHERE author_id = $1
            ORDER BY id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author_id as i64)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch tasks by author")?;

        rows.iter().map(Self::map_task).collect()
    }

    // 실행자의 작업 목록 (id 내림차순, 페이지네이션)
    // Tasks by executor (id descending, paginated)
    pub async fn find_by_executor_id(&self, executor_id: u64, limit: i64, offset: i64) -> Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"
            SELECT id, heading, description, date_time, status, priority, author_id, executor_id
            FROM tasks
            WHERE executor_id = $1
            ORDER BY id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(executor_id as i64)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch tasks by executor")?;

        rows.iter().map(Self::map_task).collect()
    }

    // Row → Task 변환 (status/priority 문자열 파싱 포함)
    fn map_task(row: &PgRow) -> Result<Task> {
        let status_value: String = row.get("status");
        let status = Status::from_str(&status_value)
            .with_context(|| format!("Unknown status value in tasks table: {}", status_value))?;
        let priority_value: String = row.get("priority");
        let priority = Priority::from_str(&priority_value)
            .with_context(|| format!("Unknown priority value in tasks table: {}", priority_value))?;

        Ok(Task {
            id: row.get::<i64, _>("id") as u64,
            heading: row.get("heading"),
            description: row.get("description"),
            date_time: row.get("date_time"),
            status,
            priority,
            author_id: row.get::<i64, _>("author_id") as u64,
            executor_id: row.get::<Option<i64>, _>("executor_id").map(|id| id as u64),
        })
    }
}
