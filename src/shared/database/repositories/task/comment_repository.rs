use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use crate::domains::comment::models::comment::Comment;

pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 댓글 생성
    // Create comment
    pub async fn create(
        &self,
        text: &str,
        date_time: DateTime<Utc>,
        task_id: u64,
        user_id: u64,
    ) -> Result<Comment> {
        let row = sqlx::query(
            r#"
            INSERT INTO comments (text, date_time, task_id, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, text, date_time, task_id, user_id
            "#,
        )
        .bind(text)
        .bind(date_time)
        .bind(task_id as i64)
        .bind(user_id as i64)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create comment")?;

        Ok(Self::map_comment(&row))
    }

    // 작업에 달린 댓글 목록 (오래된 것부터)
    // Comments for a task (oldest first)
    pub async fn find_by_task_id(&self, task_id: u64) -> Result<Vec<Comment>> {
        let rows = sqlx::query(
            r#"
            SELECT id, text, date_time, task_id, user_id
            FROM comments
            WHERE task_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(task_id as i64)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch comments for task")?;

        Ok(rows.iter().map(Self::map_comment).collect())
    }

    // 작업 삭제 시 댓글 정리
    // Remove a task's comments before the task itself is deleted
    pub async fn delete_by_task_id(&self, task_id: u64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE task_id = $1
            "#,
        )
        .bind(task_id as i64)
        .execute(&self.pool)
        .await
        .context("Failed to delete comments for task")?;

        Ok(result.rows_affected())
    }

    fn map_comment(row: &PgRow) -> Comment {
        Comment {
            id: row.get::<i64, _>("id") as u64,
            text: row.get("text"),
            date_time: row.get("date_time"),
            task_id: row.get::<i64, _>("task_id") as u64,
            user_id: row.get::<i64, _>("user_id") as u64,
        }
    }
}
