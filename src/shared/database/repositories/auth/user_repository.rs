use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use chrono::Utc;
use crate::domains::auth::models::user::{Role, User};

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 사용자 생성 (회원가입)
    // Create user (registration)
    pub async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, email, password_hash, role, created_at, updated_at
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(password_hash)
        .bind(role.as_str())
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create user")?;

        Self::map_user(&row)
    }

    // 이메일 중복 확인 (회원가입용)
    // Check whether the email is already registered
    pub async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let row = sqlx::query(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1) AS email_exists
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check email existence")?;

        Ok(row.get("email_exists"))
    }

    // 이메일로 사용자 조회 (로그인/필터용)
    // Get user by email (for login and the auth filter)
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by email")?;

        match row {
            Some(r) => Ok(Some(Self::map_user(&r)?)),
            None => Ok(None),
        }
    }

    // ID로 사용자 조회
    // Get user by ID
    pub async fn get_user_by_id(&self, id: u64) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by id")?;

        match row {
            Some(r) => Ok(Some(Self::map_user(&r)?)),
            None => Ok(None),
        }
    }

    // Row → User 변환 (role 문자열 파싱 포함)
    fn map_user(row: &PgRow) -> Result<User> {
        let role_value: String = row.get("role");
        let role = Role::from_str(&role_value)
            .with_context(|| format!("Unknown role value in users table: {}", role_value))?;

        Ok(User {
            id: row.get::<i64, _>("id") as u64,  // DB는 BIGINT = i64
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            role,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}
