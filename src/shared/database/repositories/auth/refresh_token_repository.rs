use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use crate::domains::auth::models::refresh_token::{RefreshTokenRecord, RefreshTokenUpsert};

/// Refresh Token Repository
/// 사용자당 한 행만 유지: 로그인마다 기존 행을 덮어씀 (rotation)
/// At most one row per user; every login overwrites it in place
pub struct RefreshTokenRepository {
    pool: PgPool,
}

impl RefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Refresh Token 저장 또는 교체
    /// UNIQUE(user_id) 충돌 시 기존 행을 그 자리에서 갱신 (두 번째 행은 생기지 않음)
    /// 같은 사용자에 대한 동시 로그인은 이 한 행 위에서 직렬화됨 (last writer wins)
    /// Insert or overwrite the single refresh token row for the user
    pub async fn upsert(&self, data: RefreshTokenUpsert) -> Result<RefreshTokenRecord> {
        let row = sqlx::query(
            r#"
            INSERT INTO refresh_tokens (user_id, refresh_token, issued_at, expires_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (user_id) DO UPDATE
            SET refresh_token = EXCLUDED.refresh_token,
                issued_at = EXCLUDED.issued_at,
                expires_at = EXCLUDED.expires_at,
                updated_at = NOW()
            RETURNING id, user_id, refresh_token, issued_at, expires_at, updated_at
            "#,
        )
        .bind(data.user_id as i64)  // u64 -> i64 변환 (DB는 BIGINT = i64)
        .bind(&data.refresh_token)
        .bind(data.issued_at)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .context("Failed to upsert refresh token")?;

        Ok(Self::map_record(&row))
    }

    /// 사용자의 현재 저장된 Refresh Token 조회 (재발급 시 비교용)
    /// Find the currently stored refresh token for the user
    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<RefreshTokenRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, refresh_token, issued_at, expires_at, updated_at
            FROM refresh_tokens
            WHERE user_id = $1
            "#,
        )
        .bind(user_id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find refresh token")?;

        Ok(row.map(|r| Self::map_record(&r)))
    }

    fn map_record(row: &PgRow) -> RefreshTokenRecord {
        RefreshTokenRecord {
            id: row.get("id"),
            user_id: row.get("user_id"),
            refresh_token: row.get("refresh_token"),
            issued_at: row.get("issued_at"),
            expires_at: row.get("expires_at"),
            updated_at: row.get("updated_at"),
        }
    }
}
