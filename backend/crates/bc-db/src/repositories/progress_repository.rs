use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use bc_core::Progress;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProgressRepository {
    pool: SqlitePool,
}

impl ProgressRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert unless a row for (user, chapter) exists. The original
    /// `created_at` is kept. Returns true when a row was inserted.
    pub async fn mark_complete(&self, progress: &Progress) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              INSERT INTO progress (id, chapter_id, user_id, created_at)
              VALUES (?, ?, ?, ?)
              ON CONFLICT(user_id, chapter_id) DO NOTHING
              "#,
        )
        .bind(progress.id.to_string())
        .bind(progress.chapter_id.to_string())
        .bind(progress.user_id.to_string())
        .bind(progress.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns true when a row was deleted
    pub async fn unmark(&self, chapter_id: Uuid, user_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM progress WHERE chapter_id = ? AND user_id = ?")
            .bind(chapter_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_for_chapter(&self, chapter_id: Uuid) -> DbErrorResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM progress WHERE chapter_id = ?")
                .bind(chapter_id.to_string())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    pub async fn list_for_chapter(&self, chapter_id: Uuid) -> DbErrorResult<Vec<Progress>> {
        let rows = sqlx::query(
            r#"
              SELECT id, chapter_id, user_id, created_at
              FROM progress
              WHERE chapter_id = ?
              "#,
        )
        .bind(chapter_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(progress_from_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Every progress row across the club's chapters
    pub async fn list_for_club(&self, club_id: Uuid) -> DbErrorResult<Vec<Progress>> {
        let rows = sqlx::query(
            r#"
              SELECT p.id, p.chapter_id, p.user_id, p.created_at
              FROM progress p
              JOIN chapters c ON c.id = p.chapter_id
              WHERE c.club_id = ?
              "#,
        )
        .bind(club_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(progress_from_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}

fn progress_from_row(r: &SqliteRow) -> DbErrorResult<Progress> {
    Ok(Progress {
        id: parse_uuid(&r.try_get::<String, _>("id")?, "progress.id")?,
        chapter_id: parse_uuid(&r.try_get::<String, _>("chapter_id")?, "progress.chapter_id")?,
        user_id: parse_uuid(&r.try_get::<String, _>("user_id")?, "progress.user_id")?,
        created_at: parse_timestamp(r.try_get("created_at")?, "progress.created_at")?,
    })
}
