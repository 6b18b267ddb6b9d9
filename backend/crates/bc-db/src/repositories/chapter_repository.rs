use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use bc_core::Chapter;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct ChapterRepository {
    pool: SqlitePool,
}

impl ChapterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, chapter: &Chapter) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO chapters (id, club_id, title, position, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(chapter.id.to_string())
        .bind(chapter.club_id.to_string())
        .bind(&chapter.title)
        .bind(chapter.position)
        .bind(chapter.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// `None` when the chapter is missing or belongs to another club
    pub async fn find_in_club(&self, id: Uuid, club_id: Uuid) -> DbErrorResult<Option<Chapter>> {
        let row = sqlx::query(
            r#"
              SELECT id, club_id, title, position, created_at
              FROM chapters
              WHERE id = ? AND club_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(club_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(chapter_from_row).transpose()
    }

    pub async fn list_for_club(&self, club_id: Uuid) -> DbErrorResult<Vec<Chapter>> {
        let rows = sqlx::query(
            r#"
              SELECT id, club_id, title, position, created_at
              FROM chapters
              WHERE club_id = ?
              ORDER BY position ASC
              "#,
        )
        .bind(club_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(chapter_from_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}

fn chapter_from_row(r: &SqliteRow) -> DbErrorResult<Chapter> {
    Ok(Chapter {
        id: parse_uuid(&r.try_get::<String, _>("id")?, "chapters.id")?,
        club_id: parse_uuid(&r.try_get::<String, _>("club_id")?, "chapters.club_id")?,
        title: r.try_get("title")?,
        position: r.try_get("position")?,
        created_at: parse_timestamp(r.try_get("created_at")?, "chapters.created_at")?,
    })
}
