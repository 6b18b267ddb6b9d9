use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use bc_core::Club;

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct ClubRepository {
    pool: SqlitePool,
}

impl ClubRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, club: &Club) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO clubs (id, owner_id, title, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(club.id.to_string())
        .bind(club.owner_id.to_string())
        .bind(&club.title)
        .bind(club.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Club>> {
        let row = sqlx::query("SELECT id, owner_id, title, created_at FROM clubs WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| -> DbErrorResult<Club> {
            Ok(Club {
                id: parse_uuid(&r.try_get::<String, _>("id")?, "clubs.id")?,
                owner_id: parse_uuid(&r.try_get::<String, _>("owner_id")?, "clubs.owner_id")?,
                title: r.try_get("title")?,
                created_at: parse_timestamp(r.try_get("created_at")?, "clubs.created_at")?,
            })
        })
        .transpose()
    }
}
