use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use bc_core::Invite;

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct InviteRepository {
    pool: SqlitePool,
}

impl InviteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, invite: &Invite) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO invites (id, club_id, user_id, created_by, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(invite.id.to_string())
        .bind(invite.club_id.to_string())
        .bind(invite.user_id.to_string())
        .bind(invite.created_by.to_string())
        .bind(invite.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_in_club(&self, id: Uuid, club_id: Uuid) -> DbErrorResult<Option<Invite>> {
        let row = sqlx::query(
            r#"
              SELECT id, club_id, user_id, created_by, created_at
              FROM invites
              WHERE id = ? AND club_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(club_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<Invite> {
            Ok(Invite {
                id: parse_uuid(&r.try_get::<String, _>("id")?, "invites.id")?,
                club_id: parse_uuid(&r.try_get::<String, _>("club_id")?, "invites.club_id")?,
                user_id: parse_uuid(&r.try_get::<String, _>("user_id")?, "invites.user_id")?,
                created_by: parse_uuid(
                    &r.try_get::<String, _>("created_by")?,
                    "invites.created_by",
                )?,
                created_at: parse_timestamp(r.try_get("created_at")?, "invites.created_at")?,
            })
        })
        .transpose()
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM invites WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
