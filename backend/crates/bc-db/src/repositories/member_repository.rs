use crate::Result as DbErrorResult;
use crate::error::map_unique_violation;
use crate::repositories::user_repository::user_from_prefixed_row;
use crate::repositories::{parse_timestamp, parse_uuid};

use bc_core::{ClubMember, Member};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct MemberRepository {
    pool: SqlitePool,
}

impl MemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// A second active row for the same (user, club) is `Conflict`
    pub async fn create(&self, member: &Member) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO members (id, user_id, club_id, removed, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(member.id.to_string())
        .bind(member.user_id.to_string())
        .bind(member.club_id.to_string())
        .bind(member.removed)
        .bind(member.created_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "user is already an active member of this club"))?;

        Ok(())
    }

    pub async fn find_active(&self, user_id: Uuid, club_id: Uuid) -> DbErrorResult<Option<Member>> {
        let row = sqlx::query(
            r#"
              SELECT id, user_id, club_id, removed, created_at
              FROM members
              WHERE user_id = ? AND club_id = ? AND removed = 0
              "#,
        )
        .bind(user_id.to_string())
        .bind(club_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(member_from_row).transpose()
    }

    /// Any member row of the club, removed or not
    pub async fn find_in_club(&self, id: Uuid, club_id: Uuid) -> DbErrorResult<Option<Member>> {
        let row = sqlx::query(
            r#"
              SELECT id, user_id, club_id, removed, created_at
              FROM members
              WHERE id = ? AND club_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(club_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(member_from_row).transpose()
    }

    /// Active members with their users, ordered by join time then id
    pub async fn list_active_with_users(&self, club_id: Uuid) -> DbErrorResult<Vec<ClubMember>> {
        let rows = sqlx::query(
            r#"
              SELECT m.id, m.user_id, m.club_id, m.removed, m.created_at,
                     u.email AS user_email, u.username AS user_username,
                     u.avatar AS user_avatar, u.created_at AS user_created_at
              FROM members m
              JOIN users u ON u.id = m.user_id
              WHERE m.club_id = ? AND m.removed = 0
              ORDER BY m.created_at ASC, m.id ASC
              "#,
        )
        .bind(club_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| -> DbErrorResult<ClubMember> {
                Ok(ClubMember {
                    member: member_from_row(r)?,
                    user: user_from_prefixed_row(r)?,
                })
            })
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn count_active(&self, club_id: Uuid) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM members WHERE club_id = ? AND removed = 0",
        )
        .bind(club_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Flag the row removed. Returns false when it was already removed.
    pub async fn soft_delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE members SET removed = 1 WHERE id = ? AND removed = 0")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn member_from_row(r: &SqliteRow) -> DbErrorResult<Member> {
    Ok(Member {
        id: parse_uuid(&r.try_get::<String, _>("id")?, "members.id")?,
        user_id: parse_uuid(&r.try_get::<String, _>("user_id")?, "members.user_id")?,
        club_id: parse_uuid(&r.try_get::<String, _>("club_id")?, "members.club_id")?,
        removed: r.try_get("removed")?,
        created_at: parse_timestamp(r.try_get("created_at")?, "members.created_at")?,
    })
}
