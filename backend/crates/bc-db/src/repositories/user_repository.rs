use crate::error::map_unique_violation;
use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use bc_auth::{AuthError, CredentialStore, Result as AuthErrorResult, StoredCredentials};
use bc_core::{ErrorLocation, User};

use std::panic::Location;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, username, avatar, created_at";

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user with its password hash. A taken email is `Conflict`.
    pub async fn create(&self, user: &User, password_hash: &str) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (id, email, password_hash, username, avatar, created_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(password_hash)
        .bind(&user.username)
        .bind(&user.avatar)
        .bind(user.created_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "email is already registered"))?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE email = ?",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn find_password_hash(
        &self,
        email: &str,
    ) -> DbErrorResult<Option<StoredCredentials>> {
        let row = sqlx::query("SELECT id, password_hash FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| -> DbErrorResult<StoredCredentials> {
            Ok(StoredCredentials {
                user_id: parse_uuid(&r.try_get::<String, _>("id")?, "users.id")?,
                password_hash: r.try_get("password_hash")?,
            })
        })
        .transpose()
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_credentials(&self, email: &str) -> AuthErrorResult<Option<StoredCredentials>> {
        self.find_password_hash(email)
            .await
            .map_err(|e: DbError| AuthError::CredentialStore {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Map a row selected with `USER_COLUMNS`
pub(crate) fn user_from_row(r: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: parse_uuid(&r.try_get::<String, _>("id")?, "users.id")?,
        email: r.try_get("email")?,
        username: r.try_get("username")?,
        avatar: r.try_get("avatar")?,
        created_at: parse_timestamp(r.try_get("created_at")?, "users.created_at")?,
    })
}

/// Map user columns joined onto another row and aliased with a `user_` prefix
pub(crate) fn user_from_prefixed_row(r: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: parse_uuid(&r.try_get::<String, _>("user_id")?, "users.id")?,
        email: r.try_get("user_email")?,
        username: r.try_get("user_username")?,
        avatar: r.try_get("user_avatar")?,
        created_at: parse_timestamp(r.try_get("user_created_at")?, "users.created_at")?,
    })
}
