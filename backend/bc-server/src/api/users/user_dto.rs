use bc_core::User;

use serde::Serialize;

/// User DTO for JSON serialization
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub username: String,
    pub avatar: Option<String>,
    pub created_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email,
            username: u.username,
            avatar: u.avatar,
            created_at: u.created_at.timestamp(),
        }
    }
}
