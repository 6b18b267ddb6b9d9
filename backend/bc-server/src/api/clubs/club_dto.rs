use bc_core::Club;

use serde::Serialize;

/// Club DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ClubDto {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub created_at: i64,
}

impl From<Club> for ClubDto {
    fn from(c: Club) -> Self {
        Self {
            id: c.id.to_string(),
            owner_id: c.owner_id.to_string(),
            title: c.title,
            created_at: c.created_at.timestamp(),
        }
    }
}
