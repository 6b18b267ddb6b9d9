use bc_core::Member;

use serde::Serialize;

/// Member DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct MemberDto {
    pub id: String,
    pub user_id: String,
    pub club_id: String,
    pub created_at: i64,
}

impl From<Member> for MemberDto {
    fn from(m: Member) -> Self {
        Self {
            id: m.id.to_string(),
            user_id: m.user_id.to_string(),
            club_id: m.club_id.to_string(),
            created_at: m.created_at.timestamp(),
        }
    }
}
