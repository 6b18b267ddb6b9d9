use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pending invitation of `user_id` into a club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
    pub id: Uuid,
    pub club_id: Uuid,
    pub user_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Invite {
    pub fn new(club_id: Uuid, user_id: Uuid, created_by: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            club_id,
            user_id,
            created_by,
            created_at: Utc::now(),
        }
    }
}
