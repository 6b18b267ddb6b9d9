use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Relates a user to a club. Rows are never deleted, only flagged `removed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub user_id: Uuid,
    pub club_id: Uuid,
    pub removed: bool,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn new(club_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            club_id,
            removed: false,
            created_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.removed
    }
}
