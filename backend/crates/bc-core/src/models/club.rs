//! Club entity - a reading group owned by exactly one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Club {
    pub fn new(title: String, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title,
            created_at: Utc::now(),
        }
    }

    /// Gate for owner-only mutations
    pub fn is_owner(&self, subject_id: Uuid) -> bool {
        self.owner_id == subject_id
    }
}
