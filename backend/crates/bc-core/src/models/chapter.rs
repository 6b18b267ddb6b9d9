use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: Uuid,
    pub club_id: Uuid,
    pub title: String,
    /// Reading order within the club
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl Chapter {
    pub fn new(club_id: Uuid, title: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            club_id,
            title,
            position,
            created_at: Utc::now(),
        }
    }
}
