use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Existence of a row means the user has completed the chapter.
/// `created_at` is the completion time and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub id: Uuid,
    pub chapter_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Progress {
    pub fn new(chapter_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            chapter_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
