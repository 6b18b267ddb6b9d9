use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered reader. The password hash is kept out of this type and only
/// travels through the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            avatar: None,
            created_at: Utc::now(),
        }
    }
}
