use crate::{ClubMember, Progress, User};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressMark {
    pub created_at: DateTime<Utc>,
}

/// One row of a chapter checklist. `progress` is `None` when the member has
/// not completed the chapter yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberChapterCompletion {
    pub user: User,
    pub progress: Option<ProgressMark>,
}

/// Attach each member's progress row for a single chapter.
///
/// Every member appears exactly once, in the order given.
pub fn chapter_checklist(
    members: &[ClubMember],
    chapter_id: Uuid,
    progress: &[Progress],
) -> Vec<MemberChapterCompletion> {
    let completed: HashMap<Uuid, DateTime<Utc>> = progress
        .iter()
        .filter(|p| p.chapter_id == chapter_id)
        .map(|p| (p.user_id, p.created_at))
        .collect();

    members
        .iter()
        .map(|m| MemberChapterCompletion {
            user: m.user.clone(),
            progress: completed
                .get(&m.user.id)
                .map(|created_at| ProgressMark {
                    created_at: *created_at,
                }),
        })
        .collect()
}
