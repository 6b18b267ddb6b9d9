use crate::{ClubMember, Progress, User};

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberChapterCount {
    pub user: User,
    pub chapter_count: i64,
}

/// Count completed chapters per active member.
///
/// `progress` is every progress row across the club's chapters. Rows for
/// users that are not in `members` are ignored. Output keeps the order of
/// `members`.
pub fn summarize_member_progress(
    members: &[ClubMember],
    progress: &[Progress],
) -> Vec<MemberChapterCount> {
    let mut chapters_by_user: HashMap<Uuid, HashSet<Uuid>> = HashMap::new();
    for row in progress {
        chapters_by_user
            .entry(row.user_id)
            .or_default()
            .insert(row.chapter_id);
    }

    members
        .iter()
        .map(|m| MemberChapterCount {
            user: m.user.clone(),
            chapter_count: chapters_by_user
                .get(&m.user.id)
                .map_or(0, |chapters| chapters.len() as i64),
        })
        .collect()
}
