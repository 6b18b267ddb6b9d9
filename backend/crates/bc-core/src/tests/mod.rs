mod models;

use crate::{ClubMember, Member, Progress, User};

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub(crate) fn club_member(club_id: Uuid, username: &str) -> ClubMember {
    let user = User::new(format!("{}@example.com", username), username.to_string());
    ClubMember {
        member: Member::new(club_id, user.id),
        user,
    }
}

pub(crate) fn progress_at(chapter_id: Uuid, user_id: Uuid, created_at: DateTime<Utc>) -> Progress {
    Progress {
        created_at,
        ..Progress::new(chapter_id, user_id)
    }
}
