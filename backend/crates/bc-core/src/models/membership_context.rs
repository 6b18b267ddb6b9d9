use crate::{Club, Member};

use serde::Serialize;
use uuid::Uuid;

/// Club and member context for a subject with an active membership.
/// Only constructed after the membership has been checked.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipContext {
    pub club: Club,
    pub member: Member,
}

impl MembershipContext {
    pub fn subject_id(&self) -> Uuid {
        self.member.user_id
    }

    pub fn is_owner(&self) -> bool {
        self.club.is_owner(self.member.user_id)
    }
}
