use crate::{Member, User};

use serde::Serialize;

/// A member row joined with the user it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubMember {
    pub member: Member,
    pub user: User,
}
