use crate::{ClubDto, MemberDto};

use bc_core::MembershipContext;

use serde::Serialize;

/// The club as seen by one of its active members
#[derive(Debug, Serialize)]
pub struct ClubResponse {
    pub club: ClubDto,
    pub member: MemberDto,
    pub is_owner: bool,
}

impl From<MembershipContext> for ClubResponse {
    fn from(context: MembershipContext) -> Self {
        let is_owner = context.is_owner();
        Self {
            club: context.club.into(),
            member: context.member.into(),
            is_owner,
        }
    }
}
