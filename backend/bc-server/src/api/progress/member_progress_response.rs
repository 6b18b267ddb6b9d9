use crate::UserDto;

use bc_core::MemberChapterCount;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MemberProgressDto {
    pub user: UserDto,
    pub chapter_count: i64,
}

impl From<MemberChapterCount> for MemberProgressDto {
    fn from(c: MemberChapterCount) -> Self {
        Self {
            user: c.user.into(),
            chapter_count: c.chapter_count,
        }
    }
}

/// Completed chapter count per active member
#[derive(Debug, Serialize)]
pub struct MemberProgressResponse {
    pub members: Vec<MemberProgressDto>,
}
