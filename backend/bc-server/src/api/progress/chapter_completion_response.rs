use crate::UserDto;

use bc_core::MemberChapterCompletion;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProgressMarkDto {
    pub created_at: i64,
}

/// `progress` serializes as `null` when the member has not completed the
/// chapter
#[derive(Debug, Serialize)]
pub struct MemberCompletionDto {
    pub user: UserDto,
    pub progress: Option<ProgressMarkDto>,
}

impl From<MemberChapterCompletion> for MemberCompletionDto {
    fn from(c: MemberChapterCompletion) -> Self {
        Self {
            user: c.user.into(),
            progress: c.progress.map(|p| ProgressMarkDto {
                created_at: p.created_at.timestamp(),
            }),
        }
    }
}

/// Checklist of every active member for one chapter
#[derive(Debug, Serialize)]
pub struct ChapterCompletionResponse {
    pub members: Vec<MemberCompletionDto>,
}
