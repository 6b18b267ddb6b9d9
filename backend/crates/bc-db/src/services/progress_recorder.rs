use crate::{
    ChapterRepository, DbError, MembershipResolver, ProgressRepository, Result as DbErrorResult,
};

use bc_core::Progress;

use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Marks and unmarks chapters as completed for the acting member.
/// Both operations are idempotent.
#[derive(Clone)]
pub struct ProgressRecorder {
    resolver: MembershipResolver,
    chapters: ChapterRepository,
    progress: ProgressRepository,
}

impl ProgressRecorder {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            resolver: MembershipResolver::new(pool.clone()),
            chapters: ChapterRepository::new(pool.clone()),
            progress: ProgressRepository::new(pool),
        }
    }

    pub async fn mark_complete(
        &self,
        subject_id: Uuid,
        club_id: Uuid,
        chapter_id: Uuid,
    ) -> DbErrorResult<()> {
        self.require_chapter(subject_id, club_id, chapter_id).await?;

        let inserted = self
            .progress
            .mark_complete(&Progress::new(chapter_id, subject_id))
            .await?;
        if !inserted {
            debug!("Chapter {} already completed by {}", chapter_id, subject_id);
        }

        Ok(())
    }

    pub async fn unmark_complete(
        &self,
        subject_id: Uuid,
        club_id: Uuid,
        chapter_id: Uuid,
    ) -> DbErrorResult<()> {
        self.require_chapter(subject_id, club_id, chapter_id).await?;

        self.progress.unmark(chapter_id, subject_id).await?;

        Ok(())
    }

    async fn require_chapter(
        &self,
        subject_id: Uuid,
        club_id: Uuid,
        chapter_id: Uuid,
    ) -> DbErrorResult<()> {
        self.resolver
            .require_active_membership(subject_id, club_id)
            .await?;

        self.chapters
            .find_in_club(chapter_id, club_id)
            .await?
            .ok_or_else(|| DbError::not_found(format!("chapter {}", chapter_id)))?;

        Ok(())
    }
}
