use crate::{
    ChapterRepository, DbError, MemberRepository, MembershipResolver, ProgressRepository,
    Result as DbErrorResult,
};

use bc_core::{
    CompletionCounts, MemberChapterCompletion, MemberChapterCount, chapter_checklist,
    summarize_member_progress,
};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Read-only club statistics. Every query resolves the subject's membership
/// first and then issues its independent reads concurrently.
#[derive(Clone)]
pub struct ProgressAggregator {
    resolver: MembershipResolver,
    members: MemberRepository,
    chapters: ChapterRepository,
    progress: ProgressRepository,
}

impl ProgressAggregator {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            resolver: MembershipResolver::new(pool.clone()),
            members: MemberRepository::new(pool.clone()),
            chapters: ChapterRepository::new(pool.clone()),
            progress: ProgressRepository::new(pool),
        }
    }

    /// Completed and remaining member counts for one chapter.
    ///
    /// `NotFound` when the subject is not an active member or the chapter is
    /// not in the club. Zeros are never reported in those cases.
    pub async fn completion_counts(
        &self,
        chapter_id: Uuid,
        club_id: Uuid,
        subject_id: Uuid,
    ) -> DbErrorResult<CompletionCounts> {
        self.resolver
            .require_active_membership(subject_id, club_id)
            .await?;

        let (chapter, completed, active_members) = tokio::try_join!(
            self.chapters.find_in_club(chapter_id, club_id),
            self.progress.count_for_chapter(chapter_id),
            self.members.count_active(club_id),
        )?;

        if chapter.is_none() {
            return Err(DbError::not_found(format!("chapter {}", chapter_id)));
        }

        Ok(CompletionCounts::new(active_members, completed))
    }

    /// Completed chapter count for every active member of the club
    pub async fn member_progress_summary(
        &self,
        club_id: Uuid,
        subject_id: Uuid,
    ) -> DbErrorResult<Vec<MemberChapterCount>> {
        self.resolver
            .require_active_membership(subject_id, club_id)
            .await?;

        let (members, progress) = tokio::try_join!(
            self.members.list_active_with_users(club_id),
            self.progress.list_for_club(club_id),
        )?;

        Ok(summarize_member_progress(&members, &progress))
    }

    /// Checklist of every active member for one chapter
    pub async fn completion_by_chapter(
        &self,
        club_id: Uuid,
        chapter_id: Uuid,
        subject_id: Uuid,
    ) -> DbErrorResult<Vec<MemberChapterCompletion>> {
        self.resolver
            .require_active_membership(subject_id, club_id)
            .await?;

        let (chapter, members, progress) = tokio::try_join!(
            self.chapters.find_in_club(chapter_id, club_id),
            self.members.list_active_with_users(club_id),
            self.progress.list_for_chapter(chapter_id),
        )?;

        if chapter.is_none() {
            return Err(DbError::not_found(format!("chapter {}", chapter_id)));
        }

        Ok(chapter_checklist(&members, chapter_id, &progress))
    }
}
