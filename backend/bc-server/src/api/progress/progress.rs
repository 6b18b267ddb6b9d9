//! Reading progress handlers
//!
//! Every route resolves the subject's membership first. Non-members get 404.

use crate::{
    ApiResult, AppState, AuthenticatedUser, ChapterCompletionResponse, MemberProgressResponse,
    with_timeout,
};

use bc_core::CompletionCounts;
use bc_db::{ProgressAggregator, ProgressRecorder};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// GET /api/v1/clubs/{club_id}/progress
pub async fn member_progress(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(club_id): Path<String>,
) -> ApiResult<Json<MemberProgressResponse>> {
    let club_id = Uuid::parse_str(&club_id)?;

    with_timeout(&state, async {
        let summary = ProgressAggregator::new(state.pool.clone())
            .member_progress_summary(club_id, user_id)
            .await?;

        Ok(Json(MemberProgressResponse {
            members: summary.into_iter().map(Into::into).collect(),
        }))
    })
    .await
}

/// GET /api/v1/clubs/{club_id}/chapters/{chapter_id}/completion
pub async fn chapter_completion(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path((club_id, chapter_id)): Path<(String, String)>,
) -> ApiResult<Json<ChapterCompletionResponse>> {
    let club_id = Uuid::parse_str(&club_id)?;
    let chapter_id = Uuid::parse_str(&chapter_id)?;

    with_timeout(&state, async {
        let checklist = ProgressAggregator::new(state.pool.clone())
            .completion_by_chapter(club_id, chapter_id, user_id)
            .await?;

        Ok(Json(ChapterCompletionResponse {
            members: checklist.into_iter().map(Into::into).collect(),
        }))
    })
    .await
}

/// GET /api/v1/clubs/{club_id}/chapters/{chapter_id}/counts
pub async fn chapter_counts(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path((club_id, chapter_id)): Path<(String, String)>,
) -> ApiResult<Json<CompletionCounts>> {
    let club_id = Uuid::parse_str(&club_id)?;
    let chapter_id = Uuid::parse_str(&chapter_id)?;

    with_timeout(&state, async {
        let counts = ProgressAggregator::new(state.pool.clone())
            .completion_counts(chapter_id, club_id, user_id)
            .await?;

        Ok(Json(counts))
    })
    .await
}

/// PUT /api/v1/clubs/{club_id}/chapters/{chapter_id}/progress
pub async fn mark_chapter_complete(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path((club_id, chapter_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let club_id = Uuid::parse_str(&club_id)?;
    let chapter_id = Uuid::parse_str(&chapter_id)?;

    with_timeout(&state, async {
        ProgressRecorder::new(state.pool.clone())
            .mark_complete(user_id, club_id, chapter_id)
            .await?;

        Ok(StatusCode::NO_CONTENT)
    })
    .await
}

/// DELETE /api/v1/clubs/{club_id}/chapters/{chapter_id}/progress
pub async fn unmark_chapter_complete(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path((club_id, chapter_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let club_id = Uuid::parse_str(&club_id)?;
    let chapter_id = Uuid::parse_str(&chapter_id)?;

    with_timeout(&state, async {
        ProgressRecorder::new(state.pool.clone())
            .unmark_complete(user_id, club_id, chapter_id)
            .await?;

        Ok(StatusCode::NO_CONTENT)
    })
    .await
}
