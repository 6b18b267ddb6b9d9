//! Club membership handlers

use crate::{ApiResult, AppState, AuthenticatedUser, ClubResponse, with_timeout};

use bc_db::MembershipResolver;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// GET /api/v1/clubs/{club_id}
///
/// 404 unless the subject is an active member
pub async fn get_club(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(club_id): Path<String>,
) -> ApiResult<Json<ClubResponse>> {
    let club_id = Uuid::parse_str(&club_id)?;

    with_timeout(&state, async {
        let context = MembershipResolver::new(state.pool.clone())
            .require_active_membership(user_id, club_id)
            .await?;

        Ok(Json(context.into()))
    })
    .await
}

/// DELETE /api/v1/clubs/{club_id}/members/{member_id}
///
/// Owner or self. Removing an already-removed member is a success.
pub async fn remove_member(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path((club_id, member_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let club_id = Uuid::parse_str(&club_id)?;
    let member_id = Uuid::parse_str(&member_id)?;

    with_timeout(&state, async {
        MembershipResolver::new(state.pool.clone())
            .remove_member(user_id, club_id, member_id)
            .await?;

        Ok(StatusCode::NO_CONTENT)
    })
    .await
}

/// DELETE /api/v1/clubs/{club_id}/invites/{invite_id}
///
/// Owner or the invited user
pub async fn delete_invite(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path((club_id, invite_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let club_id = Uuid::parse_str(&club_id)?;
    let invite_id = Uuid::parse_str(&invite_id)?;

    with_timeout(&state, async {
        MembershipResolver::new(state.pool.clone())
            .delete_invite(user_id, club_id, invite_id)
            .await?;

        Ok(StatusCode::NO_CONTENT)
    })
    .await
}
