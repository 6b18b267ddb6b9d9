use crate::{ApiError, ApiResult, AppState, AuthenticatedUser, UserDto, with_timeout};

use bc_db::UserRepository;

use axum::{Json, extract::State};

/// GET /api/v1/users/me
///
/// The authenticated user's profile
pub async fn get_me(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> ApiResult<Json<UserDto>> {
    with_timeout(&state, async {
        let user = UserRepository::new(state.pool.clone())
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))?;

        Ok(Json(user.into()))
    })
    .await
}
