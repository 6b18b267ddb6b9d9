//! Sign-in and sign-up handlers
//!
//! Both return a fresh identity token. Sign-in failures never reveal whether
//! the email exists.

use crate::{
    ApiError, ApiResult, AppState, AuthResponse, SignInRequest, SignUpRequest, with_timeout,
};

use bc_auth::{AuthError, password};
use bc_core::User;
use bc_core::validation::{normalize_email, validate_email, validate_password, validate_username};
use bc_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use log::info;

/// POST /api/v1/auth/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> ApiResult<Json<AuthResponse>> {
    with_timeout(&state, async {
        let email = normalize_email(&req.email);

        if let Err(e) = state.sign_in_limiter.check(&email) {
            state.metrics.sign_in("rate_limited");
            return Err(e.into());
        }

        let Some(user_id) = state.verifier.verify(&email, &req.password).await? else {
            state.metrics.sign_in("invalid_credentials");
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        };

        let user = UserRepository::new(state.pool.clone())
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                ApiError::internal(format!("credentials for missing user {}", user_id))
            })?;

        let token = state.codec().issue(&user_id.to_string())?;
        state.metrics.sign_in("success");

        Ok(Json(AuthResponse {
            token,
            user: user.into(),
        }))
    })
    .await
}

/// POST /api/v1/auth/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> ApiResult<Json<AuthResponse>> {
    with_timeout(&state, async {
        let email = normalize_email(&req.email);
        let username = req.username.trim().to_string();
        validate_email(&email)?;
        validate_password(&req.password)?;
        validate_username(&username)?;

        // Argon2 is CPU-bound; keep it off the async workers
        let candidate = req.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || password::hash(&candidate))
            .await
            .map_err(|e| ApiError::internal(format!("hashing task failed: {}", e)))??;

        let user = User::new(email, username);
        UserRepository::new(state.pool.clone())
            .create(&user, &password_hash)
            .await?;

        let token = state.codec().issue(&user.id.to_string())?;
        state.metrics.sign_up();
        info!("Registered user {}", user.id);

        Ok(Json(AuthResponse {
            token,
            user: user.into(),
        }))
    })
    .await
}
