//! Axum extractor for bearer authentication

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Subject id resolved from the `Authorization: Bearer <token>` header.
///
/// Rejects with 401 when the header is missing and 403 when it is present
/// but invalid.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub Uuid);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match state.guard.authenticate(&parts.headers) {
                Ok(subject_id) => {
                    state.metrics.auth_succeeded();
                    log::debug!("Authenticated subject {}", subject_id);
                    Ok(AuthenticatedUser(subject_id))
                }
                Err(e) => {
                    state.metrics.auth_failed(e.error_code());
                    Err(ApiError::from(e))
                }
            }
        }
    }
}
