use crate::{AuthError, Result as AuthErrorResult, TokenCodec};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use http::HeaderMap;
use http::header::AUTHORIZATION;
use uuid::Uuid;

/// Resolves the `Authorization: Bearer <token>` header to a subject id.
///
/// A missing header is `MissingHeader` (unauthenticated). Anything wrong with
/// a header that is present is reported as a rejected credential.
#[derive(Clone)]
pub struct AuthorizationGuard {
    codec: Arc<TokenCodec>,
}

impl AuthorizationGuard {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    #[track_caller]
    pub fn authenticate(&self, headers: &HeaderMap) -> AuthErrorResult<Uuid> {
        let value = headers
            .get(AUTHORIZATION)
            .ok_or_else(|| AuthError::MissingHeader {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let value = value.to_str().map_err(|_| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let token = parse_bearer(value)?;
        let subject = self.codec.decode(token)?;

        Uuid::parse_str(&subject).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a valid user id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Split `Bearer <token>`: exactly two whitespace-separated parts, scheme
/// compared case-insensitively
#[track_caller]
pub fn parse_bearer(value: &str) -> AuthErrorResult<&str> {
    let mut parts = value.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
