use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Tokens are long-lived identity tokens, not short sessions
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 365;

/// Issues and verifies HS256 identity tokens.
///
/// Built once at startup from configuration and shared read-only.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by Claims::validate_at against an explicit clock
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[track_caller]
    pub fn issue(&self, subject_id: &str) -> AuthErrorResult<String> {
        self.issue_at(subject_id, Utc::now())
    }

    #[track_caller]
    pub fn issue_at(&self, subject_id: &str, now: DateTime<Utc>) -> AuthErrorResult<String> {
        let claims = Claims::new(subject_id, now, self.ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenEncode {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify a token and return its subject id
    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthErrorResult<String> {
        self.decode_at(token, Utc::now())
    }

    #[track_caller]
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<String> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                AuthError::InvalidToken {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        token_data.claims.validate_at(now)?;

        Ok(token_data.claims.sub)
    }
}
