use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer <token>' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Token signing failed: {message} {location}")]
    TokenEncode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential lookup failed: {message} {location}")]
    CredentialStore {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// No credential was presented (401), as opposed to a credential that
    /// was presented and rejected (403)
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::MissingHeader { .. } | Self::InvalidCredentials { .. }
        )
    }

    /// Failures caused by the server rather than the caller's credential
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::TokenEncode { .. } | Self::PasswordHash { .. } | Self::CredentialStore { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
            Self::TokenEncode { .. } | Self::PasswordHash { .. } | Self::CredentialStore { .. } => {
                "INTERNAL_ERROR"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
