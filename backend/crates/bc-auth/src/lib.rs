pub mod authorization_guard;
pub mod claims;
pub mod credential_verifier;
pub mod error;
pub mod password;
pub mod rate_limit_config;
pub mod sign_in_rate_limiter;
pub mod token_codec;

pub use authorization_guard::AuthorizationGuard;
pub use claims::Claims;
pub use credential_verifier::{CredentialStore, CredentialVerifier, StoredCredentials};
pub use error::{AuthError, Result};
pub use rate_limit_config::RateLimitConfig;
pub use sign_in_rate_limiter::SignInRateLimiter;
pub use token_codec::{DEFAULT_TOKEN_TTL_DAYS, TokenCodec};

#[cfg(test)]
mod tests;
