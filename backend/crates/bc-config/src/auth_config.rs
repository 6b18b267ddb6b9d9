use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_DAYS, MAX_TOKEN_TTL_DAYS,
    MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_DAYS,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required: the server refuses to start without it.
    pub jwt_secret: Option<String>,
    /// Identity token lifetime
    pub token_ttl_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
        }
    }
}

// Keeps the secret out of `{:?}` output
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_days", &self.token_ttl_days)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.jwt_secret is required (set BC_AUTH_JWT_SECRET)")
        })?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.token_ttl_days < MIN_TOKEN_TTL_DAYS || self.token_ttl_days > MAX_TOKEN_TTL_DAYS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_days must be {}-{}, got {}",
                MIN_TOKEN_TTL_DAYS, MAX_TOKEN_TTL_DAYS, self.token_ttl_days
            )));
        }

        Ok(())
    }

    /// Secret bytes for the token codec. Call after `validate()`.
    pub fn secret_bytes(&self) -> ConfigErrorResult<&[u8]> {
        self.jwt_secret
            .as_deref()
            .map(str::as_bytes)
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))
    }
}
