use crate::Metrics;

use bc_auth::{
    AuthorizationGuard, CredentialVerifier, RateLimitConfig, SignInRateLimiter, TokenCodec,
};
use bc_db::UserRepository;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared, immutable state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub guard: AuthorizationGuard,
    pub verifier: CredentialVerifier,
    pub sign_in_limiter: SignInRateLimiter,
    pub handler_timeout: Duration,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        codec: TokenCodec,
        rate_limit: RateLimitConfig,
        handler_timeout: Duration,
    ) -> Self {
        let store = Arc::new(UserRepository::new(pool.clone()));

        Self {
            guard: AuthorizationGuard::new(Arc::new(codec)),
            verifier: CredentialVerifier::new(store),
            sign_in_limiter: SignInRateLimiter::new(rate_limit),
            handler_timeout,
            metrics: Metrics::new(),
            pool,
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        self.guard.codec()
    }
}
