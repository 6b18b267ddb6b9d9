use crate::{ApiError, AppState, with_timeout};

use bc_auth::{RateLimitConfig, TokenCodec};

use std::time::Duration;

async fn state_with_timeout(timeout: Duration) -> AppState {
    let pool = bc_db::connect_in_memory().await.unwrap();
    let codec = TokenCodec::with_hs256(
        b"0123456789abcdef0123456789abcdef",
        chrono::Duration::days(365),
    );
    AppState::new(pool, codec, RateLimitConfig::default(), timeout)
}

#[tokio::test]
async fn given_fast_body_when_run_with_timeout_then_result_passes_through() {
    let state = state_with_timeout(Duration::from_secs(1)).await;

    let result = with_timeout(&state, async { Ok(42) }).await;

    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn given_slow_body_when_run_with_timeout_then_timeout_error() {
    let state = state_with_timeout(Duration::from_millis(10)).await;

    let result: Result<(), ApiError> = with_timeout(&state, async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(())
    })
    .await;

    assert!(matches!(result, Err(ApiError::Timeout { .. })));
}
