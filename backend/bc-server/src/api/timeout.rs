use crate::{ApiError, ApiResult, AppState};

use std::future::Future;
use std::panic::Location;

use error_location::ErrorLocation;

/// Run a handler body under the configured deadline. An elapsed deadline
/// drops the body future, cancelling any in-flight reads.
pub async fn with_timeout<T, F>(state: &AppState, body: F) -> ApiResult<T>
where
    F: Future<Output = ApiResult<T>>,
{
    match tokio::time::timeout(state.handler_timeout, body).await {
        Ok(result) => result,
        Err(_) => {
            state.metrics.handler_timeout();
            Err(ApiError::Timeout {
                message: format!(
                    "handler exceeded {}s deadline",
                    state.handler_timeout.as_secs()
                ),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
