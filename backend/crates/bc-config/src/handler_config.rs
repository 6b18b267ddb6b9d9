use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Deadline applied to every API handler body. A request that runs past it
/// is answered with 504 `TIMEOUT` and its in-flight reads are dropped.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    pub timeout_secs: u64,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl HandlerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let allowed = MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS;
        if !allowed.contains(&self.timeout_secs) {
            return Err(ConfigError::handler(format!(
                "request deadline timeout_secs={} is outside {}..={} seconds",
                self.timeout_secs, MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS
            )));
        }

        Ok(())
    }
}
