use metrics::counter;

/// Counters for authentication and handler outcomes
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "bc_server",
        }
    }

    /// Bearer token accepted
    pub fn auth_succeeded(&self) {
        counter!(format!("{}.auth.succeeded", self.prefix)).increment(1);
    }

    /// Bearer token missing or rejected
    pub fn auth_failed(&self, reason: &str) {
        counter!(format!("{}.auth.failed", self.prefix)).increment(1);
        counter!(format!("{}.auth.failed.{}", self.prefix, reason)).increment(1);
    }

    /// Sign-in attempt by outcome (`success`, `invalid_credentials`, `rate_limited`)
    pub fn sign_in(&self, outcome: &str) {
        counter!(format!("{}.sign_in.{}", self.prefix, outcome)).increment(1);
    }

    pub fn sign_up(&self) {
        counter!(format!("{}.sign_up.total", self.prefix)).increment(1);
    }

    pub fn handler_timeout(&self) {
        counter!(format!("{}.handler.timeouts", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
