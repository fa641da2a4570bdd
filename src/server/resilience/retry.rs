use std::time::Duration;

/// Bounds for retrying a single operation.
///
/// Every attempt is limited by `attempt_timeout`; an attempt that runs past it counts as
/// a transient failure. Between attempts the caller waits `wait`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one, at least 1.
    pub max_attempts: u32,
    /// Pause between two attempts.
    pub wait: Duration,
    /// Upper bound for a single attempt.
    pub attempt_timeout: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, wait: Duration, attempt_timeout: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            wait,
            attempt_timeout,
        }
    }

    /// Whether another attempt is allowed after `attempt` attempts have failed.
    pub fn allows_retry_after(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(500), Duration::from_secs(2))
    }
}
