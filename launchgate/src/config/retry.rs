//! Retry policy for resolution attempts.

use std::time::Duration;

use super::defaults::{DEFAULT_ATTEMPT_TIMEOUT_SECS, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_MS};
use super::settings::ResolverSettings;

/// How a resolution pass schedules its attempts.
///
/// At least one attempt always runs; the delay separates attempts and
/// is skipped after the last one.
///
/// # Example
///
/// ```
/// use launchgate::config::RetryPolicy;
/// use std::time::Duration;
///
/// // Using defaults
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.max_attempts(), 3);
/// assert_eq!(policy.attempt_timeout(), Duration::from_secs(15));
/// assert_eq!(policy.retry_delay(), Duration::from_secs(1));
///
/// // Custom schedule
/// let policy = RetryPolicy::new()
///     .with_max_attempts(5)
///     .with_retry_delay(Duration::from_millis(250));
/// assert_eq!(policy.max_attempts(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    attempt_timeout: Duration,
    retry_delay: Duration,
}

impl RetryPolicy {
    /// Create a policy with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of attempts per pass. Clamped to at least 1.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the per-attempt timeout.
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Set the delay between attempts.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Attempts per pass.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Per-attempt timeout.
    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    /// Delay between attempts.
    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempt_timeout: Duration::from_secs(DEFAULT_ATTEMPT_TIMEOUT_SECS),
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl From<&ResolverSettings> for RetryPolicy {
    fn from(settings: &ResolverSettings) -> Self {
        Self {
            max_attempts: settings.max_attempts.max(1),
            attempt_timeout: Duration::from_secs(settings.attempt_timeout_secs),
            retry_delay: Duration::from_millis(settings.retry_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.attempt_timeout(), Duration::from_secs(15));
        assert_eq!(policy.retry_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_builder_overrides() {
        let policy = RetryPolicy::new()
            .with_max_attempts(5)
            .with_attempt_timeout(Duration::from_secs(1))
            .with_retry_delay(Duration::from_millis(50));
        assert_eq!(policy.max_attempts(), 5);
        assert_eq!(policy.attempt_timeout(), Duration::from_secs(1));
        assert_eq!(policy.retry_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_zero_attempts_clamps_to_one() {
        assert_eq!(RetryPolicy::new().with_max_attempts(0).max_attempts(), 1);
    }

    #[test]
    fn test_from_settings() {
        let settings = ResolverSettings {
            attempt_timeout_secs: 7,
            max_attempts: 2,
            retry_delay_ms: 300,
            ..ResolverSettings::default()
        };
        let policy = RetryPolicy::from(&settings);
        assert_eq!(policy.max_attempts(), 2);
        assert_eq!(policy.attempt_timeout(), Duration::from_secs(7));
        assert_eq!(policy.retry_delay(), Duration::from_millis(300));
    }
}
