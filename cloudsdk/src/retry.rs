//! Retry policy for the shared transport.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Exponential backoff settings.
///
/// A failed attempt is retried when the failure is transient (timeout,
/// connect failure, 408, 429, 5xx) and the request is replayable. The delay
/// before retry `n` (starting at 0) is `initial_backoff_ms * multiplier^n`,
/// capped at `max_backoff_ms`. A `Retry-After` header, in seconds, replaces
/// the computed delay and is capped the same way.
///
/// ## Examples
///
/// ```
/// use std::time::Duration;
/// use cloudsdk::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.backoff(0), Duration::from_millis(200));
/// assert_eq!(policy.backoff(1), Duration::from_millis(400));
/// assert_eq!(policy.backoff(10), Duration::from_millis(5000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first attempt; `0` disables retrying.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_backoff_ms: u64,
    /// Upper bound for any single delay.
    pub max_backoff_ms: u64,
    /// Growth factor between consecutive delays.
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 200,
            max_backoff_ms: 5000,
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry number `retry` (0-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = self.multiplier.max(1.0).powi(retry.min(i32::MAX as u32) as i32);
        let millis = (self.initial_backoff_ms as f64 * factor).min(self.max_backoff_ms as f64);
        Duration::from_millis(millis as u64)
    }

    /// Delay honoring a server-provided `Retry-After` in seconds.
    pub fn delay(&self, retry: u32, retry_after_secs: Option<u64>) -> Duration {
        match retry_after_secs {
            Some(secs) => Duration::from_secs(secs).min(Duration::from_millis(self.max_backoff_ms)),
            None => self.backoff(retry),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_retry_after_is_capped() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay(0, Some(2)), Duration::from_secs(2));
        assert_eq!(policy.delay(0, Some(120)), Duration::from_millis(5000));
        assert_eq!(policy.delay(2, None), Duration::from_millis(800));
    }

    #[test]
    fn test_disabled() {
        assert_eq!(RetryPolicy::disabled().max_retries, 0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let policy: RetryPolicy = serde_json::from_str(r#"{"max_retries": 1}"#).unwrap();
        assert_eq!(policy.max_retries, 1);
        assert_eq!(policy.initial_backoff_ms, 200);
    }

    proptest! {
        #[test]
        fn backoff_is_monotonic_and_capped(retry in 0u32..64) {
            let policy = RetryPolicy::default();
            let current = policy.backoff(retry);
            prop_assert!(current <= Duration::from_millis(policy.max_backoff_ms));
            prop_assert!(policy.backoff(retry + 1) >= current);
        }
    }
}
