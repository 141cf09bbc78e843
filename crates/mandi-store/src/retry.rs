//! Bounded retry for transient backend failures.

use crate::error::StoreError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Delay schedule between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackoffStrategy {
    /// Retry immediately.
    None,
    /// Fixed delay between attempts.
    Fixed(Duration),
    /// Delay doubles each attempt, capped at `max`.
    Exponential { base: Duration, max: Duration },
}

impl BackoffStrategy {
    /// Delay before the given retry attempt (1-based).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        match self {
            BackoffStrategy::None => Duration::ZERO,
            BackoffStrategy::Fixed(d) => *d,
            BackoffStrategy::Exponential { base, max } => {
                let exp = attempt.saturating_sub(1).min(16);
                let delay = base.saturating_mul(2u32.saturating_pow(exp));
                delay.min(*max)
            }
        }
    }
}

/// How many times to retry and how long to wait between attempts.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Must be at least 1.
    pub max_attempts: u32,
    pub backoff: BackoffStrategy,
}

impl RetryPolicy {
    /// A single attempt; failures surface immediately.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: BackoffStrategy::None,
        }
    }

    /// Retry up to `max_attempts` with exponential backoff from 200ms,
    /// capped at 5s.
    pub fn exponential(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff: BackoffStrategy::Exponential {
                base: Duration::from_millis(200),
                max: Duration::from_secs(5),
            },
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Run `op` under the policy, retrying transient failures only.
///
/// Non-transient errors (not-found, config) surface immediately; there is
/// no point retrying them.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, StoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StoreError>>,
{
    let attempts = policy.max_attempts.max(1);
    let mut last_err = None;
    for attempt in 1..=attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && attempt < attempts => {
                let delay = policy.backoff.delay_for_attempt(attempt);
                warn!(attempt, error = %e, "store operation failed, retrying");
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                last_err = Some(e);
            }
            Err(e) => return Err(e),
        }
    }
    // Unreachable with attempts >= 1; the loop always returns.
    Err(last_err.unwrap_or_else(|| StoreError::Backend("retry exhausted".to_string())))
}
