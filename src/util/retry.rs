//! Retry with exponential backoff and jitter.

use std::future::Future;
use std::time::Duration;

use rand::Rng;

use crate::error::RadioError;

/// Retry policy configuration.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(10),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Default backoff with a custom attempt count (at least one).
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            ..Self::default()
        }
    }

    /// Grow `backoff` by the multiplier, capped at `max_backoff`.
    fn next_backoff(&self, backoff: Duration) -> Duration {
        backoff.mul_f64(self.multiplier).min(self.max_backoff)
    }

    /// Execute an async operation, retrying errors that are retryable.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, RadioError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, RadioError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut backoff = self.initial_backoff;
        let mut attempt = 0;

        loop {
            attempt += 1;
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if !e.is_retryable() || attempt >= max_attempts {
                        return Err(e);
                    }

                    tracing::warn!(
                        attempt,
                        max_attempts,
                        error = %e,
                        "Retrying after error"
                    );

                    tokio::time::sleep(jittered(backoff)).await;
                    backoff = self.next_backoff(backoff);
                }
            }
        }
    }
}

/// Spread `backoff` over 75% to 125% of its value.
fn jittered(backoff: Duration) -> Duration {
    backoff.mul_f64(rand::thread_rng().gen_range(0.75..=1.25))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(1),
            multiplier: 1.0,
        }
    }

    #[tokio::test]
    async fn retries_retryable_errors_until_success() {
        let calls = AtomicU32::new(0);
        let result = fast_policy(3)
            .execute(|| async {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(RadioError::EmptyResponse)
                } else {
                    Ok(7)
                }
            })
            .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = fast_policy(2)
            .execute(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(RadioError::Status {
                    status: 503,
                    body: String::new(),
                })
            })
            .await;
        assert!(matches!(result, Err(RadioError::Status { status: 503, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn does_not_retry_permanent_errors() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = fast_policy(5)
            .execute(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(RadioError::InvalidResponse("bad".into()))
            })
            .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn jitter_stays_within_a_quarter_of_backoff() {
        let backoff = Duration::from_millis(400);
        for _ in 0..100 {
            let sleep = jittered(backoff);
            assert!(sleep >= Duration::from_millis(300), "{sleep:?}");
            assert!(sleep <= Duration::from_millis(500), "{sleep:?}");
        }
    }

    #[test]
    fn backoff_grows_until_capped() {
        let policy = RetryPolicy::default();
        let mut backoff = policy.initial_backoff;
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(backoff.as_millis());
            backoff = policy.next_backoff(backoff);
        }
        assert_eq!(seen, [500, 1000, 2000, 4000, 8000, 10000]);
    }

    #[test]
    fn max_attempts_is_at_least_one() {
        assert_eq!(RetryPolicy::with_max_attempts(0).max_attempts, 1);
    }
}
