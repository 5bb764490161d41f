//! Bounded exponential-backoff retry for transient upstream failures.
//!
//! [`with_retry`] is the generic primitive: it knows nothing about HTTP and takes
//! the retryability classifier and the backoff schedule as arguments.
//! [`RetryPolicy`] binds it to a [`RetryConfig`] and [`FmpError::is_retryable`],
//! and [`RetryingTransport`] applies that policy to every call of an inner
//! transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use fmp_core::{Endpoint, FmpError, Middleware, Transport};
use fmp_types::RetryConfig;
use rand::Rng;

/// Run `op` until it succeeds, fails permanently, or `max_attempts` is reached.
///
/// `op` receives the 1-based attempt number. `classify` decides whether a failure
/// may be retried. `backoff(n)` is the delay slept before attempt `n` (n >= 2).
/// A `max_attempts` of zero is treated as one.
///
/// # Errors
/// Returns the last error produced by `op`.
pub async fn with_retry<T, Op, Fut, C, B>(
    mut op: Op,
    classify: C,
    max_attempts: u32,
    backoff: B,
) -> Result<T, FmpError>
where
    Op: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, FmpError>>,
    C: Fn(&FmpError) -> bool,
    B: Fn(u32) -> Duration,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts && classify(&err) => {
                attempt += 1;
                let delay = backoff(attempt);
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    next_attempt = attempt,
                    max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "retrying after transient failure"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                if attempt > 1 {
                    tracing::warn!(attempts = attempt, error = %err, "giving up after retries");
                }
                return Err(err);
            }
        }
    }
}

/// Exponential backoff policy derived from a [`RetryConfig`].
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    cfg: RetryConfig,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

impl RetryPolicy {
    /// Create a policy from configuration.
    #[must_use]
    pub const fn new(cfg: RetryConfig) -> Self {
        Self { cfg }
    }

    /// Underlying configuration.
    #[must_use]
    pub const fn config(&self) -> &RetryConfig {
        &self.cfg
    }

    /// Total attempts allowed per logical request (never less than one).
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.cfg.max_attempts.max(1)
    }

    /// Deterministic delay before attempt `next_attempt`, without jitter.
    ///
    /// Attempt 1 has no delay; attempt `k` waits `base * factor^(k-2)`, capped at
    /// `max_delay`. With the defaults this is 1s before attempt 2 and 2s before
    /// attempt 3.
    #[must_use]
    pub fn delay_before(&self, next_attempt: u32) -> Duration {
        if next_attempt <= 1 {
            return Duration::ZERO;
        }
        let exp = next_attempt - 2;
        let multiplier = u64::from(self.cfg.factor.max(1))
            .checked_pow(exp)
            .unwrap_or(u64::MAX);
        let base_ms = u64::try_from(self.cfg.base_delay.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(base_ms.saturating_mul(multiplier)).min(self.cfg.max_delay)
    }

    fn jittered(&self, delay: Duration) -> Duration {
        if self.cfg.jitter_percent == 0 || delay.is_zero() {
            return delay;
        }
        let base_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let range = std::cmp::max(
            1,
            base_ms.saturating_mul(u64::from(self.cfg.jitter_percent.min(100))) / 100,
        );
        let mut rng = rand::rng();
        Duration::from_millis(base_ms.saturating_add(rng.random_range(0..range)))
    }

    /// Run `op` under this policy using [`FmpError::is_retryable`] as the classifier.
    ///
    /// # Errors
    /// Returns the last error produced by `op`.
    pub async fn run<T, Op, Fut>(&self, op: Op) -> Result<T, FmpError>
    where
        Op: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, FmpError>>,
    {
        with_retry(op, FmpError::is_retryable, self.max_attempts(), |n| {
            self.jittered(self.delay_before(n))
        })
        .await
    }
}

/// Transport wrapper that retries transient failures of its inner transport.
pub struct RetryingTransport {
    inner: Arc<dyn Transport>,
    policy: RetryPolicy,
}

impl RetryingTransport {
    /// Wrap `inner` with the given retry configuration.
    #[must_use]
    pub fn new(inner: Arc<dyn Transport>, cfg: RetryConfig) -> Self {
        Self {
            inner,
            policy: RetryPolicy::new(cfg),
        }
    }

    /// Access the inner transport.
    #[must_use]
    pub fn inner(&self) -> &Arc<dyn Transport> {
        &self.inner
    }

    /// The active retry policy.
    #[must_use]
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

#[async_trait]
impl Transport for RetryingTransport {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn get(&self, endpoint: &Endpoint) -> Result<serde_json::Value, FmpError> {
        self.policy.run(|_| self.inner.get(endpoint)).await
    }
}

/// Middleware config for constructing a [`RetryingTransport`].
pub struct RetryMiddleware {
    /// Policy applied to every request through the wrapped transport.
    pub config: RetryConfig,
}

impl RetryMiddleware {
    /// Layer that retries according to `config`.
    #[must_use]
    pub const fn new(config: RetryConfig) -> Self {
        Self { config }
    }
}

impl Middleware for RetryMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn Transport>) -> Arc<dyn Transport> {
        Arc::new(RetryingTransport::new(inner, self.config))
    }

    fn name(&self) -> &'static str {
        "RetryMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "max_attempts": self.config.max_attempts,
            "base_delay_ms": self.config.base_delay.as_millis(),
            "factor": self.config.factor,
            "max_delay_ms": self.config.max_delay.as_millis(),
            "jitter_percent": self.config.jitter_percent,
        })
    }
}
