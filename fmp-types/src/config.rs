//! Configuration types for the transport, retry policy, and response cache.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::FmpError;

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api";

/// Environment variable holding the upstream API key.
pub const ENV_API_KEY: &str = "FMP_API_KEY";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "FMP_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "FMP_TIMEOUT_SECS";
/// Environment variable overriding the maximum number of attempts per request.
pub const ENV_MAX_ATTEMPTS: &str = "FMP_MAX_ATTEMPTS";

/// Exponential backoff configuration for retrying transient upstream failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts per logical request, including the first one (>= 1).
    pub max_attempts: u32,
    /// Delay before the second attempt.
    pub base_delay: Duration,
    /// Exponential factor applied to the delay after each failure (>= 1).
    pub factor: u32,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
    /// Random jitter percentage [0, 100] added to each delay.
    pub jitter_percent: u8,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            factor: 2,
            max_delay: Duration::from_secs(30),
            jitter_percent: 0,
        }
    }
}

/// Retention windows for the deduplicating response cache.
///
/// A zero duration keeps in-flight deduplication but drops the value as soon
/// as it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL for reference data such as the company directory.
    pub reference_ttl: Duration,
    /// TTL for volatile data such as live quotes.
    pub volatile_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            reference_ttl: Duration::from_secs(24 * 60 * 60),
            volatile_ttl: Duration::from_secs(60),
        }
    }
}

/// Top-level configuration for talking to the upstream provider.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FmpConfig {
    /// API key attached to every request as the `apikey` query parameter.
    pub api_key: String,
    /// Base URL that endpoint paths are appended to.
    pub base_url: String,
    /// Per-request transport timeout.
    pub timeout: Duration,
    /// Retry policy for transient failures.
    pub retry: RetryConfig,
    /// Cache retention windows.
    pub cache: CacheConfig,
}

impl Default for FmpConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl fmt::Debug for FmpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("cache", &self.cache)
            .finish()
    }
}

impl FmpConfig {
    /// Build a default configuration around an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    /// Returns `FmpError::Config` when `FMP_API_KEY` is missing or blank, or when
    /// a numeric override cannot be parsed.
    pub fn from_env() -> Result<Self, FmpError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FmpError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| FmpError::Config(format!("{ENV_API_KEY} is not set")))?;

        let mut cfg = Self::with_api_key(api_key);

        if let Some(base) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            cfg.base_url = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = parse_positive(ENV_TIMEOUT_SECS, &raw)?;
            cfg.timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup(ENV_MAX_ATTEMPTS) {
            let attempts = parse_positive(ENV_MAX_ATTEMPTS, &raw)?;
            cfg.retry.max_attempts = u32::try_from(attempts).map_err(|_| {
                FmpError::Config(format!("{ENV_MAX_ATTEMPTS} is out of range: {raw}"))
            })?;
        }
        Ok(cfg)
    }

    /// Check invariants that the transport and retry policy rely on.
    ///
    /// # Errors
    /// Returns `FmpError::Config` for a blank API key, blank base URL, zero
    /// timeout, zero attempts, or a zero backoff factor.
    pub fn validate(&self) -> Result<(), FmpError> {
        if self.api_key.trim().is_empty() {
            return Err(FmpError::Config("api key must not be empty".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(FmpError::Config("base url must not be empty".into()));
        }
        if self.timeout.is_zero() {
            return Err(FmpError::Config("timeout must be greater than zero".into()));
        }
        if self.retry.max_attempts == 0 {
            return Err(FmpError::Config("max_attempts must be at least 1".into()));
        }
        if self.retry.factor == 0 {
            return Err(FmpError::Config("backoff factor must be at least 1".into()));
        }
        Ok(())
    }
}

fn parse_positive(name: &str, raw: &str) -> Result<u64, FmpError> {
    match raw.trim().parse::<u64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(FmpError::Config(format!(
            "{name} must be a positive integer, got {raw:?}"
        ))),
    }
}
