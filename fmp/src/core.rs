use std::sync::Arc;
use std::time::Duration;

use fmp_core::{
    CacheConfig, Clock, Company, Endpoint, FmpConfig, FmpError, Middleware, RetryConfig,
    StockQuote, SystemClock, Transport,
};
use fmp_http::HttpTransport;
use fmp_middleware::{DedupCache, TransportBuilder};
use serde::de::DeserializeOwned;

/// Aggregation layer over the upstream market-data API.
///
/// Every accessor goes through a retrying transport. Company directory and
/// batched quotes are additionally deduplicated and retained for a short TTL;
/// composite accessors fan out and merge partial results. Cloning is cheap and
/// clones share transports and caches.
#[derive(Clone)]
pub struct FmpApiService {
    /// Retry-wrapped transport used by accessors.
    pub(crate) transport: Arc<dyn Transport>,
    /// Unwrapped transport used by the status probe.
    pub(crate) raw: Arc<dyn Transport>,
    pub(crate) companies: DedupCache<Arc<Vec<Company>>>,
    pub(crate) quotes: DedupCache<Arc<Vec<StockQuote>>>,
    pub(crate) cfg: FmpConfig,
}

/// Builder for [`FmpApiService`].
pub struct FmpBuilder {
    cfg: FmpConfig,
    transport: Option<Arc<dyn Transport>>,
    clock: Option<Arc<dyn Clock>>,
    layers: Vec<Box<dyn Middleware>>,
}

impl Default for FmpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FmpBuilder {
    /// Create a builder with default configuration and no API key.
    ///
    /// Behavior and trade-offs:
    /// - Defaults match the upstream's published limits: 30s timeout, 3 attempts
    ///   with 1s/2s backoff, 24h directory TTL, 60s quote TTL.
    /// - An API key must be supplied before [`build`](Self::build), even when a
    ///   custom transport is injected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: FmpConfig::default(),
            transport: None,
            clock: None,
            layers: Vec::new(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: FmpConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.cfg.api_key = key.into();
        self
    }

    /// Override the base URL (useful for proxies and test servers).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Only applies to the built-in HTTP transport; an injected transport
    /// manages its own timeouts.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    /// Replace the retry policy.
    #[must_use]
    pub const fn retry(mut self, retry: RetryConfig) -> Self {
        self.cfg.retry = retry;
        self
    }

    /// Shortcut: set total attempts per request, keeping the rest of the policy.
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.cfg.retry.max_attempts = attempts;
        self
    }

    /// Replace the cache retention windows.
    ///
    /// A zero TTL disables retention for that class; concurrent identical
    /// requests are still coalesced.
    #[must_use]
    pub const fn cache(mut self, cache: CacheConfig) -> Self {
        self.cfg.cache = cache;
        self
    }

    /// Use `transport` instead of the built-in HTTP transport.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Drive cache expiry from `clock` instead of the system clock.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Add a custom middleware layer. Retry always wraps custom layers, so
    /// each retry attempt passes through them again.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Validate configuration and assemble the service.
    ///
    /// # Errors
    /// Returns `FmpError::Config` when the configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn build(self) -> Result<FmpApiService, FmpError> {
        let mut cfg = self.cfg;
        cfg.base_url = cfg.base_url.trim_end_matches('/').to_string();
        cfg.validate()?;

        let raw: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(&cfg)?),
        };
        let transport = self
            .layers
            .into_iter()
            .fold(TransportBuilder::new(Arc::clone(&raw)), TransportBuilder::layer)
            .with_retry(&cfg.retry)
            .build();

        let clock: Arc<dyn Clock> = match self.clock {
            Some(c) => c,
            None => Arc::new(SystemClock),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            transport = raw.name(),
            base_url = %cfg.base_url,
            max_attempts = cfg.retry.max_attempts,
            "fmp service built"
        );

        Ok(FmpApiService {
            transport,
            raw,
            companies: DedupCache::with_clock(Arc::clone(&clock)),
            quotes: DedupCache::with_clock(clock),
            cfg,
        })
    }
}

impl FmpApiService {
    /// Start building a service.
    ///
    /// ```rust,ignore
    /// let fmp = fmp::FmpApiService::builder()
    ///     .api_key(std::env::var("FMP_API_KEY")?)
    ///     .max_attempts(4)
    ///     .build()?;
    /// let quotes = fmp.stock_quotes(&["AAPL", "MSFT"]).await?;
    /// ```
    #[must_use]
    pub fn builder() -> FmpBuilder {
        FmpBuilder::new()
    }

    /// Build a service from `FMP_API_KEY` and the optional `FMP_*` overrides.
    ///
    /// # Errors
    /// Returns `FmpError::Config` when the key is missing or an override is malformed.
    pub fn from_env() -> Result<Self, FmpError> {
        FmpBuilder::new().config(FmpConfig::from_env()?).build()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FmpConfig {
        &self.cfg
    }

    /// Drop every cached and in-flight entry.
    pub fn clear_caches(&self) {
        self.companies.clear();
        self.quotes.clear();
    }

    /// Drop cached entries whose TTL has elapsed. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.companies.purge_expired() + self.quotes.purge_expired()
    }

    /// Fetch `endpoint` through the retrying transport and decode it as `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, FmpError> {
        fetch_via(self.transport.as_ref(), endpoint).await
    }
}

pub(crate) async fn fetch_via<T: DeserializeOwned>(
    transport: &dyn Transport,
    endpoint: &Endpoint,
) -> Result<T, FmpError> {
    let value = transport.get(endpoint).await?;
    serde_json::from_value(value).map_err(|e| FmpError::decode(endpoint.path(), e.to_string()))
}
