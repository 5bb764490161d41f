//! Resilient aggregation layer over the Financial Modeling Prep market-data API.
//!
//! Overview
//! - One [`FmpApiService`] exposes a typed accessor per data category.
//! - Every upstream call goes through a retrying transport: network failures,
//!   HTTP 5xx and 429 are retried with exponential backoff (1s, 2s), anything
//!   else surfaces immediately as a normalized [`FmpError`].
//! - The company directory and batched quotes are deduplicated: concurrent
//!   identical requests share one upstream call, and successes are kept for a
//!   TTL (24h and 60s by default). Failures are never cached.
//! - Composite accessors (technical indicators, economic indicators, market
//!   movers) fan out to several endpoints and merge whatever succeeded, using a
//!   documented fallback for each part that failed.
//! - [`FmpApiService::check_status`] probes the upstream once, without retry.
//!
//! Key behaviors and trade-offs
//! - Retry amplifies load on a struggling upstream; the attempt cap and
//!   backoff are configurable via [`RetryConfig`].
//! - Cached quotes can be up to one TTL stale.
//! - Fan-out accessors prefer partial data over failure, so callers that need
//!   to know which parts fell back should use [`FanOut`] directly.
//!
//! Examples
//! ```rust,ignore
//! use fmp::FmpApiService;
//!
//! let fmp = FmpApiService::from_env()?;
//! let quotes = fmp.stock_quotes(&["AAPL", "MSFT"]).await?;
//! let indicators = fmp.technical_indicators("AAPL", 14).await?;
//! let movers = fmp.market_movers().await;
//! ```
//!
//! See `fmp/examples/` for a runnable demonstration against the mock transport.
#![warn(missing_docs)]

pub(crate) mod core;
mod fanout;
mod router;

pub use crate::core::{FmpApiService, FmpBuilder};
pub use crate::fanout::{FanOut, Outcome, Settled};
pub use crate::router::quotes::canonical_symbols;

pub use fmp_middleware::{DedupCache, RetryMiddleware, RetryPolicy, TransportBuilder, with_retry};

// Re-export core types for convenience
pub use fmp_core::{
    AnalystEstimate, ApiHealth, ApiStatus, CacheConfig, Clock, Company, CompanyProfile,
    DateRange, EconomicDataPoint, EconomicIndicators, EconomicSeries, Endpoint, FmpConfig,
    FmpError, HistoricalPrice, HistoricalPrices, IndicatorKind, MarketMover, MarketMovers,
    Middleware, MoverBoard, NewsArticle, RateLimitInfo, RetryConfig, StockQuote, SystemClock,
    TechnicalIndicators, Transport,
};
