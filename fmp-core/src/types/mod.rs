//! Payload models returned by the upstream provider, plus re-exports of `fmp-types`.
// Consolidated re-exports so downstream crates can depend on `fmp-core` only

pub use fmp_types::{
    ApiHealth, ApiStatus, CacheConfig, FmpConfig, FmpError, RATE_LIMIT_REMAINING_HEADER,
    RATE_LIMIT_RESET_HEADER, RateLimitInfo, RetryConfig,
};

mod analyst;
mod company;
mod economic;
mod history;
mod indicators;
mod movers;
mod news;
mod quote;

pub use analyst::AnalystEstimate;
pub use company::{Company, CompanyProfile};
pub use economic::{EconomicDataPoint, EconomicIndicators, EconomicSeries};
pub use history::{DateRange, HistoricalPrice, HistoricalPrices};
pub use indicators::{IndicatorKind, TechnicalIndicators};
pub use movers::{MarketMover, MarketMovers, MoverBoard};
pub use news::NewsArticle;
pub use quote::StockQuote;
