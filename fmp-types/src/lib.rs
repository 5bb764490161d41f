//! Shared error, configuration, and status types for the FMP aggregation layer.
#![warn(missing_docs)]

mod config;
mod error;
mod status;

pub use config::{
    CacheConfig, DEFAULT_BASE_URL, ENV_API_KEY, ENV_BASE_URL, ENV_MAX_ATTEMPTS, ENV_TIMEOUT_SECS,
    FmpConfig, RetryConfig,
};
pub use error::FmpError;
pub use status::{
    ApiHealth, ApiStatus, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER, RateLimitInfo,
};
