//! fmp-middleware
//!
//! Resiliency layers for FMP transports: bounded retry with exponential backoff,
//! a dedup cache that coalesces concurrent identical requests, and a builder
//! that stacks middleware around a raw transport.

mod builder;
mod dedup;
mod retry;

pub use crate::builder::TransportBuilder;
pub use crate::dedup::DedupCache;
pub use crate::retry::{RetryMiddleware, RetryPolicy, RetryingTransport, with_retry};
