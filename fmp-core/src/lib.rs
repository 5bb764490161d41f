//! fmp-core
//!
//! Core types and traits shared across the FMP aggregation workspace.
//!
//! - `endpoint`: immutable request descriptors and canonical cache keys.
//! - `transport`: the `Transport` trait every upstream connector implements.
//! - `middleware`: the `Middleware` trait used to layer behavior over a transport.
//! - `clock`: injectable time source for cache expiry.
//! - `types`: payload models plus re-exports of `fmp-types`.
#![warn(missing_docs)]

/// Injectable time source.
pub mod clock;
/// Request descriptors.
pub mod endpoint;
/// Middleware trait implemented by transport wrappers.
pub mod middleware;
/// Transport trait.
pub mod transport;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use endpoint::Endpoint;
pub use middleware::Middleware;
pub use transport::Transport;
pub use types::*;
