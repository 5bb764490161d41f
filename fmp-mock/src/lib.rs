//! Test doubles for the FMP aggregation layer.
//!
//! - [`MockTransport`] answers requests from per-path scripts driven by a
//!   [`MockController`], optionally falling back to canned [`fixtures`].
//! - [`ManualClock`] is a [`Clock`](fmp_core::Clock) that only moves when told to.

mod clock;
mod dynamic;
pub mod fixtures;

pub use crate::clock::ManualClock;
pub use crate::dynamic::{MockBehavior, MockController, MockTransport};
