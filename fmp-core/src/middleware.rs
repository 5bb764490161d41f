//! Composable wrappers around a [`Transport`].

use std::sync::Arc;

use crate::transport::Transport;

/// A layer that takes ownership of a transport and returns one that adds
/// behavior around each `get` (retrying, counting, throttling).
///
/// Layers are stacked by `fmp-middleware`'s `TransportBuilder`; the outermost
/// layer sees a request first.
pub trait Middleware: Send + Sync {
    /// Wrap `inner`. The returned transport forwards to `inner` for the actual
    /// request.
    fn apply(self: Box<Self>, inner: Arc<dyn Transport>) -> Arc<dyn Transport>;

    /// Stable layer name, used to find or replace a layer in a stack.
    fn name(&self) -> &'static str;

    /// Settings of this layer as JSON, reported by `TransportBuilder::describe`.
    fn config_json(&self) -> serde_json::Value;
}
