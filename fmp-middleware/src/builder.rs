//! Builder for wrapping a raw transport with middleware layers.
//!
//! Layers form an onion around the raw transport:
//!
//! ```text
//! caller
//!     ↓
//! outermost layer (first to see the request, last to see the error)
//!     ↓
//! inner layers
//!     ↓
//! raw transport (performs the HTTP call)
//! ```
//!
//! `layers` is stored outermost-first, so the most recently added layer wraps
//! everything added before it. `build()` applies them in reverse:
//!
//! ```text
//! TransportBuilder::new(raw).layer(a).with_retry(&cfg)
//!
//! Storage: [Retry, a]
//! Result:  Retry(a(raw))
//! ```

use std::sync::Arc;

use fmp_core::{Middleware, Transport};
use fmp_types::RetryConfig;
use serde_json::json;

use crate::retry::RetryMiddleware;

const RETRY_LAYER: &str = "RetryMiddleware";

/// Composes a raw transport with layered wrappers.
pub struct TransportBuilder {
    raw: Arc<dyn Transport>,
    /// Outermost first.
    layers: Vec<Box<dyn Middleware>>,
}

impl TransportBuilder {
    /// Start from an unwrapped transport.
    #[must_use]
    pub fn new(raw: Arc<dyn Transport>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the retry layer at the outermost position.
    #[must_use]
    pub fn with_retry(mut self, cfg: &RetryConfig) -> Self {
        self.layers.retain(|m| m.name() != RETRY_LAYER);
        self.layers.insert(0, Box::new(RetryMiddleware::new(*cfg)));
        self
    }

    /// Remove the retry layer if present.
    #[must_use]
    pub fn without_retry(mut self) -> Self {
        self.layers.retain(|m| m.name() != RETRY_LAYER);
        self
    }

    /// Add an arbitrary layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Layer names, outermost first.
    #[must_use]
    pub fn layer_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|m| m.name()).collect()
    }

    /// Snapshot of the stack for diagnostics: each layer's name and config,
    /// outermost first, ending with the raw transport.
    #[must_use]
    pub fn describe(&self) -> serde_json::Value {
        let mut out: Vec<serde_json::Value> = self
            .layers
            .iter()
            .map(|m| json!({ "name": m.name(), "config": m.config_json() }))
            .collect();
        out.push(json!({ "name": "RawTransport", "config": { "name": self.raw.name() } }));
        serde_json::Value::Array(out)
    }

    /// Apply the layers innermost-first and return the wrapped transport.
    #[must_use]
    pub fn build(self) -> Arc<dyn Transport> {
        let mut acc = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
