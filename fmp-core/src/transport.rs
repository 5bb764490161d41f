//! The transport contract every upstream connector implements.

use async_trait::async_trait;

use crate::endpoint::Endpoint;
use fmp_types::FmpError;

/// Issues one upstream GET for an [`Endpoint`] and returns the decoded JSON body.
///
/// Implementations attach credentials and timeouts themselves and map every
/// failure into [`FmpError`] so that retry classification works uniformly:
/// - no HTTP response at all: [`FmpError::Network`]
/// - non-success status: [`FmpError::Http`] (with rate-limit headers when present)
/// - success with an empty body: [`FmpError::NoData`]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Stable transport name for logging and introspection.
    fn name(&self) -> &'static str;

    /// Perform a single attempt against the upstream.
    async fn get(&self, endpoint: &Endpoint) -> Result<serde_json::Value, FmpError>;
}
