use fmp_core::{ApiStatus, Endpoint};

use crate::FmpApiService;

/// Lightweight request known to succeed on any valid key.
const PROBE_PATH: &str = "/v3/quote/AAPL";

impl FmpApiService {
    /// Probe upstream health with a single request.
    ///
    /// Behavior: bypasses retry and caching so the answer reflects the upstream
    /// right now. On failure the rate-limit headers of the failed response, if
    /// any, are reported.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fmp::router", skip(self))
    )]
    pub async fn check_status(&self) -> ApiStatus {
        match self.raw.get(&Endpoint::new(PROBE_PATH)).await {
            Ok(_) => {
                #[cfg(feature = "tracing")]
                tracing::info!("upstream active");
                ApiStatus::active()
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "upstream status probe failed");
                ApiStatus::error(err.rate_limit())
            }
        }
    }
}
