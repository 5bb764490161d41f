use fmp_core::{AnalystEstimate, Endpoint, FmpError};

use super::normalize_symbol;
use crate::FmpApiService;

impl FmpApiService {
    /// Consensus analyst estimates for one symbol, newest period first.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a malformed symbol, else the normalized upstream error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fmp::router", skip(self))
    )]
    pub async fn analyst_estimates(&self, symbol: &str) -> Result<Vec<AnalystEstimate>, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        self.fetch(&Endpoint::new(format!("/v3/analyst-estimates/{symbol}")))
            .await
    }
}
