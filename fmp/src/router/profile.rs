use fmp_core::{CompanyProfile, Endpoint, FmpError};

use super::normalize_symbol;
use crate::FmpApiService;

impl FmpApiService {
    /// Company profile for one symbol. Not cached.
    ///
    /// # Errors
    /// Returns `NoData` when the upstream knows no such symbol, `InvalidArg` for
    /// a malformed symbol, else the normalized upstream error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fmp::router", skip(self))
    )]
    pub async fn company_profile(&self, symbol: &str) -> Result<CompanyProfile, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let endpoint = Endpoint::new(format!("/v3/profile/{symbol}"));
        let rows: Vec<CompanyProfile> = self.fetch(&endpoint).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| FmpError::no_data(endpoint.path()))
    }
}
