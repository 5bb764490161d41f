use chrono::NaiveDate;
use fmp_core::{DateRange, Endpoint, FmpError, HistoricalPrices};

use super::normalize_symbol;
use crate::FmpApiService;

impl FmpApiService {
    /// Daily price history for `symbol` between `from` and `to`, inclusive.
    ///
    /// An empty range on the upstream side yields an empty series rather than
    /// an error.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `from` is after `to` or the symbol is malformed,
    /// else the normalized upstream error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fmp::router", skip(self))
    )]
    pub async fn historical_prices(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<HistoricalPrices, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        let range = DateRange::new(from, to)?;
        let endpoint = Endpoint::new(format!("/v3/historical-price-full/{symbol}"))
            .param("from", range.from())
            .param("to", range.to());
        let mut prices: HistoricalPrices = self.fetch(&endpoint).await?;
        if prices.symbol.is_empty() {
            prices.symbol = symbol;
        }
        Ok(prices)
    }
}
