use fmp_core::{Endpoint, FmpError, IndicatorKind, TechnicalIndicators};
use serde_json::Value;

use super::normalize_symbol;
use crate::FmpApiService;
use crate::fanout::FanOut;

/// Value of `kind` in the most recent (first) row.
fn latest(endpoint: &Endpoint, rows: &[Value], kind: IndicatorKind) -> Result<f64, FmpError> {
    rows.first()
        .and_then(|row| row.get(kind.as_str()))
        .and_then(Value::as_f64)
        .ok_or_else(|| FmpError::no_data(endpoint.to_string()))
}

impl FmpApiService {
    /// Latest daily RSI, SMA, EMA, ADX, Williams %R and standard deviation.
    ///
    /// Behavior: the six series are fetched concurrently. A series that fails,
    /// or comes back without a value, reads as `0.0`; the call itself only
    /// fails on invalid input.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a malformed symbol or a zero period.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fmp::router", skip(self))
    )]
    pub async fn technical_indicators(
        &self,
        symbol: &str,
        period: u32,
    ) -> Result<TechnicalIndicators, FmpError> {
        let symbol = normalize_symbol(symbol)?;
        if period == 0 {
            return Err(FmpError::InvalidArg("period must be at least 1".into()));
        }
        let path = format!("/v3/technical_indicator/1day/{symbol}");

        let fan = IndicatorKind::ALL
            .into_iter()
            .fold(FanOut::new(), |fan, kind| {
                let endpoint = Endpoint::new(path.as_str())
                    .param("type", kind.as_str())
                    .param("period", period);
                fan.branch(kind, 0.0, async move {
                    let rows: Vec<Value> = self.fetch(&endpoint).await?;
                    latest(&endpoint, &rows, kind)
                })
            });

        Ok(fan
            .settle()
            .await
            .merge_into(TechnicalIndicators::default(), |acc, kind, value| {
                acc.set(kind, value);
            }))
    }
}
