use serde::{Deserialize, Serialize};

/// Point-in-time quote for one symbol from the batched quote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Last traded price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Change since previous close, in percent.
    #[serde(default, rename = "changesPercentage")]
    pub change_percentage: Option<f64>,
    /// Absolute change since previous close.
    #[serde(default)]
    pub change: Option<f64>,
    /// Session low.
    #[serde(default)]
    pub day_low: Option<f64>,
    /// Session high.
    #[serde(default)]
    pub day_high: Option<f64>,
    /// 52-week high.
    #[serde(default)]
    pub year_high: Option<f64>,
    /// 52-week low.
    #[serde(default)]
    pub year_low: Option<f64>,
    /// Market capitalization.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// 50-day moving average.
    #[serde(default)]
    pub price_avg50: Option<f64>,
    /// 200-day moving average.
    #[serde(default)]
    pub price_avg200: Option<f64>,
    /// Listing exchange.
    #[serde(default)]
    pub exchange: Option<String>,
    /// Session volume.
    #[serde(default)]
    pub volume: Option<f64>,
    /// Average volume.
    #[serde(default)]
    pub avg_volume: Option<f64>,
    /// Session open.
    #[serde(default)]
    pub open: Option<f64>,
    /// Previous session close.
    #[serde(default)]
    pub previous_close: Option<f64>,
    /// Trailing earnings per share.
    #[serde(default)]
    pub eps: Option<f64>,
    /// Trailing price/earnings ratio.
    #[serde(default)]
    pub pe: Option<f64>,
    /// Quote time, epoch seconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
}
