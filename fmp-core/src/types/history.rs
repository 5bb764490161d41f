use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fmp_types::FmpError;

/// Inclusive calendar range for a historical price request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Build a range.
    ///
    /// # Errors
    /// Returns `FmpError::InvalidArg` when `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, FmpError> {
        if from > to {
            return Err(FmpError::InvalidArg(format!(
                "date range start {from} is after end {to}"
            )));
        }
        Ok(Self { from, to })
    }

    /// First day of the range.
    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    /// Last day of the range.
    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.to
    }
}

/// One daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPrice {
    /// Trading day.
    pub date: NaiveDate,
    /// Open.
    pub open: f64,
    /// High.
    pub high: f64,
    /// Low.
    pub low: f64,
    /// Close.
    pub close: f64,
    /// Split/dividend adjusted close.
    #[serde(default)]
    pub adj_close: Option<f64>,
    /// Volume.
    #[serde(default)]
    pub volume: Option<f64>,
    /// Absolute change over the day.
    #[serde(default)]
    pub change: Option<f64>,
    /// Percent change over the day.
    #[serde(default)]
    pub change_percent: Option<f64>,
    /// Volume-weighted average price.
    #[serde(default)]
    pub vwap: Option<f64>,
}

/// Historical price series for one symbol, newest bar first as sent upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPrices {
    /// Ticker symbol; empty when the upstream returned no series.
    #[serde(default)]
    pub symbol: String,
    /// Daily bars.
    #[serde(default)]
    pub historical: Vec<HistoricalPrice>,
}
