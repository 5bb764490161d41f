use serde::{Deserialize, Serialize};

/// The indicator series merged into [`TechnicalIndicators`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    /// Relative strength index.
    Rsi,
    /// Simple moving average.
    Sma,
    /// Exponential moving average.
    Ema,
    /// Average directional index.
    Adx,
    /// Williams %R.
    Williams,
    /// Rolling standard deviation.
    StandardDeviation,
}

impl IndicatorKind {
    /// Every indicator, in the order they are requested.
    pub const ALL: [Self; 6] = [
        Self::Rsi,
        Self::Sma,
        Self::Ema,
        Self::Adx,
        Self::Williams,
        Self::StandardDeviation,
    ];

    /// Upstream `type` parameter, which is also the value field in each row.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rsi => "rsi",
            Self::Sma => "sma",
            Self::Ema => "ema",
            Self::Adx => "adx",
            Self::Williams => "williams",
            Self::StandardDeviation => "standardDeviation",
        }
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latest value of each indicator for one symbol.
///
/// A field is `0.0` when its series could not be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalIndicators {
    /// Relative strength index.
    pub rsi: f64,
    /// Simple moving average.
    pub sma: f64,
    /// Exponential moving average.
    pub ema: f64,
    /// Average directional index.
    pub adx: f64,
    /// Williams %R.
    pub williams: f64,
    /// Rolling standard deviation.
    pub standard_deviation: f64,
}

impl TechnicalIndicators {
    /// Value of a single indicator.
    #[must_use]
    pub const fn get(&self, kind: IndicatorKind) -> f64 {
        match kind {
            IndicatorKind::Rsi => self.rsi,
            IndicatorKind::Sma => self.sma,
            IndicatorKind::Ema => self.ema,
            IndicatorKind::Adx => self.adx,
            IndicatorKind::Williams => self.williams,
            IndicatorKind::StandardDeviation => self.standard_deviation,
        }
    }

    /// Set a single indicator.
    pub const fn set(&mut self, kind: IndicatorKind, value: f64) {
        match kind {
            IndicatorKind::Rsi => self.rsi = value,
            IndicatorKind::Sma => self.sma = value,
            IndicatorKind::Ema => self.ema = value,
            IndicatorKind::Adx => self.adx = value,
            IndicatorKind::Williams => self.williams = value,
            IndicatorKind::StandardDeviation => self.standard_deviation = value,
        }
    }
}
