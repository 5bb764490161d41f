use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The macro series merged into [`EconomicIndicators`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EconomicSeries {
    /// Gross domestic product.
    Gdp,
    /// Consumer price index.
    Cpi,
    /// Unemployment rate.
    UnemploymentRate,
    /// Effective federal funds rate.
    FederalFunds,
}

impl EconomicSeries {
    /// Every series, in the order they are requested.
    pub const ALL: [Self; 4] = [
        Self::Gdp,
        Self::Cpi,
        Self::UnemploymentRate,
        Self::FederalFunds,
    ];

    /// Upstream `name` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gdp => "GDP",
            Self::Cpi => "CPI",
            Self::UnemploymentRate => "unemploymentRate",
            Self::FederalFunds => "federalFunds",
        }
    }
}

impl std::fmt::Display for EconomicSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation of a macro series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicDataPoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Observed value.
    pub value: f64,
}

/// The four macro series. A series is empty when it could not be fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicIndicators {
    /// Gross domestic product.
    pub gdp: Vec<EconomicDataPoint>,
    /// Consumer price index.
    pub inflation: Vec<EconomicDataPoint>,
    /// Unemployment rate.
    pub unemployment: Vec<EconomicDataPoint>,
    /// Effective federal funds rate.
    pub interest_rate: Vec<EconomicDataPoint>,
}

impl EconomicIndicators {
    /// Mutable access to the vector backing a series.
    pub fn series_mut(&mut self, series: EconomicSeries) -> &mut Vec<EconomicDataPoint> {
        match series {
            EconomicSeries::Gdp => &mut self.gdp,
            EconomicSeries::Cpi => &mut self.inflation,
            EconomicSeries::UnemploymentRate => &mut self.unemployment,
            EconomicSeries::FederalFunds => &mut self.interest_rate,
        }
    }
}
