use serde::{Deserialize, Serialize};

/// Consensus analyst estimates for one fiscal period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystEstimate {
    /// Ticker symbol.
    pub symbol: String,
    /// Fiscal period end date as reported upstream.
    pub date: String,
    /// Low revenue estimate.
    #[serde(default)]
    pub estimated_revenue_low: Option<f64>,
    /// High revenue estimate.
    #[serde(default)]
    pub estimated_revenue_high: Option<f64>,
    /// Average revenue estimate.
    #[serde(default)]
    pub estimated_revenue_avg: Option<f64>,
    /// Low EPS estimate.
    #[serde(default)]
    pub estimated_eps_low: Option<f64>,
    /// High EPS estimate.
    #[serde(default)]
    pub estimated_eps_high: Option<f64>,
    /// Average EPS estimate.
    #[serde(default)]
    pub estimated_eps_avg: Option<f64>,
    /// Average net income estimate.
    #[serde(default)]
    pub estimated_net_income_avg: Option<f64>,
    /// Number of analysts contributing revenue estimates.
    #[serde(default)]
    pub number_analyst_estimated_revenue: Option<u32>,
    /// Number of analysts contributing EPS estimates.
    #[serde(default)]
    pub number_analysts_estimated_eps: Option<u32>,
}
