use serde::{Deserialize, Serialize};

/// One row of the upstream company directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Ticker symbol.
    pub symbol: String,
    /// Company or fund name.
    #[serde(default)]
    pub name: Option<String>,
    /// Last known price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Full exchange name.
    #[serde(default)]
    pub exchange: Option<String>,
    /// Short exchange code, e.g. `NASDAQ`.
    #[serde(default)]
    pub exchange_short_name: Option<String>,
    /// Security type as reported upstream (`stock`, `etf`, `trust`, ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Company profile as returned by the single-symbol profile endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Ticker symbol.
    pub symbol: String,
    /// Registered company name.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Last price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Beta versus the market.
    #[serde(default)]
    pub beta: Option<f64>,
    /// Average volume.
    #[serde(default)]
    pub vol_avg: Option<f64>,
    /// Market capitalization.
    #[serde(default)]
    pub mkt_cap: Option<f64>,
    /// Last dividend.
    #[serde(default)]
    pub last_div: Option<f64>,
    /// 52-week range as a display string, e.g. `"124.17-199.62"`.
    #[serde(default)]
    pub range: Option<String>,
    /// Reporting currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Full exchange name.
    #[serde(default)]
    pub exchange: Option<String>,
    /// Short exchange code.
    #[serde(default)]
    pub exchange_short_name: Option<String>,
    /// Industry classification.
    #[serde(default)]
    pub industry: Option<String>,
    /// Sector classification.
    #[serde(default)]
    pub sector: Option<String>,
    /// Country of domicile.
    #[serde(default)]
    pub country: Option<String>,
    /// Company website.
    #[serde(default)]
    pub website: Option<String>,
    /// Business description.
    #[serde(default)]
    pub description: Option<String>,
    /// Chief executive.
    #[serde(default)]
    pub ceo: Option<String>,
    /// Logo URL.
    #[serde(default)]
    pub image: Option<String>,
    /// IPO date as reported upstream.
    #[serde(default)]
    pub ipo_date: Option<String>,
}
