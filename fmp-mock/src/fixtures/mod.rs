//! Canned upstream payloads shaped like the provider's JSON responses.
//!
//! [`respond`] routes an [`Endpoint`] to the matching fixture so a
//! [`MockTransport`](crate::MockTransport) can stand in for the live API.

mod company;
mod indicators;
mod macro_data;
mod news;
mod quotes;

use fmp_core::Endpoint;
use serde_json::Value;

pub use company::{analyst_estimates, company_list, profile};
pub use indicators::{indicator_rows, indicator_value};
pub use macro_data::{economic_series, history, movers};
pub use news::{general_news, stock_news};
pub use quotes::{quote, quotes};

/// Fixture payload for `endpoint`, or `None` when no fixture covers it.
#[must_use]
pub fn respond(endpoint: &Endpoint) -> Option<Value> {
    let path = endpoint.path();
    if path == "/v3/stock/list" {
        return Some(company_list());
    }
    if let Some(list) = path.strip_prefix("/v3/quote/") {
        let symbols: Vec<&str> = list.split(',').filter(|s| !s.is_empty()).collect();
        return Some(quotes(&symbols));
    }
    if let Some(symbol) = path.strip_prefix("/v3/profile/") {
        return Some(profile(symbol));
    }
    if let Some(symbol) = path.strip_prefix("/v3/technical_indicator/1day/") {
        let kind = endpoint.query_param("type")?;
        return Some(indicator_rows(symbol, kind));
    }
    if let Some(symbol) = path.strip_prefix("/v3/analyst-estimates/") {
        return Some(analyst_estimates(symbol));
    }
    if path == "/v3/stock_news" {
        let limit = endpoint
            .query_param("limit")
            .and_then(|l| l.parse().ok())
            .unwrap_or(10);
        return Some(stock_news(endpoint.query_param("tickers"), limit));
    }
    if path == "/v4/general_news" {
        return Some(general_news());
    }
    if path == "/v4/economic" {
        return economic_series(endpoint.query_param("name")?);
    }
    if let Some(symbol) = path.strip_prefix("/v3/historical-price-full/") {
        return Some(history(
            symbol,
            endpoint.query_param("from"),
            endpoint.query_param("to"),
        ));
    }
    if let Some(board) = path.strip_prefix("/v3/stock_market/") {
        return movers(board);
    }
    None
}
