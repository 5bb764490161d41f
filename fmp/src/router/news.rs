use fmp_core::{Endpoint, FmpError, NewsArticle};

use super::normalize_symbol;
use crate::FmpApiService;

impl FmpApiService {
    /// Recent stock news, optionally filtered to one ticker.
    ///
    /// A `limit` of zero returns an empty list without a request.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a malformed symbol, else the normalized upstream error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fmp::router", skip(self))
    )]
    pub async fn stock_news(
        &self,
        symbol: Option<&str>,
        limit: usize,
    ) -> Result<Vec<NewsArticle>, FmpError> {
        let tickers = symbol.map(normalize_symbol).transpose()?;
        if limit == 0 {
            return Ok(Vec::new());
        }
        let endpoint = Endpoint::new("/v3/stock_news")
            .param_opt("tickers", tickers)
            .param("limit", limit);
        let mut rows: Vec<NewsArticle> = self.fetch(&endpoint).await?;
        rows.truncate(limit);
        Ok(rows)
    }

    /// General market news, at most `limit` articles.
    ///
    /// The upstream only pages in fixed-size chunks, so the first page is
    /// fetched and truncated locally.
    ///
    /// # Errors
    /// Returns the normalized upstream error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fmp::router", skip(self))
    )]
    pub async fn general_news(&self, limit: usize) -> Result<Vec<NewsArticle>, FmpError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let endpoint = Endpoint::new("/v4/general_news").param("page", 0);
        let mut rows: Vec<NewsArticle> = self.fetch(&endpoint).await?;
        rows.truncate(limit);
        Ok(rows)
    }
}
