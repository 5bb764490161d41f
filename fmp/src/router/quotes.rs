use std::collections::BTreeSet;
use std::sync::Arc;

use fmp_core::{Endpoint, FmpError, StockQuote};

use super::normalize_symbol;
use crate::FmpApiService;
use crate::core::fetch_via;

/// Normalize, de-duplicate, and sort a symbol list so that any ordering or
/// casing of the same set yields the same request.
///
/// # Errors
/// Returns `FmpError::InvalidArg` if any symbol is blank or malformed.
pub fn canonical_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<String>, FmpError> {
    let set: BTreeSet<String> = symbols
        .iter()
        .map(|s| normalize_symbol(s.as_ref()))
        .collect::<Result<_, _>>()?;
    Ok(set.into_iter().collect())
}

impl FmpApiService {
    /// Latest quotes for a set of symbols in one batched request.
    ///
    /// Behavior and trade-offs:
    /// - The symbol set is canonicalized, so `["msft", "AAPL"]` and
    ///   `["AAPL", "MSFT"]` share one cache entry.
    /// - Concurrent callers for the same set share one request; the result is
    ///   kept for the volatile TTL (60s by default) and handed out as the same
    ///   `Arc`.
    /// - An empty list returns an empty result without touching the network.
    /// - Unknown symbols are silently absent from the upstream response.
    ///
    /// # Errors
    /// Returns `InvalidArg` for malformed symbols, else the normalized upstream error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fmp::router", skip(self, symbols), fields(count = symbols.len()))
    )]
    pub async fn stock_quotes<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<Arc<Vec<StockQuote>>, FmpError> {
        let symbols = canonical_symbols(symbols)?;
        if symbols.is_empty() {
            return Ok(Arc::new(Vec::new()));
        }
        let endpoint = Endpoint::new(format!("/v3/quote/{}", symbols.join(",")));
        let key = endpoint.cache_key();
        let transport = Arc::clone(&self.transport);
        self.quotes
            .get_or_fetch(&key, self.cfg.cache.volatile_ttl, move || async move {
                let rows: Vec<StockQuote> = fetch_via(transport.as_ref(), &endpoint).await?;
                Ok(Arc::new(rows))
            })
            .await
    }
}
