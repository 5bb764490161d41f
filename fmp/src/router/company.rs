use std::sync::Arc;

use fmp_core::{Company, Endpoint, FmpError};

use crate::FmpApiService;
use crate::core::fetch_via;

const STOCK_LIST: &str = "/v3/stock/list";

impl FmpApiService {
    /// Directory of every listed security.
    ///
    /// Behavior: concurrent callers share one upstream request and the result is
    /// kept for the reference TTL (24h by default). The returned `Arc` is shared
    /// with other callers for as long as the entry lives.
    ///
    /// # Errors
    /// Returns the normalized upstream error; failures are never cached.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fmp::router", skip(self))
    )]
    pub async fn company_list(&self) -> Result<Arc<Vec<Company>>, FmpError> {
        let endpoint = Endpoint::new(STOCK_LIST);
        let key = endpoint.cache_key();
        let transport = Arc::clone(&self.transport);
        self.companies
            .get_or_fetch(&key, self.cfg.cache.reference_ttl, move || async move {
                let rows: Vec<Company> = fetch_via(transport.as_ref(), &endpoint).await?;
                Ok(Arc::new(rows))
            })
            .await
    }
}
