//! fmp-http
//!
//! [`HttpTransport`] performs authenticated GETs against the Financial Modeling
//! Prep API. It attaches the API key as the `apikey` query parameter and a fixed
//! timeout to every call, and turns every way a call can go wrong into an
//! [`FmpError`]:
//!
//! - no response (connect, DNS, timeout, reset): `Network`
//! - non-success status: `Http`, carrying the upstream's `"Error Message"` when
//!   present and any `x-ratelimit-*` headers
//! - success with an empty body: `NoData`
//! - success carrying an error object: `Api`
//!
//! Retrying is not done here; wrap the transport with `fmp-middleware`.
#![warn(missing_docs)]

mod response;

use async_trait::async_trait;
use fmp_core::{
    Endpoint, FmpConfig, FmpError, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER,
    RateLimitInfo, Transport,
};
use reqwest::header::HeaderMap;
use url::Url;

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "apikey";

/// Live transport backed by a shared [`reqwest::Client`].
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Build a transport with its own client using the configured timeout.
    ///
    /// # Errors
    /// Returns `FmpError::Config` if the configuration is invalid or the HTTP
    /// client cannot be constructed.
    pub fn new(cfg: &FmpConfig) -> Result<Self, FmpError> {
        cfg.validate()?;
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| FmpError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, cfg))
    }

    /// Use an existing client. Its own timeout settings apply.
    #[must_use]
    pub fn with_client(client: reqwest::Client, cfg: &FmpConfig) -> Self {
        Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
        }
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &Endpoint) -> Result<Url, FmpError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint.path()))
            .map_err(|e| FmpError::Config(format!("invalid request URL: {e}")))?;
        url.query_pairs_mut()
            .extend_pairs(endpoint.query())
            .append_pair(API_KEY_PARAM, &self.api_key);
        Ok(url)
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

// The URL carries the API key; strip it before the error leaves this crate.
fn network_error(err: reqwest::Error) -> FmpError {
    let kind = if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else {
        "request failed"
    };
    FmpError::network(format!("{kind}: {}", err.without_url()))
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "fmp-http"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fmp_http::get",
            skip(self, endpoint),
            fields(endpoint = %endpoint),
        )
    )]
    async fn get(&self, endpoint: &Endpoint) -> Result<serde_json::Value, FmpError> {
        let url = self.url_for(endpoint)?;
        let resp = self.client.get(url).send().await.map_err(network_error)?;

        let status = resp.status();
        let rate_limit = RateLimitInfo::from_header_values(
            header(resp.headers(), RATE_LIMIT_REMAINING_HEADER),
            header(resp.headers(), RATE_LIMIT_RESET_HEADER),
        );
        let body = resp.text().await.map_err(network_error)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "upstream responded");

        if !status.is_success() {
            let message = response::upstream_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            return Err(FmpError::http(status.as_u16(), message).with_rate_limit(rate_limit));
        }
        response::decode_success(endpoint.path(), &body)
    }
}
