use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::status::RateLimitInfo;

/// Unified error type for the FMP workspace.
///
/// Covers network-level failures, upstream HTTP failures, empty payloads,
/// upstream error payloads, decoding problems, and local validation. The type is
/// `Clone` so a single in-flight failure can be handed to every caller waiting on
/// the same deduplicated request.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FmpError {
    /// The request never produced an HTTP response (connect, DNS, timeout, reset).
    #[error("network error: {message}")]
    Network {
        /// Human-readable description of the failure.
        message: String,
    },

    /// The upstream answered with a non-success HTTP status.
    #[error("upstream returned HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Upstream error payload message, or the canonical status reason.
        message: String,
        /// Rate-limit headers captured from the failed response, if any.
        rate_limit: Option<RateLimitInfo>,
    },

    /// The upstream answered successfully but with an empty body.
    #[error("no data received from {endpoint}")]
    NoData {
        /// Endpoint path that produced no data.
        endpoint: String,
    },

    /// The upstream answered 200 with an error payload instead of data.
    #[error("upstream error: {message}")]
    Api {
        /// Message carried in the upstream payload.
        message: String,
    },

    /// The payload could not be decoded into the expected shape.
    #[error("failed to decode {endpoint}: {message}")]
    Decode {
        /// Endpoint path whose payload failed to decode.
        endpoint: String,
        /// Decoder message.
        message: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Missing or malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl FmpError {
    /// Helper: build a `Network` error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Helper: build an `Http` error without rate-limit information.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            rate_limit: None,
        }
    }

    /// Helper: build a `NoData` error for an endpoint path.
    pub fn no_data(endpoint: impl Into<String>) -> Self {
        Self::NoData {
            endpoint: endpoint.into(),
        }
    }

    /// Helper: build a `Decode` error for an endpoint path.
    pub fn decode(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Returns true if a fresh attempt at the same request may succeed.
    ///
    /// Network failures always qualify. HTTP failures qualify for status 429 and
    /// any 5xx. Everything else, including empty payloads, is permanent.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Http { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Rate-limit headers captured on an HTTP failure, if any.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimitInfo> {
        match self {
            Self::Http { rate_limit, .. } => rate_limit.as_ref(),
            _ => None,
        }
    }

    /// Attach rate-limit headers to an `Http` error. Other variants are returned as-is.
    #[must_use]
    pub fn with_rate_limit(self, info: Option<RateLimitInfo>) -> Self {
        match self {
            Self::Http {
                status, message, ..
            } => Self::Http {
                status,
                message,
                rate_limit: info,
            },
            other => other,
        }
    }
}
