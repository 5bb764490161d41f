//! Upstream health and rate-limit reporting types.

use serde::{Deserialize, Serialize};

/// Header carrying the number of requests left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
/// Header carrying when the current rate-limit window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate-limit headers reported by the upstream on a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitInfo {
    /// Remaining requests in the current window.
    pub remaining: Option<u64>,
    /// Raw reset value as sent by the upstream (epoch seconds or a timestamp).
    pub reset: Option<String>,
}

impl RateLimitInfo {
    /// Build from raw header values; returns `None` when neither header is present.
    ///
    /// A `remaining` value that is not a non-negative integer is ignored.
    #[must_use]
    pub fn from_header_values(remaining: Option<&str>, reset: Option<&str>) -> Option<Self> {
        let remaining = remaining.and_then(|v| v.trim().parse::<u64>().ok());
        let reset = reset
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        if remaining.is_none() && reset.is_none() {
            return None;
        }
        Some(Self { remaining, reset })
    }
}

/// Health of the upstream as seen by the status probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiHealth {
    /// The probe request succeeded.
    Active,
    /// The probe request failed.
    Error,
}

/// Result of a status probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    /// Probe outcome.
    pub status: ApiHealth,
    /// Remaining requests, when reported on a failed probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u64>,
    /// Rate-limit reset time, when reported on a failed probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_time: Option<String>,
}

impl ApiStatus {
    /// A healthy probe result.
    #[must_use]
    pub const fn active() -> Self {
        Self {
            status: ApiHealth::Active,
            remaining: None,
            reset_time: None,
        }
    }

    /// A failed probe result carrying whatever rate-limit info was available.
    #[must_use]
    pub fn error(rate_limit: Option<&RateLimitInfo>) -> Self {
        Self {
            status: ApiHealth::Error,
            remaining: rate_limit.and_then(|r| r.remaining),
            reset_time: rate_limit.and_then(|r| r.reset.clone()),
        }
    }

    /// Returns true when the probe succeeded.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, ApiHealth::Active)
    }
}
