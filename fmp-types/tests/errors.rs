use fmp_types::{ApiHealth, ApiStatus, FmpError, RateLimitInfo};

#[test]
fn network_failures_are_retryable() {
    assert!(FmpError::network("connection reset").is_retryable());
}

#[test]
fn server_errors_and_rate_limits_are_retryable() {
    for status in [500u16, 502, 503, 504, 599, 429] {
        assert!(FmpError::http(status, "x").is_retryable(), "status {status}");
    }
}

#[test]
fn client_errors_are_permanent() {
    for status in [400u16, 401, 403, 404, 422] {
        assert!(!FmpError::http(status, "x").is_retryable(), "status {status}");
    }
}

#[test]
fn empty_payload_and_local_errors_are_permanent() {
    assert!(!FmpError::no_data("/v3/quote/AAPL").is_retryable());
    assert!(!FmpError::decode("/v3/quote/AAPL", "bad").is_retryable());
    assert!(!FmpError::Api { message: "Limit Reach".into() }.is_retryable());
    assert!(!FmpError::InvalidArg("x".into()).is_retryable());
    assert!(!FmpError::Config("x".into()).is_retryable());
}

#[test]
fn rate_limit_survives_attachment() {
    let info = RateLimitInfo::from_header_values(Some("0"), Some("1700000000"));
    let err = FmpError::http(429, "Too Many Requests").with_rate_limit(info.clone());
    assert_eq!(err.status(), Some(429));
    assert_eq!(err.rate_limit(), info.as_ref());

    let other = FmpError::network("x").with_rate_limit(info);
    assert!(other.rate_limit().is_none());
}

#[test]
fn rate_limit_header_parsing() {
    assert!(RateLimitInfo::from_header_values(None, None).is_none());
    assert!(RateLimitInfo::from_header_values(Some("n/a"), Some("  ")).is_none());

    let info = RateLimitInfo::from_header_values(Some(" 42 "), None).expect("remaining only");
    assert_eq!(info.remaining, Some(42));
    assert_eq!(info.reset, None);
}

#[test]
fn api_status_serializes_in_camel_case_and_omits_absent_fields() {
    let active = serde_json::to_value(ApiStatus::active()).expect("serialize");
    assert_eq!(active, serde_json::json!({ "status": "active" }));

    let info = RateLimitInfo {
        remaining: Some(0),
        reset: Some("2024-01-01T00:00:00Z".into()),
    };
    let err = ApiStatus::error(Some(&info));
    assert_eq!(err.status, ApiHealth::Error);
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "status": "error",
            "remaining": 0,
            "resetTime": "2024-01-01T00:00:00Z"
        })
    );
}
