use fmp::{ApiHealth, FmpError, RateLimitInfo};
use fmp_mock::{MockBehavior, MockTransport};

use crate::helpers::*;

const PROBE: &str = "/v3/quote/AAPL";

#[tokio::test]
async fn healthy_upstream_is_active() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    let status = fmp.check_status().await;
    assert!(status.is_active());
    assert_eq!(status.remaining, None);
    assert_eq!(ctl.calls(PROBE).await, 1);
}

#[tokio::test]
async fn rate_limited_probe_reports_headers_without_retry() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    let limited = FmpError::http(429, "Limit Reach").with_rate_limit(Some(RateLimitInfo {
        remaining: Some(0),
        reset: Some("1700000060".into()),
    }));
    ctl.set_behavior(PROBE, MockBehavior::Fail(limited)).await;
    let fmp = service(mock);

    let status = fmp.check_status().await;
    assert_eq!(status.status, ApiHealth::Error);
    assert_eq!(status.remaining, Some(0));
    assert_eq!(status.reset_time.as_deref(), Some("1700000060"));
    assert_eq!(ctl.calls(PROBE).await, 1, "status probe must not retry");

    let json = serde_json::to_value(&status).expect("serialize");
    assert_eq!(json["status"], "error");
    assert_eq!(json["resetTime"], "1700000060");
}

#[tokio::test]
async fn network_failure_reports_error_without_headers() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    ctl.set_behavior(PROBE, MockBehavior::Fail(FmpError::network("dns")))
        .await;
    let fmp = service(mock);
    let status = fmp.check_status().await;
    assert!(!status.is_active());
    assert_eq!(status.remaining, None);
    assert_eq!(status.reset_time, None);
    assert_eq!(ctl.calls(PROBE).await, 1);
}

#[tokio::test]
async fn probe_does_not_touch_quote_cache() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    fmp.stock_quotes(&[AAPL]).await.expect("warm");
    fmp.check_status().await;
    fmp.check_status().await;
    assert_eq!(ctl.calls(PROBE).await, 3);
}
