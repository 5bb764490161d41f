use std::time::Duration;

use fmp::{FmpError, RetryConfig};
use fmp_mock::{MockBehavior, MockTransport};
use serde_json::json;
use tokio::time::Instant;

use crate::helpers::*;

#[tokio::test(start_paused = true)]
async fn two_503s_then_200_succeeds_after_three_seconds() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    ctl.script(
        "/v3/profile/AAPL",
        [
            MockBehavior::Fail(FmpError::http(503, "Service Unavailable")),
            MockBehavior::Fail(FmpError::http(503, "Service Unavailable")),
            MockBehavior::Return(json!([{ "symbol": "AAPL", "companyName": "Apple Inc." }])),
        ],
    )
    .await;
    let fmp = service(mock);

    let started = Instant::now();
    let p = fmp.company_profile(AAPL).await.expect("third attempt wins");
    let elapsed = started.elapsed();

    assert_eq!(p.company_name.as_deref(), Some("Apple Inc."));
    assert_eq!(ctl.calls("/v3/profile/AAPL").await, 3);
    assert!(elapsed >= Duration::from_secs(3), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(3100), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn unauthorized_fails_immediately() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    ctl.set_behavior(
        "/v3/analyst-estimates/AAPL",
        MockBehavior::Fail(FmpError::http(401, "Invalid API KEY.")),
    )
    .await;
    let fmp = service(mock);

    let started = Instant::now();
    let err = fmp.analyst_estimates(AAPL).await.expect_err("401");
    assert_eq!(err.status(), Some(401));
    assert_eq!(ctl.calls("/v3/analyst-estimates/AAPL").await, 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn exhausted_retries_surface_last_error() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    ctl.set_behavior(
        "/v4/general_news",
        MockBehavior::Fail(FmpError::http(502, "Bad Gateway")),
    )
    .await;
    let fmp = service(mock);

    let err = fmp.general_news(5).await.expect_err("exhausted");
    assert_eq!(err, FmpError::http(502, "Bad Gateway"));
    assert_eq!(ctl.calls("/v4/general_news").await, 3);
}

#[tokio::test(start_paused = true)]
async fn attempt_cap_is_configurable() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    ctl.set_behavior("/v3/stock/list", MockBehavior::Fail(FmpError::network("reset")))
        .await;
    let fmp = fmp::FmpApiService::builder()
        .api_key("k")
        .transport(mock)
        .retry(RetryConfig {
            max_attempts: 5,
            base_delay: Duration::from_millis(10),
            ..RetryConfig::default()
        })
        .build()
        .expect("service");

    fmp.company_list().await.expect_err("exhausted");
    assert_eq!(ctl.calls("/v3/stock/list").await, 5);
}

#[tokio::test(start_paused = true)]
async fn dedup_waiters_see_result_after_retries() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    ctl.script(
        "/v3/quote/AAPL",
        [
            MockBehavior::Fail(FmpError::http(429, "Limit Reach")),
            MockBehavior::Return(json!([{ "symbol": "AAPL", "price": 190.0 }])),
        ],
    )
    .await;
    let fmp = service(mock);

    let (a, b) = tokio::join!(fmp.stock_quotes(&[AAPL]), fmp.stock_quotes(&[AAPL]));
    assert_eq!(a.expect("a")[0].price, Some(190.0));
    assert_eq!(b.expect("b")[0].price, Some(190.0));
    assert_eq!(ctl.calls("/v3/quote/AAPL").await, 2);
}
