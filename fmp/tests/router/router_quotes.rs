use std::sync::Arc;
use std::time::Duration;

use fmp::FmpError;
use fmp_mock::{ManualClock, MockBehavior, MockTransport};
use futures::future::join_all;
use serde_json::json;

use crate::helpers::*;

const BATCH: &str = "/v3/quote/AAPL,MSFT";

#[tokio::test]
async fn second_call_within_ttl_returns_same_result_without_request() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let clock = Arc::new(ManualClock::new());
    let fmp = service_with_clock(mock, Arc::clone(&clock));

    let first = fmp.stock_quotes(&[AAPL, MSFT]).await.expect("first");
    clock.advance(Duration::from_secs(59));
    let second = fmp.stock_quotes(&[AAPL, MSFT]).await.expect("second");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), 2);
    assert_eq!(ctl.calls(BATCH).await, 1);
}

#[tokio::test]
async fn call_after_ttl_refetches() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let clock = Arc::new(ManualClock::new());
    let fmp = service_with_clock(mock, Arc::clone(&clock));

    let first = fmp.stock_quotes(&[AAPL, MSFT]).await.expect("first");
    clock.advance(Duration::from_secs(60) + Duration::from_millis(1));
    let second = fmp.stock_quotes(&[AAPL, MSFT]).await.expect("second");

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(ctl.calls(BATCH).await, 2);
}

#[tokio::test]
async fn symbol_order_and_case_share_one_entry() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);

    let a = fmp.stock_quotes(&["msft", "AAPL"]).await.expect("a");
    let b = fmp.stock_quotes(&["AAPL", "MSFT", "aapl"]).await.expect("b");
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(ctl.total_calls().await, 1);
    assert_eq!(ctl.calls(BATCH).await, 1);
}

#[tokio::test]
async fn different_symbol_sets_are_separate_entries() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);

    fmp.stock_quotes(&[AAPL]).await.expect("one");
    fmp.stock_quotes(&[AAPL, MSFT]).await.expect("two");
    assert_eq!(ctl.total_calls().await, 2);
}

#[tokio::test(start_paused = true)]
async fn concurrent_identical_requests_issue_one_call() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    ctl.set_latency(Some(Duration::from_millis(200))).await;
    let fmp = service(mock);

    let results = join_all((0..16).map(|_| fmp.stock_quotes(&[AAPL, MSFT]))).await;
    let first = results[0].as_ref().expect("ok");
    for r in &results {
        assert!(Arc::ptr_eq(first, r.as_ref().expect("ok")));
    }
    assert_eq!(ctl.calls(BATCH).await, 1);
}

#[tokio::test]
async fn failure_is_not_cached() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    ctl.script(
        BATCH,
        [
            MockBehavior::Fail(FmpError::http(403, "Forbidden")),
            MockBehavior::Return(json!([{ "symbol": "AAPL" }, { "symbol": "MSFT" }])),
        ],
    )
    .await;
    let fmp = service(mock);

    let err = fmp.stock_quotes(&[AAPL, MSFT]).await.expect_err("first fails");
    assert_eq!(err.status(), Some(403));
    let ok = fmp.stock_quotes(&[AAPL, MSFT]).await.expect("fresh attempt");
    assert_eq!(ok.len(), 2);
    assert_eq!(ctl.calls(BATCH).await, 2);
}

#[tokio::test]
async fn empty_symbol_list_skips_network() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    let fmp = service(mock);
    let none: [&str; 0] = [];
    let got = fmp.stock_quotes(&none).await.expect("empty");
    assert!(got.is_empty());
    assert_eq!(ctl.total_calls().await, 0);
}

#[tokio::test]
async fn blank_symbol_is_invalid() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    let fmp = service(mock);
    let err = fmp.stock_quotes(&["AAPL", "  "]).await.expect_err("blank");
    assert!(matches!(err, FmpError::InvalidArg(_)));
    assert_eq!(ctl.total_calls().await, 0);
}

#[tokio::test]
async fn clear_caches_forces_refetch() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    fmp.stock_quotes(&[AAPL]).await.expect("warm");
    fmp.clear_caches();
    fmp.stock_quotes(&[AAPL]).await.expect("cold");
    assert_eq!(ctl.calls("/v3/quote/AAPL").await, 2);
}

#[tokio::test]
async fn zero_volatile_ttl_disables_retention() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = fmp::FmpApiService::builder()
        .api_key("k")
        .transport(mock)
        .cache(fmp::CacheConfig {
            volatile_ttl: Duration::ZERO,
            ..fmp::CacheConfig::default()
        })
        .build()
        .expect("service");
    fmp.stock_quotes(&[AAPL]).await.expect("1");
    fmp.stock_quotes(&[AAPL]).await.expect("2");
    assert_eq!(ctl.calls("/v3/quote/AAPL").await, 2);
}

#[tokio::test]
async fn stale_symbol_sets_do_not_accumulate() {
    let (mock, _ctl) = MockTransport::with_fixtures("mock");
    let clock = Arc::new(ManualClock::new());
    let fmp = service_with_clock(mock, Arc::clone(&clock));

    for i in 0..28 {
        let pair = [format!("S{i}A"), format!("S{i}B")];
        fmp.stock_quotes(&pair).await.expect("quotes");
    }
    clock.advance(Duration::from_secs(60 * 60));
    fmp.stock_quotes(&[AAPL]).await.expect("unrelated set");

    assert_eq!(fmp.purge_expired(), 0, "expired sets were already dropped");
}
