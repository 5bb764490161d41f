use std::sync::Arc;
use std::time::Duration;

use fmp::FmpError;
use fmp_mock::{ManualClock, MockBehavior, MockTransport};
use futures::future::join_all;

use crate::helpers::*;

const LIST: &str = "/v3/stock/list";

#[tokio::test]
async fn directory_is_kept_for_a_day() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let clock = Arc::new(ManualClock::new());
    let fmp = service_with_clock(mock, Arc::clone(&clock));

    let first = fmp.company_list().await.expect("list");
    assert!(first.iter().any(|c| c.symbol == "SPY" && c.kind.as_deref() == Some("etf")));

    clock.advance(Duration::from_secs(23 * 60 * 60));
    let again = fmp.company_list().await.expect("cached");
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(ctl.calls(LIST).await, 1);

    clock.advance(Duration::from_secs(60 * 60));
    fmp.company_list().await.expect("refetched");
    assert_eq!(ctl.calls(LIST).await, 2);
}

#[tokio::test(start_paused = true)]
async fn concurrent_callers_share_a_failure() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    ctl.set_behavior(LIST, MockBehavior::Empty).await;
    ctl.set_latency(Some(Duration::from_millis(50))).await;
    let fmp = service(mock);

    let results = join_all((0..8).map(|_| fmp.company_list())).await;
    for r in results {
        assert_eq!(r.expect_err("shared failure"), FmpError::no_data(LIST));
    }
    // NoData is not retryable, so exactly one upstream call.
    assert_eq!(ctl.calls(LIST).await, 1);
}

#[tokio::test]
async fn malformed_payload_is_decode_error() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    ctl.set_behavior(
        LIST,
        MockBehavior::Return(serde_json::json!({ "unexpected": true })),
    )
    .await;
    let fmp = service(mock);
    let err = fmp.company_list().await.expect_err("decode");
    assert!(matches!(err, FmpError::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn purge_expired_drops_stale_entries() {
    let (mock, _ctl) = MockTransport::with_fixtures("mock");
    let clock = Arc::new(ManualClock::new());
    let fmp = service_with_clock(mock, Arc::clone(&clock));

    fmp.company_list().await.expect("list");
    fmp.stock_quotes(&[AAPL]).await.expect("quote");
    clock.advance(Duration::from_secs(61));
    assert_eq!(fmp.purge_expired(), 1, "only the quote entry has expired");
}
