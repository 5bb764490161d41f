use chrono::NaiveDate;
use fmp::FmpError;
use fmp_mock::{MockBehavior, MockTransport};
use serde_json::json;

use crate::helpers::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

#[tokio::test]
async fn profile_takes_first_row_and_is_not_cached() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);

    let p = fmp.company_profile(" aapl ").await.expect("profile");
    assert_eq!(p.symbol, AAPL);
    assert_eq!(p.sector.as_deref(), Some("Technology"));
    fmp.company_profile(AAPL).await.expect("again");
    assert_eq!(ctl.calls("/v3/profile/AAPL").await, 2);
}

#[tokio::test]
async fn unknown_profile_is_no_data() {
    let (mock, _ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    let err = fmp.company_profile("ZZZZ").await.expect_err("none");
    assert_eq!(err, FmpError::no_data("/v3/profile/ZZZZ"));
}

#[tokio::test]
async fn analyst_estimates_decode() {
    let (mock, _ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    let est = fmp.analyst_estimates(MSFT).await.expect("estimates");
    assert_eq!(est.len(), 2);
    assert_eq!(est[0].symbol, MSFT);
    assert_eq!(est[0].number_analysts_estimated_eps, Some(28));
}

#[tokio::test]
async fn stock_news_passes_ticker_and_limit() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);

    let news = fmp.stock_news(Some("msft"), 3).await.expect("news");
    assert_eq!(news.len(), 3);
    assert!(news.iter().all(|a| a.symbol.as_deref() == Some(MSFT)));

    let req = ctl.requests().await.pop().expect("one request");
    assert_eq!(req.query_param("tickers"), Some(MSFT));
    assert_eq!(req.query_param("limit"), Some("3"));
}

#[tokio::test]
async fn stock_news_without_symbol_omits_tickers() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    fmp.stock_news(None, 5).await.expect("news");
    let req = ctl.requests().await.pop().expect("one request");
    assert_eq!(req.query_param("tickers"), None);
}

#[tokio::test]
async fn zero_limit_skips_network() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    assert!(fmp.stock_news(None, 0).await.expect("empty").is_empty());
    assert!(fmp.general_news(0).await.expect("empty").is_empty());
    assert_eq!(ctl.total_calls().await, 0);
}

#[tokio::test]
async fn general_news_is_truncated_locally() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    let news = fmp.general_news(4).await.expect("news");
    assert_eq!(news.len(), 4);
    let req = ctl.requests().await.pop().expect("one request");
    assert_eq!(req.path(), "/v4/general_news");
    assert_eq!(req.query_param("page"), Some("0"));
}

#[tokio::test]
async fn history_sends_iso_range() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);

    let h = fmp
        .historical_prices(AAPL, d(2024, 1, 3), d(2024, 1, 5))
        .await
        .expect("history");
    assert_eq!(h.symbol, AAPL);
    assert_eq!(h.historical.len(), 3);
    assert_eq!(h.historical[0].date, d(2024, 1, 5));

    let req = ctl.requests().await.pop().expect("one request");
    assert_eq!(req.query_param("from"), Some("2024-01-03"));
    assert_eq!(req.query_param("to"), Some("2024-01-05"));
}

#[tokio::test]
async fn history_empty_object_is_empty_series() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    ctl.set_behavior(
        "/v3/historical-price-full/AAPL",
        MockBehavior::Return(json!({})),
    )
    .await;
    let fmp = service(mock);
    let h = fmp
        .historical_prices(AAPL, d(2030, 1, 1), d(2030, 1, 31))
        .await
        .expect("empty is not an error");
    assert_eq!(h.symbol, AAPL);
    assert!(h.historical.is_empty());
}

#[tokio::test]
async fn inverted_history_range_is_rejected_before_network() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    let err = fmp
        .historical_prices(AAPL, d(2024, 2, 1), d(2024, 1, 1))
        .await
        .expect_err("inverted");
    assert!(matches!(err, FmpError::InvalidArg(_)));
    assert_eq!(ctl.total_calls().await, 0);
}

#[tokio::test]
async fn malformed_symbol_is_rejected_before_network() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    assert!(matches!(
        fmp.company_profile("AAPL/../x").await,
        Err(FmpError::InvalidArg(_))
    ));
    assert!(matches!(
        fmp.analyst_estimates("").await,
        Err(FmpError::InvalidArg(_))
    ));
    assert!(matches!(
        fmp.stock_news(Some(" "), 5).await,
        Err(FmpError::InvalidArg(_))
    ));
    assert_eq!(ctl.total_calls().await, 0);
}
