use fmp::{EconomicIndicators, FmpError, IndicatorKind, MarketMovers, TechnicalIndicators};
use fmp_mock::{MockBehavior, MockTransport, fixtures};

use crate::helpers::*;

#[tokio::test(start_paused = true)]
async fn adx_failure_reads_zero_and_others_populate() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    ctl.set_behavior(
        &indicator_endpoint(AAPL, IndicatorKind::Adx, 14).cache_key(),
        MockBehavior::Fail(FmpError::http(500, "Internal Server Error")),
    )
    .await;
    let fmp = service(mock);

    let ind = fmp.technical_indicators(AAPL, 14).await.expect("never fails");

    assert_eq!(ind.adx, 0.0);
    for kind in IndicatorKind::ALL {
        if kind != IndicatorKind::Adx {
            assert_eq!(ind.get(kind), fixtures::indicator_value(kind.as_str()), "{kind}");
        }
    }
    // adx was retried to the cap, the others succeeded first time.
    let adx_key = indicator_endpoint(AAPL, IndicatorKind::Adx, 14).cache_key();
    assert_eq!(ctl.calls(&adx_key).await, 3);
    assert_eq!(ctl.total_calls().await, 5 + 3);
}

#[tokio::test]
async fn each_indicator_requests_its_type_and_period() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    fmp.technical_indicators("aapl", 20).await.expect("ok");

    for kind in IndicatorKind::ALL {
        let key = indicator_endpoint(AAPL, kind, 20).cache_key();
        assert_eq!(ctl.calls(&key).await, 1, "{key}");
    }
}

#[tokio::test]
async fn rows_without_the_field_fall_back() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    ctl.set_behavior(
        &indicator_endpoint(AAPL, IndicatorKind::Rsi, 14).cache_key(),
        MockBehavior::Return(serde_json::json!([])),
    )
    .await;
    let fmp = service(mock);
    let ind = fmp.technical_indicators(AAPL, 14).await.expect("ok");
    assert_eq!(ind.rsi, 0.0);
    assert_eq!(ind.sma, fixtures::indicator_value("sma"));
}

#[tokio::test(start_paused = true)]
async fn all_indicators_failing_gives_defaults() {
    let (mock, _ctl) = MockTransport::new_with_controller("mock");
    let fmp = service(mock);
    let ind = fmp.technical_indicators(AAPL, 14).await.expect("ok");
    assert_eq!(ind, TechnicalIndicators::default());
}

#[tokio::test]
async fn zero_period_is_invalid() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let fmp = service(mock);
    let err = fmp.technical_indicators(AAPL, 0).await.expect_err("invalid");
    assert!(matches!(err, FmpError::InvalidArg(_)));
    assert_eq!(ctl.total_calls().await, 0);
}

#[tokio::test]
async fn economic_series_merge_with_empty_fallback() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    let cpi = fmp::Endpoint::new("/v4/economic").param("name", "CPI");
    ctl.set_behavior(
        &cpi.cache_key(),
        MockBehavior::Fail(FmpError::http(404, "Not Found")),
    )
    .await;
    let fmp = service(mock);

    let eco = fmp.economic_indicators().await;
    assert!(eco.inflation.is_empty());
    assert_eq!(eco.gdp.len(), 2);
    assert_eq!(eco.unemployment[0].value, 3.9);
    assert_eq!(eco.interest_rate[0].value, 5.33);
    assert_eq!(ctl.calls("/v4/economic").await, 4);
}

#[tokio::test(start_paused = true)]
async fn economic_total_outage_is_all_empty() {
    let (mock, ctl) = MockTransport::new_with_controller("mock");
    ctl.set_behavior("/v4/economic", MockBehavior::Fail(FmpError::network("down")))
        .await;
    let fmp = service(mock);
    assert_eq!(fmp.economic_indicators().await, EconomicIndicators::default());
    assert_eq!(ctl.calls("/v4/economic").await, 4 * 3);
}

#[tokio::test]
async fn movers_merge_with_empty_fallback() {
    let (mock, ctl) = MockTransport::with_fixtures("mock");
    ctl.set_behavior("/v3/stock_market/losers", MockBehavior::Empty)
        .await;
    let fmp = service(mock);

    let movers = fmp.market_movers().await;
    assert!(movers.losers.is_empty());
    assert_eq!(movers.gainers[0].symbol, "SMCI");
    assert_eq!(movers.most_active[0].symbol, "TSLA");
    assert_ne!(movers, MarketMovers::default());
}
