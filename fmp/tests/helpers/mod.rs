// Shared setup so tests can `use helpers::*;`

use std::sync::Arc;

use fmp::{Endpoint, FmpApiService, IndicatorKind};
use fmp_mock::{ManualClock, MockTransport};

pub const AAPL: &str = "AAPL";
#[allow(dead_code)]
pub const MSFT: &str = "MSFT";

/// Service over `mock` with a system clock.
pub fn service(mock: Arc<MockTransport>) -> FmpApiService {
    FmpApiService::builder()
        .api_key("test-key")
        .transport(mock)
        .build()
        .expect("service")
}

/// Service over `mock` whose cache expiry follows `clock`.
#[allow(dead_code)]
pub fn service_with_clock(mock: Arc<MockTransport>, clock: Arc<ManualClock>) -> FmpApiService {
    FmpApiService::builder()
        .api_key("test-key")
        .transport(mock)
        .clock(clock)
        .build()
        .expect("service")
}

/// Exact request issued for one indicator series.
#[allow(dead_code)]
pub fn indicator_endpoint(symbol: &str, kind: IndicatorKind, period: u32) -> Endpoint {
    Endpoint::new(format!("/v3/technical_indicator/1day/{symbol}"))
        .param("type", kind.as_str())
        .param("period", period)
}
