use fmp::FmpApiService;
use fmp_mock::MockTransport;

/// Live service when `FMP_API_KEY` is set and `FMP_EXAMPLES_USE_MOCK` is not,
/// otherwise a service over canned fixtures.
#[must_use]
pub fn get_service() -> FmpApiService {
    let use_mock = std::env::var("FMP_EXAMPLES_USE_MOCK").is_ok()
        || std::env::var("FMP_API_KEY").is_err();
    if use_mock {
        println!("--- (Using fixture transport) ---");
        let (mock, _ctl) = MockTransport::with_fixtures("mock");
        FmpApiService::builder()
            .api_key("demo")
            .transport(mock)
            .build()
            .expect("fixture service")
    } else {
        FmpApiService::from_env().expect("FMP_* environment")
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
