use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use fmp_core::{Endpoint, FmpError, Transport};
use tokio::sync::Mutex;

use crate::fixtures;

/// Instruction for how one request to a path should behave.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return the provided payload.
    Return(serde_json::Value),
    /// Fail with the provided error.
    Fail(FmpError),
    /// Fail with [`FmpError::NoData`], as an empty upstream body would.
    Empty,
    /// Never complete (simulate a stalled connection).
    Hang,
}

#[derive(Default)]
struct InternalState {
    /// Scripts keyed by path or full cache key; the last behavior of a script
    /// repeats once reached.
    rules: HashMap<String, VecDeque<MockBehavior>>,
    calls: HashMap<String, u32>,
    requests: Vec<Endpoint>,
    latency: Option<Duration>,
    serve_fixtures: bool,
}

impl InternalState {
    /// The most specific script wins: full cache key first, then bare path.
    fn next_behavior(&mut self, endpoint: &Endpoint) -> Option<MockBehavior> {
        let key = endpoint.cache_key();
        let rule = if self.rules.contains_key(&key) {
            key
        } else {
            endpoint.path().to_string()
        };
        let script = self.rules.get_mut(&rule)?;
        if script.len() > 1 {
            script.pop_front()
        } else {
            script.front().cloned()
        }
    }
}

/// Handle used by tests to script a [`MockTransport`] and inspect its traffic.
#[derive(Clone)]
pub struct MockController {
    state: Arc<Mutex<InternalState>>,
}

impl MockController {
    /// Answer every request matching `rule` with `behavior`.
    ///
    /// `rule` is either a bare path (`/v3/quote/AAPL`), matching any query, or
    /// a full [`Endpoint::cache_key`], matching that exact request only.
    pub async fn set_behavior(&self, rule: &str, behavior: MockBehavior) {
        self.script(rule, [behavior]).await;
    }

    /// Answer successive requests matching `rule` with `behaviors` in order. The
    /// last one repeats for any further requests.
    pub async fn script(&self, rule: &str, behaviors: impl IntoIterator<Item = MockBehavior>) {
        let script: VecDeque<MockBehavior> = behaviors.into_iter().collect();
        let mut guard = self.state.lock().await;
        if script.is_empty() {
            guard.rules.remove(rule);
        } else {
            guard.rules.insert(rule.to_string(), script);
        }
    }

    /// Delay every response by `latency` (honours paused Tokio time).
    pub async fn set_latency(&self, latency: Option<Duration>) {
        self.state.lock().await.latency = latency;
    }

    /// Fall back to [`fixtures::respond`] for paths without a script.
    pub async fn serve_fixtures(&self, enabled: bool) {
        self.state.lock().await.serve_fixtures = enabled;
    }

    /// Number of requests received for a bare path (any query) or a full cache key.
    pub async fn calls(&self, rule: &str) -> u32 {
        self.state
            .lock()
            .await
            .calls
            .get(rule)
            .copied()
            .unwrap_or(0)
    }

    /// Number of requests received in total.
    pub async fn total_calls(&self) -> u32 {
        u32::try_from(self.state.lock().await.requests.len()).unwrap_or(u32::MAX)
    }

    /// Every request received, in arrival order.
    pub async fn requests(&self) -> Vec<Endpoint> {
        self.state.lock().await.requests.clone()
    }

    /// Forget scripts, counters, and the request log. Latency and the fixture
    /// fallback are kept.
    pub async fn clear_all(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.calls.clear();
        guard.requests.clear();
    }
}

/// A transport that defers every response to its controller.
///
/// Requests with no matching script fail with HTTP 404 unless the fixture
/// fallback is on.
pub struct MockTransport {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl MockTransport {
    /// Create a mock transport and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<Self>, MockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = MockController {
            state: Arc::clone(&state),
        };
        (Arc::new(Self { name, state }), controller)
    }

    /// Like [`new_with_controller`](Self::new_with_controller) with the fixture
    /// fallback already enabled.
    #[must_use]
    pub fn with_fixtures(name: &'static str) -> (Arc<Self>, MockController) {
        let state = InternalState {
            serve_fixtures: true,
            ..InternalState::default()
        };
        let state = Arc::new(Mutex::new(state));
        let controller = MockController {
            state: Arc::clone(&state),
        };
        (Arc::new(Self { name, state }), controller)
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn get(&self, endpoint: &Endpoint) -> Result<serde_json::Value, FmpError> {
        let path = endpoint.path();
        // Snapshot what we need without holding the lock across await points
        let (behavior, latency, serve_fixtures) = {
            let mut guard = self.state.lock().await;
            *guard.calls.entry(path.to_string()).or_insert(0) += 1;
            let key = endpoint.cache_key();
            if key != path {
                *guard.calls.entry(key).or_insert(0) += 1;
            }
            guard.requests.push(endpoint.clone());
            (
                guard.next_behavior(endpoint),
                guard.latency,
                guard.serve_fixtures,
            )
        };

        if let Some(delay) = latency {
            tokio::time::sleep(delay).await;
        }

        match behavior {
            Some(MockBehavior::Return(value)) => Ok(value),
            Some(MockBehavior::Fail(err)) => Err(err),
            Some(MockBehavior::Empty) => Err(FmpError::no_data(path)),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None if serve_fixtures => fixtures::respond(endpoint)
                .ok_or_else(|| FmpError::http(404, format!("no fixture for {path}"))),
            None => Err(FmpError::http(404, format!("no mock behavior for {path}"))),
        }
    }
}
