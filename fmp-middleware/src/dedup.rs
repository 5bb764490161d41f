//! Request deduplication with short-lived result retention.
//!
//! A [`DedupCache`] maps a cache key to either an in-flight fetch or a resolved
//! value. Concurrent callers for the same key share one fetch; a success is kept
//! for its TTL and a failure is dropped immediately so the next caller starts a
//! fresh attempt.
//!
//! The producer runs on a spawned task. A caller that stops waiting does not
//! cancel work other callers may still be waiting on.
//!
//! Resolved entries are evicted by a timer once their TTL elapses. Expired
//! entries are also swept whenever a new fetch is registered, so expiry follows
//! the injected clock even when the timer has not fired.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

use fmp_core::{Clock, FmpError, SystemClock};
use futures::future::{BoxFuture, FutureExt, Shared};

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, FmpError>>>;

enum Slot<V> {
    Pending { id: u64, fetch: SharedFetch<V> },
    Ready { id: u64, value: V, expires_at: Instant },
}

struct Inner<V> {
    slots: Mutex<HashMap<String, Slot<V>>>,
    clock: Arc<dyn Clock>,
    next_id: AtomicU64,
}

/// Remove resolved entries that have expired at `now`. Returns how many went.
fn sweep<V>(slots: &mut HashMap<String, Slot<V>>, now: Instant) -> usize {
    let before = slots.len();
    slots.retain(|_, slot| match slot {
        Slot::Pending { .. } => true,
        Slot::Ready { expires_at, .. } => now < *expires_at,
    });
    before - slots.len()
}

impl<V> Inner<V> {
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Slot<V>>> {
        // Slots are whole values; a panic mid-update cannot leave one half-written.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn settle(
        self: &Arc<Self>,
        key: &str,
        id: u64,
        ttl: Duration,
        outcome: &Result<V, FmpError>,
    ) where
        V: Clone + Send + Sync + 'static,
    {
        let mut slots = self.lock();
        // Only the fetch that registered this slot may settle it.
        if !matches!(slots.get(key), Some(Slot::Pending { id: current, .. }) if *current == id) {
            return;
        }
        match outcome {
            Ok(value) if !ttl.is_zero() => {
                let expires_at = self.clock.now() + ttl;
                slots.insert(
                    key.to_string(),
                    Slot::Ready {
                        id,
                        value: value.clone(),
                        expires_at,
                    },
                );
                drop(slots);
                self.schedule_eviction(key, id, ttl);
            }
            Ok(_) => {
                slots.remove(key);
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(key, error = %_err, "evicting failed fetch");
                slots.remove(key);
            }
        }
    }
}

impl<V> Inner<V>
where
    V: Send + Sync + 'static,
{
    /// Remove `key` after `ttl` if it still holds the value stored by fetch `id`.
    fn schedule_eviction(self: &Arc<Self>, key: &str, id: u64, ttl: Duration) {
        let weak: Weak<Self> = Arc::downgrade(self);
        let key = key.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut slots = inner.lock();
            if matches!(slots.get(&key), Some(Slot::Ready { id: current, .. }) if *current == id) {
                slots.remove(&key);
                #[cfg(feature = "tracing")]
                tracing::trace!(key, "evicted expired entry");
            }
        });
    }
}

/// Shared map of in-flight and recently resolved fetches.
///
/// Cloning is cheap and clones share the same entries.
pub struct DedupCache<V> {
    inner: Arc<Inner<V>>,
}

impl<V> Clone for DedupCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for DedupCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DedupCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create an empty cache driven by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty cache driven by `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Inner {
                slots: Mutex::new(HashMap::new()),
                clock,
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Return the shared result for `key`, invoking `producer` only when no live
    /// entry exists.
    ///
    /// - A resolved entry younger than its TTL is returned as-is.
    /// - An in-flight entry is joined; every waiter sees the same outcome.
    /// - Otherwise `producer` is started and registered before this call awaits.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// Returns the producer's error, or `FmpError::Other` if the fetch task panicked.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        producer: F,
    ) -> Result<V, FmpError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, FmpError>> + Send + 'static,
    {
        let fetch = {
            let mut slots = self.inner.lock();
            match slots.get(key) {
                Some(Slot::Ready {
                    value, expires_at, ..
                }) if self.inner.clock.now() < *expires_at => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(key, "dedup cache hit");
                    return Ok(value.clone());
                }
                Some(Slot::Pending { fetch, .. }) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(key, "joining in-flight fetch");
                    fetch.clone()
                }
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        key,
                        ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
                        "dedup cache miss"
                    );
                    sweep(&mut slots, self.inner.clock.now());
                    let (id, fetch) = self.start(key, ttl, producer());
                    slots.insert(
                        key.to_string(),
                        Slot::Pending {
                            id,
                            fetch: fetch.clone(),
                        },
                    );
                    fetch
                }
            }
        };
        fetch.await
    }

    fn start<Fut>(&self, key: &str, ttl: Duration, work: Fut) -> (u64, SharedFetch<V>)
    where
        Fut: Future<Output = Result<V, FmpError>> + Send + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let inner = Arc::clone(&self.inner);
        let key = key.to_string();
        // Settling happens inside the task, so it completes even if every caller walks away.
        let handle = tokio::spawn(async move {
            let outcome = work.await;
            inner.settle(&key, id, ttl, &outcome);
            outcome
        });
        let fetch = async move {
            match handle.await {
                Ok(outcome) => outcome,
                Err(join_err) => Err(FmpError::Other(format!("fetch task failed: {join_err}"))),
            }
        }
        .boxed()
        .shared();
        (id, fetch)
    }

    /// Drop the entry for `key`, if any. An in-flight fetch keeps running for
    /// its current waiters but will not be stored.
    pub fn invalidate(&self, key: &str) {
        self.inner.lock().remove(key);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Drop resolved entries whose TTL has elapsed. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.inner.clock.now();
        sweep(&mut self.inner.lock(), now)
    }

    /// Number of entries, in-flight and resolved, including expired ones not yet evicted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true when no entries are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true when `key` currently has a fetch in flight.
    #[must_use]
    pub fn is_pending(&self, key: &str) -> bool {
        matches!(self.inner.lock().get(key), Some(Slot::Pending { .. }))
    }
}
