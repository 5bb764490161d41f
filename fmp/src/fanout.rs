//! Settle-all fan-out with per-branch fallbacks.

use std::fmt;

use fmp_core::FmpError;
use futures::future::{BoxFuture, FutureExt, join_all};

struct Branch<'a, K, T> {
    key: K,
    fallback: T,
    fut: BoxFuture<'a, Result<T, FmpError>>,
}

/// A set of independent sub-requests that are run concurrently and always
/// joined in full.
///
/// Each branch carries a fallback. When a branch fails its fallback is used in
/// its place, so [`settle`](Self::settle) never fails as a whole.
///
/// Behavior and trade-offs:
/// - No short-circuiting: a slow branch delays the result even when others
///   have already failed.
/// - Branch order is preserved in the output regardless of completion order.
pub struct FanOut<'a, K, T> {
    branches: Vec<Branch<'a, K, T>>,
}

impl<K, T> Default for FanOut<'_, K, T> {
    fn default() -> Self {
        Self {
            branches: Vec::new(),
        }
    }
}

impl<'a, K, T> FanOut<'a, K, T>
where
    K: Copy + fmt::Display,
    T: Send + 'a,
{
    /// Start an empty fan-out.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named branch and the value to use if it fails.
    #[must_use]
    pub fn branch<F>(mut self, key: K, fallback: T, fut: F) -> Self
    where
        F: Future<Output = Result<T, FmpError>> + Send + 'a,
    {
        self.branches.push(Branch {
            key,
            fallback,
            fut: fut.boxed(),
        });
        self
    }

    /// Number of branches added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Returns true when no branches were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Run every branch concurrently and wait for all of them.
    pub async fn settle(self) -> Settled<K, T> {
        let (heads, futs): (Vec<_>, Vec<_>) = self
            .branches
            .into_iter()
            .map(|b| ((b.key, b.fallback), b.fut))
            .unzip();
        let results = join_all(futs).await;

        let outcomes = heads
            .into_iter()
            .zip(results)
            .map(|((key, fallback), result)| match result {
                Ok(value) => Outcome {
                    key,
                    value,
                    error: None,
                },
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(branch = %key, error = %err, "fan-out branch failed, using fallback");
                    Outcome {
                        key,
                        value: fallback,
                        error: Some(err),
                    }
                }
            })
            .collect();
        Settled { outcomes }
    }
}

/// Result of one fan-out branch after settling.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<K, T> {
    /// Branch key.
    pub key: K,
    /// The branch value, or its fallback when `error` is set.
    pub value: T,
    /// Why the branch fell back, if it did.
    pub error: Option<FmpError>,
}

impl<K, T> Outcome<K, T> {
    /// Returns true when the value is the fallback.
    #[must_use]
    pub const fn fell_back(&self) -> bool {
        self.error.is_some()
    }
}

/// Every branch of a settled [`FanOut`], in the order they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct Settled<K, T> {
    outcomes: Vec<Outcome<K, T>>,
}

impl<K: Copy, T> Settled<K, T> {
    /// All outcomes, successes and fallbacks alike.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome<K, T>] {
        &self.outcomes
    }

    /// Number of branches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true when there were no branches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Branches that fell back, with the error that caused it.
    pub fn failures(&self) -> impl Iterator<Item = (K, &FmpError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error.as_ref().map(|e| (o.key, e)))
    }

    /// Fold every value, fallback or not, into `init`.
    pub fn merge_into<R>(self, mut init: R, mut apply: impl FnMut(&mut R, K, T)) -> R {
        for o in self.outcomes {
            apply(&mut init, o.key, o.value);
        }
        init
    }
}

impl<K, T> IntoIterator for Settled<K, T> {
    type Item = Outcome<K, T>;
    type IntoIter = std::vec::IntoIter<Outcome<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}
