//! Operation-count instrumentation for the analytics algorithms.
//!
//! # Design
//!
//! Every algorithm in this crate reports how much work it did — vertices
//! visited, edges examined, relaxations performed — to an injected
//! [`CounterSink`]. The sink is write-only from the algorithm's point of
//! view and carries no control flow: results are identical whether the
//! caller passes a real [`OpCounter`] or a [`NoopCounter`].
//!
//! Counter keys are fixed `&'static str` labels, e.g. `"dfs_visits"`,
//! `"edges_traversed"`, `"kahn_pops"`, `"relaxations"`.

use std::collections::BTreeMap;

use serde::Serialize;

/// Write-only sink for operation counts.
///
/// Model instrumentation as an injected capability: callers that want no
/// counting pass [`NoopCounter`] instead of an `Option`.
pub trait CounterSink {
    /// Increment the counter for `key` by one.
    fn inc(&mut self, key: &'static str);

    /// Add `delta` to the counter for `key`.
    fn add(&mut self, key: &'static str, delta: u64);
}

/// A counter sink that records counts in an ordered map.
///
/// One instance per algorithm invocation; read back by the caller after the
/// algorithm returns. Serializes as a plain `{key: count}` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OpCounter {
    counts: BTreeMap<&'static str, u64>,
}

impl OpCounter {
    /// Create an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the recorded count for `key`, or zero if never touched.
    #[must_use]
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Iterate over all recorded `(key, count)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }

    /// Return `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl CounterSink for OpCounter {
    fn inc(&mut self, key: &'static str) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    fn add(&mut self, key: &'static str, delta: u64) {
        *self.counts.entry(key).or_insert(0) += delta;
    }
}

/// A counter sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCounter;

impl CounterSink for NoopCounter {
    fn inc(&mut self, _key: &'static str) {}

    fn add(&mut self, _key: &'static str, _delta: u64) {}
}
