//! Single-source shortest/longest distances over a DAG, plus critical-path
//! reconstruction.
//!
//! # Overview
//!
//! Both solvers take the DAG, a source vertex, and a topological order of
//! the same graph, and settle every vertex in a single O(V+E) pass: because
//! vertices are processed strictly in topological order, a vertex's final
//! distance is fixed before any of its outgoing edges are relaxed. There is
//! no revisiting and no fixed-point iteration; the caller-supplied order is
//! trusted, not re-validated.
//!
//! Unreachable vertices keep their sentinel: [`Distance::PosInfinity`] for
//! the shortest solver, [`Distance::NegInfinity`] for the longest.
//!
//! # Counters
//!
//! - `edge_checks` — once per examined edge.
//! - `relaxations` — once per successful distance improvement.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::counter::CounterSink;
use crate::graph::Graph;

/// A tri-state distance value.
///
/// An explicit representation instead of IEEE infinities: distances here are
/// exact integer sums, and the two unbounded sentinels stay distinguishable
/// by sign at every interface boundary. Serializes finite values as numbers
/// and the sentinels as the strings `"Infinity"` / `"-Infinity"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    /// An exact path weight.
    Finite(i64),
    /// Unreachable under minimization.
    PosInfinity,
    /// Unreachable under maximization.
    NegInfinity,
}

impl Distance {
    /// `true` for [`Distance::Finite`].
    #[must_use]
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The finite value, if any.
    #[must_use]
    pub fn finite(self) -> Option<i64> {
        match self {
            Self::Finite(v) => Some(v),
            Self::PosInfinity | Self::NegInfinity => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v}"),
            Self::PosInfinity => f.write_str("Infinity"),
            Self::NegInfinity => f.write_str("-Infinity"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(v) => serializer.serialize_i64(*v),
            Self::PosInfinity => serializer.serialize_str("Infinity"),
            Self::NegInfinity => serializer.serialize_str("-Infinity"),
        }
    }
}

/// Shortest distances from `source` to every vertex of `dag`.
///
/// `topo` must be a valid topological order of `dag`.
///
/// # Panics
///
/// Panics if `source` or any vertex in `topo` is out of range.
#[must_use]
pub fn shortest_paths(
    dag: &Graph,
    source: usize,
    topo: &[usize],
    counter: &mut impl CounterSink,
) -> Vec<Distance> {
    let mut dist = vec![Distance::PosInfinity; dag.vertex_count()];
    dist[source] = Distance::Finite(0);

    for &u in topo {
        let Distance::Finite(du) = dist[u] else {
            continue;
        };
        for edge in dag.outgoing(u) {
            counter.inc("edge_checks");
            let candidate = du + edge.weight;
            let improved = match dist[edge.to] {
                Distance::Finite(dv) => candidate < dv,
                Distance::PosInfinity => true,
                Distance::NegInfinity => false,
            };
            if improved {
                dist[edge.to] = Distance::Finite(candidate);
                counter.inc("relaxations");
            }
        }
    }

    dist
}

/// Longest distances from `source` to every vertex of `dag`.
///
/// Symmetric to [`shortest_paths`] with the negative sentinel and `max`
/// relaxation. `topo` must be a valid topological order of `dag`.
///
/// # Panics
///
/// Panics if `source` or any vertex in `topo` is out of range.
#[must_use]
pub fn longest_paths(
    dag: &Graph,
    source: usize,
    topo: &[usize],
    counter: &mut impl CounterSink,
) -> Vec<Distance> {
    let mut dist = vec![Distance::NegInfinity; dag.vertex_count()];
    dist[source] = Distance::Finite(0);

    for &u in topo {
        let Distance::Finite(du) = dist[u] else {
            continue;
        };
        for edge in dag.outgoing(u) {
            counter.inc("edge_checks");
            let candidate = du + edge.weight;
            let improved = match dist[edge.to] {
                Distance::Finite(dv) => candidate > dv,
                Distance::NegInfinity => true,
                Distance::PosInfinity => false,
            };
            if improved {
                dist[edge.to] = Distance::Finite(candidate);
                counter.inc("relaxations");
            }
        }
    }

    dist
}

/// Reconstruct one maximum-weight path from longest distances `dist`.
///
/// Rescans edges in topological order and records `u` as the predecessor of
/// `v` wherever `dist[v] == dist[u] + w` with `dist[u]` finite; when several
/// edges qualify, the last one scanned wins. The endpoint is the first
/// vertex attaining the strictly greatest finite distance; the path is
/// returned source-to-sink. Empty when no vertex has a finite distance.
#[must_use]
pub fn reconstruct_critical_path(dag: &Graph, topo: &[usize], dist: &[Distance]) -> Vec<usize> {
    let mut prev: Vec<Option<usize>> = vec![None; dag.vertex_count()];

    for &u in topo {
        let Distance::Finite(du) = dist[u] else {
            continue;
        };
        for edge in dag.outgoing(u) {
            if dist[edge.to] == Distance::Finite(du + edge.weight) {
                prev[edge.to] = Some(u);
            }
        }
    }

    let Some(end) = max_distance_vertex(dist) else {
        return Vec::new();
    };

    let mut path = vec![end];
    let mut v = end;
    while let Some(u) = prev[v] {
        path.push(u);
        v = u;
    }
    path.reverse();
    path
}

/// The greatest distance in `dist`, or [`Distance::NegInfinity`] when no
/// finite value exists.
#[must_use]
pub fn max_distance(dist: &[Distance]) -> Distance {
    max_distance_vertex(dist).map_or(Distance::NegInfinity, |v| dist[v])
}

/// Index of the first vertex attaining the strictly greatest finite
/// distance, scanning in vertex order.
fn max_distance_vertex(dist: &[Distance]) -> Option<usize> {
    let mut best: Option<(i64, usize)> = None;
    for (v, d) in dist.iter().enumerate() {
        if let Distance::Finite(value) = *d {
            let improves = match best {
                Some((current, _)) => value > current,
                None => true,
            };
            if improves {
                best = Some((value, v));
            }
        }
    }
    best.map(|(_, v)| v)
}
