//! Topological ordering via Kahn's in-degree elimination.
//!
//! # Overview
//!
//! [`kahn`] computes a linear order of a DAG's vertices such that every edge
//! goes from an earlier to a later position. The queue is FIFO and seeded in
//! ascending vertex-index order, which fixes the tie-break among
//! simultaneously-ready vertices and keeps the output deterministic.
//!
//! A graph that still contains a cycle yields a *partial* order — the sorter
//! does not fail. [`TopoSort::is_complete`] tells the caller whether every
//! vertex made it into the order; an incomplete order on a condensation
//! graph means the upstream SCC decomposition was wrong or the assignment
//! was mutated, and is surfaced as a data-integrity warning, not a crash.
//!
//! # Counters
//!
//! - `kahn_pops` — once per dequeued vertex.
//! - `kahn_edge_checks` — once per examined edge.

use std::collections::VecDeque;

use crate::counter::CounterSink;
use crate::graph::Graph;

/// The (possibly partial) result of a topological sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoSort {
    /// Vertices in topological order. Shorter than the vertex count when a
    /// cycle survived.
    pub order: Vec<usize>,
    vertex_count: usize,
}

impl TopoSort {
    /// `true` when every vertex made it into the order, i.e. the graph is
    /// acyclic.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.vertex_count
    }

    /// Number of vertices in the sorted graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

/// Topologically sort `dag` by repeated zero-in-degree elimination.
#[must_use]
pub fn kahn(dag: &Graph, counter: &mut impl CounterSink) -> TopoSort {
    let n = dag.vertex_count();

    let mut in_degree = vec![0_usize; n];
    for edge in dag.edges() {
        in_degree[edge.to] += 1;
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(u) = queue.pop_front() {
        counter.inc("kahn_pops");
        order.push(u);
        for edge in dag.outgoing(u) {
            counter.inc("kahn_edge_checks");
            in_degree[edge.to] -= 1;
            if in_degree[edge.to] == 0 {
                queue.push_back(edge.to);
            }
        }
    }

    TopoSort {
        order,
        vertex_count: n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{NoopCounter, OpCounter};

    fn directed(n: usize, edges: &[(usize, usize, i64)]) -> Graph {
        let mut g = Graph::new(n, true);
        for &(u, v, w) in edges {
            g.add_edge(u, v, w).expect("valid edge");
        }
        g
    }

    fn position_of(order: &[usize], v: usize) -> usize {
        order
            .iter()
            .position(|&x| x == v)
            .unwrap_or_else(|| panic!("vertex {v} missing from order"))
    }

    #[test]
    fn chain_sorts_in_order() {
        let g = directed(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        let sorted = kahn(&g, &mut NoopCounter);

        assert!(sorted.is_complete());
        assert_eq!(sorted.order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn every_edge_respects_the_order() {
        let g = directed(
            6,
            &[(5, 0, 1), (5, 2, 1), (4, 0, 1), (4, 1, 1), (2, 3, 1), (3, 1, 1)],
        );
        let sorted = kahn(&g, &mut NoopCounter);

        assert!(sorted.is_complete());
        for edge in g.edges() {
            assert!(
                position_of(&sorted.order, edge.from) < position_of(&sorted.order, edge.to),
                "edge {} -> {} out of order",
                edge.from,
                edge.to
            );
        }
    }

    #[test]
    fn ties_break_by_readiness_then_index() {
        // 0, 1, 2 all start ready; FIFO seeding makes the order ascending.
        let g = directed(4, &[(0, 3, 1), (1, 3, 1), (2, 3, 1)]);
        let sorted = kahn(&g, &mut NoopCounter);

        assert_eq!(sorted.order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn cycle_yields_partial_order() {
        // 0 → 1 → 2 → 1 cycle: only 0 and nothing past the cycle sorts.
        let g = directed(3, &[(0, 1, 1), (1, 2, 1), (2, 1, 1)]);
        let sorted = kahn(&g, &mut NoopCounter);

        assert!(!sorted.is_complete());
        assert_eq!(sorted.order, vec![0]);
        assert_eq!(sorted.vertex_count(), 3);
    }

    #[test]
    fn counters_track_pops_and_edge_checks() {
        let g = directed(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        let mut counter = OpCounter::new();

        let sorted = kahn(&g, &mut counter);

        assert!(sorted.is_complete());
        assert_eq!(counter.get("kahn_pops"), 4);
        assert_eq!(counter.get("kahn_edge_checks"), 4);
    }

    #[test]
    fn empty_graph_sorts_to_empty_order() {
        let g = Graph::new(0, true);
        let sorted = kahn(&g, &mut NoopCounter);

        assert!(sorted.is_complete());
        assert!(sorted.order.is_empty());
    }
}
