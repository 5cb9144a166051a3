//! Condensation: contract each SCC to a single vertex.
//!
//! # Overview
//!
//! Given a base graph and its component assignment, [`build_condensation`]
//! produces a directed graph over component indices. Edges internal to a
//! component are dropped; parallel inter-component edges are deduplicated,
//! keeping the minimum observed weight per ordered component pair.
//!
//! The result is acyclic whenever the assignment came from a correct SCC
//! decomposition of the same graph, and it is constructed as a directed
//! graph regardless of the base graph's directedness.
//!
//! # Dedup policy
//!
//! Keeping only the *minimum* weight silently discards every parallel
//! inter-component connection but the cheapest one. That favors the
//! shortest-path stage downstream; consumers expecting sum, max, or
//! multi-edge preservation must rewrap the base graph themselves.

use std::collections::BTreeMap;

use crate::graph::Graph;
use crate::scc::ComponentAssignment;

/// Build the condensation DAG of `g` under `assignment`.
///
/// Edges are emitted in ascending `(from_component, to_component)` order, so
/// the output is deterministic regardless of base-edge insertion order.
#[must_use]
pub fn build_condensation(g: &Graph, assignment: &ComponentAssignment) -> Graph {
    let mut dag = Graph::new(assignment.component_count(), true);

    // Minimum weight per ordered component pair. An ordered map keeps edge
    // emission deterministic.
    let mut min_weight: BTreeMap<(usize, usize), i64> = BTreeMap::new();

    for u in 0..g.vertex_count() {
        let cu = assignment.component_of(u);
        for edge in g.outgoing(u) {
            let cv = assignment.component_of(edge.to);
            if cu != cv {
                min_weight
                    .entry((cu, cv))
                    .and_modify(|w| *w = (*w).min(edge.weight))
                    .or_insert(edge.weight);
            }
        }
    }

    for (&(cu, cv), &w) in &min_weight {
        // Component indices are < component_count by construction.
        dag.push_edge(cu, cv, w);
    }

    dag
}
