//! Strongly connected components via Tarjan's algorithm.
//!
//! # Overview
//!
//! [`tarjan_scc`] finds all SCCs of a possibly-cyclic graph in one DFS pass,
//! tracking discovery times and low-link values. A vertex whose low-link
//! equals its discovery time is the root of a component: everything above it
//! on the vertex stack (inclusive) is popped off as one SCC.
//!
//! # Design
//!
//! The traversal uses an explicit work stack of `(vertex, edge-cursor)`
//! frames rather than recursion, so deep graphs cannot overflow the call
//! stack. Semantics are identical to the recursive form: components are
//! emitted in the order their DFS root closes, and that order is
//! deterministic given deterministic edge order.
//!
//! Discovery times start at 1; `disc == 0` marks an unvisited vertex.
//!
//! # Counters
//!
//! - `dfs_visits` — once per vertex, on first visit.
//! - `edges_traversed` — once per examined edge, regardless of outcome.

use crate::counter::CounterSink;
use crate::graph::Graph;

/// Find the strongly connected components of `g`.
///
/// Each component is a non-empty list of vertex indices (in stack-pop
/// order). Every vertex of `g` appears in exactly one component; the outer
/// driver scans all vertices, so isolated vertices and disconnected
/// subgraphs are covered. On an undirected graph every connected subgraph
/// is trivially one component.
#[must_use]
pub fn tarjan_scc(g: &Graph, counter: &mut impl CounterSink) -> Vec<Vec<usize>> {
    let n = g.vertex_count();
    let mut disc = vec![0_usize; n];
    let mut low = vec![0_usize; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut time = 0_usize;

    // Explicit DFS frames: (vertex, index of the next outgoing edge).
    let mut frames: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if disc[root] != 0 {
            continue;
        }
        time += 1;
        disc[root] = time;
        low[root] = time;
        stack.push(root);
        on_stack[root] = true;
        counter.inc("dfs_visits");
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let u = frame.0;
            if let Some(edge) = g.outgoing(u).get(frame.1) {
                frame.1 += 1;
                counter.inc("edges_traversed");
                let v = edge.to;
                if disc[v] == 0 {
                    time += 1;
                    disc[v] = time;
                    low[v] = time;
                    stack.push(v);
                    on_stack[v] = true;
                    counter.inc("dfs_visits");
                    frames.push((v, 0));
                } else if on_stack[v] {
                    low[u] = low[u].min(disc[v]);
                }
                // Visited but off-stack: belongs to an already-closed
                // component, ignore.
            } else {
                frames.pop();
                if low[u] == disc[u] {
                    // u is a component root: pop down to and including u.
                    let mut component = Vec::new();
                    while let Some(w) = stack.pop() {
                        on_stack[w] = false;
                        component.push(w);
                        if w == u {
                            break;
                        }
                    }
                    components.push(component);
                }
                if let Some(parent) = frames.last_mut() {
                    let p = parent.0;
                    low[p] = low[p].min(low[u]);
                }
            }
        }
    }

    components
}

/// Immutable vertex→component mapping produced from an SCC decomposition.
///
/// Built once and never mutated; downstream stages key off this structure
/// rather than inferring component indices positionally from the component
/// list, so reordering the list can never silently drift the indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentAssignment {
    comp_of: Vec<usize>,
    component_count: usize,
}

impl ComponentAssignment {
    /// Build the assignment from a component partition of `vertex_count`
    /// vertices. Component `i` of `components` gets index `i`.
    #[must_use]
    pub fn from_components(vertex_count: usize, components: &[Vec<usize>]) -> Self {
        let mut comp_of = vec![usize::MAX; vertex_count];
        for (index, component) in components.iter().enumerate() {
            for &v in component {
                comp_of[v] = index;
            }
        }
        debug_assert!(
            comp_of.iter().all(|&c| c != usize::MAX),
            "components must partition the vertex set"
        );
        Self {
            comp_of,
            component_count: components.len(),
        }
    }

    /// The component index of vertex `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v >= vertex_count()`.
    #[must_use]
    pub fn component_of(&self, v: usize) -> usize {
        self.comp_of[v]
    }

    /// Number of components (dense indices `0..component_count`).
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Number of vertices the assignment covers.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.comp_of.len()
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

    #[test]
    fn cycle_plus_tail() {
        // 0 → 1 → 2 → 0 and 2 → 3: one triangle SCC plus a singleton.
        let g = directed(4, &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1)]);
        let mut counter = OpCounter::new();

        let comps = tarjan_scc(&g, &mut counter);

        assert_eq!(comps.len(), 2);
        assert!(comps.iter().all(|c| !c.is_empty()));
        assert_eq!(counter.get("dfs_visits"), 4);
        assert_eq!(counter.get("edges_traversed"), 4);
    }

    #[test]
    fn chain_with_head_cycle_emission_order() {
        // {0,1,2} cycle feeding the chain 3 → 4 → 5 → 6. The deepest
        // singleton closes first; the cycle closes last.
        let g = directed(
            7,
            &[
                (0, 1, 3),
                (1, 2, 4),
                (2, 0, 2),
                (2, 3, 5),
                (3, 4, 1),
                (4, 5, 2),
                (5, 6, 3),
            ],
        );

        let comps = tarjan_scc(&g, &mut NoopCounter);

        assert_eq!(
            comps,
            vec![vec![6], vec![5], vec![4], vec![3], vec![2, 1, 0]]
        );
    }

    #[test]
    fn isolated_vertices_are_singletons() {
        let g = directed(3, &[]);
        let comps = tarjan_scc(&g, &mut NoopCounter);

        assert_eq!(comps, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn self_loop_is_its_own_component() {
        let g = directed(2, &[(0, 0, 1), (0, 1, 1)]);
        let comps = tarjan_scc(&g, &mut NoopCounter);

        assert_eq!(comps.len(), 2);
        let sizes: Vec<usize> = comps.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![1, 1]);
    }

    #[test]
    fn undirected_edge_merges_endpoints() {
        let mut g = Graph::new(3, false);
        g.add_edge(0, 1, 1).expect("valid edge");

        let comps = tarjan_scc(&g, &mut NoopCounter);

        // {0,1} connected (mirrored edge makes them mutually reachable),
        // 2 isolated.
        assert_eq!(comps.len(), 2);
        let mut sizes: Vec<usize> = comps.iter().map(Vec::len).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2]);
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        // A recursive implementation would blow the call stack here.
        let n = 200_000;
        let mut g = Graph::new(n, true);
        for v in 0..n - 1 {
            g.add_edge(v, v + 1, 1).expect("valid edge");
        }

        let comps = tarjan_scc(&g, &mut NoopCounter);
        assert_eq!(comps.len(), n);
    }

    #[test]
    fn assignment_partitions_vertices() {
        let g = directed(5, &[(0, 1, 1), (1, 0, 1), (2, 3, 1)]);
        let comps = tarjan_scc(&g, &mut NoopCounter);
        let assignment = ComponentAssignment::from_components(5, &comps);

        assert_eq!(assignment.vertex_count(), 5);
        assert_eq!(assignment.component_count(), comps.len());
        assert_eq!(
            assignment.component_of(0),
            assignment.component_of(1),
            "cycle members share a component"
        );
        for (index, comp) in comps.iter().enumerate() {
            for &v in comp {
                assert_eq!(assignment.component_of(v), index);
            }
        }
    }
}
