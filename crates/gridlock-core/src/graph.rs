//! Adjacency-list container for directed or undirected weighted graphs.
//!
//! # Overview
//!
//! [`Graph`] is the foundation every other module builds on. Vertices are
//! dense integer indices in `[0, n)`; each vertex owns an ordered list of
//! outgoing [`Edge`]s. The graph is built once from input and read-only
//! afterwards — there is no removal operation.
//!
//! ## Undirected graphs
//!
//! When constructed with `directed = false`, every inserted edge `(u, v, w)`
//! is mirrored as `(v, u, w)` at insertion time. The graph materializes both
//! directions itself; callers never add the reverse edge explicitly.
//!
//! ## Determinism
//!
//! Edge insertion order defines traversal order. Algorithms downstream are
//! deterministic given a deterministic edge order, which is what makes
//! repeated runs byte-identical.

use crate::error::GraphError;

/// An immutable weighted edge.
///
/// Weights are signed; negative weights are fine as long as no negative
/// cycle survives into the relaxation stage (guaranteed by condensation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Source vertex index.
    pub from: usize,
    /// Target vertex index.
    pub to: usize,
    /// Signed edge weight.
    pub weight: i64,
}

/// Adjacency-list graph over dense vertex indices.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    adj: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `n` vertices and no edges.
    #[must_use]
    pub fn new(n: usize, directed: bool) -> Self {
        Self {
            directed,
            adj: vec![Vec::new(); n],
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Whether edges are one-way.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Total number of stored edges (mirrored edges count separately).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Append edge `(u, v, w)` to `u`'s adjacency list.
    ///
    /// If the graph is undirected, also appends the mirror `(v, u, w)` to
    /// `v`'s list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] when `u` or `v` is not a
    /// valid vertex index. The graph is left unchanged in that case.
    pub fn add_edge(&mut self, u: usize, v: usize, w: i64) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.push_edge(u, v, w);
        Ok(())
    }

    /// Append a pre-validated edge. Used by builders that construct indices
    /// themselves (e.g. condensation) and cannot produce out-of-range ones.
    pub(crate) fn push_edge(&mut self, u: usize, v: usize, w: i64) {
        debug_assert!(u < self.adj.len() && v < self.adj.len());
        self.adj[u].push(Edge {
            from: u,
            to: v,
            weight: w,
        });
        if !self.directed {
            self.adj[v].push(Edge {
                from: v,
                to: u,
                weight: w,
            });
        }
    }

    /// Ordered, read-only view of `u`'s outgoing edges.
    ///
    /// # Panics
    ///
    /// Panics if `u >= vertex_count()`.
    #[must_use]
    pub fn outgoing(&self, u: usize) -> &[Edge] {
        &self.adj[u]
    }

    /// Iterate over every stored edge in vertex-then-insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adj.iter().flatten()
    }

    fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        if v < self.adj.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.adj.len(),
            })
        }
    }
}
