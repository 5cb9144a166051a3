//! Typed errors for structural contract violations.
//!
//! Only structural violations are errors here. Topological inconsistency and
//! unreachability are encoded in result data ([`crate::topo::TopoSort`] and
//! [`crate::paths::Distance`] sentinels) and never abort a computation.

use thiserror::Error;

/// Errors raised when a caller violates a graph's structural contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex index was outside `[0, vertex_count)`.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph the index was used against.
        vertex_count: usize,
    },
}
