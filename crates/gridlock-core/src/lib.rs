#![forbid(unsafe_code)]
//! Structural and path analytics for weighted task graphs.
//!
//! # Overview
//!
//! This crate takes a directed (or undirected) weighted graph and answers
//! "what depends on what, and what is the longest chain": it finds strongly
//! connected components, contracts them into a condensation DAG, orders that
//! DAG topologically, and solves single-source shortest/longest distances
//! over it, reconstructing the critical path.
//!
//! ## Pipeline
//!
//! ```text
//! Graph (adjacency lists, possible cycles)
//!        ↓  scc::tarjan_scc()
//! components + ComponentAssignment
//!        ↓  condense::build_condensation()
//! condensation DAG (min-weight deduplicated inter-component edges)
//!        ↓  topo::kahn()
//! TopoSort (partial when a cycle survives — a warning, not an error)
//!        ↓  paths::{shortest_paths, longest_paths, reconstruct_critical_path}
//! Distance arrays + critical path
//! ```
//!
//! [`pipeline::analyze`] runs all stages for one dataset and captures
//! per-phase operation counters and wall-clock durations.
//!
//! # Conventions
//!
//! - **Errors**: structural violations (out-of-range vertices) return
//!   [`error::GraphError`]; everything else degrades gracefully and is
//!   encoded in the result data.
//! - **Logging**: `tracing` macros (`debug!`, `warn!`).
//! - **Instrumentation**: algorithms report operation counts to an injected
//!   [`counter::CounterSink`]; pass [`counter::NoopCounter`] to opt out.

pub mod condense;
pub mod counter;
pub mod error;
pub mod graph;
pub mod paths;
pub mod pipeline;
pub mod scc;
pub mod topo;

// Re-export primary types at crate level for convenience.
pub use condense::build_condensation;
pub use counter::{CounterSink, NoopCounter, OpCounter};
pub use error::GraphError;
pub use graph::{Edge, Graph};
pub use paths::{Distance, longest_paths, reconstruct_critical_path, shortest_paths};
pub use pipeline::{Analysis, analyze};
pub use scc::{ComponentAssignment, tarjan_scc};
pub use topo::{TopoSort, kahn};
