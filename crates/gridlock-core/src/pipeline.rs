//! Per-dataset analytics pipeline.
//!
//! # Overview
//!
//! [`analyze`] runs the full stage chain for one graph:
//!
//! ```text
//! tarjan_scc → ComponentAssignment → build_condensation → kahn
//!            → shortest_paths / longest_paths → reconstruct_critical_path
//! ```
//!
//! Each stage is a hard dependency of the next; nothing runs concurrently
//! within a dataset. Every invocation starts from fresh counters and fresh
//! intermediate state, so independent datasets can be processed in isolation
//! (and trivially in parallel by the caller) with zero shared state.
//!
//! Per phase, the pipeline captures one [`OpCounter`] and one wall-clock
//! [`Duration`] — observation only, never control flow.

use std::time::{Duration, Instant};

use tracing::{debug, instrument, warn};

use crate::condense::build_condensation;
use crate::counter::OpCounter;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::paths::{Distance, longest_paths, max_distance, reconstruct_critical_path, shortest_paths};
use crate::scc::{ComponentAssignment, tarjan_scc};
use crate::topo::{TopoSort, kahn};

/// Warning attached to a result whose condensation failed to sort fully.
/// Should be unreachable with a correct SCC stage; kept as a data-integrity
/// signal rather than an error.
pub const TOPO_INCOMPLETE_WARNING: &str =
    "Topological sort incomplete (possible cycle in condensation graph)";

/// Counters and wall-clock duration for one pipeline phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseMetrics {
    /// Operation counts reported by the phase's algorithm.
    pub counters: OpCounter,
    /// Wall-clock time spent in the phase.
    pub duration: Duration,
}

/// Observational metrics for a full pipeline run.
///
/// The condensation phase reports no operation counts (it is a single linear
/// scan), only its duration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    /// SCC phase (`dfs_visits`, `edges_traversed`).
    pub scc: PhaseMetrics,
    /// Condensation build time.
    pub condensation_time: Duration,
    /// Topological sort phase (`kahn_pops`, `kahn_edge_checks`).
    pub topo: PhaseMetrics,
    /// Shortest-path phase (`edge_checks`, `relaxations`).
    pub shortest: PhaseMetrics,
    /// Longest-path phase (`edge_checks`, `relaxations`).
    pub longest: PhaseMetrics,
    /// End-to-end time for the dataset.
    pub total_time: Duration,
}

/// Immutable outputs of one pipeline run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// SCCs in emission order, each a non-empty list of vertex indices.
    pub components: Vec<Vec<usize>>,
    /// Vertex→component mapping matching `components`.
    pub assignment: ComponentAssignment,
    /// The condensation DAG over component indices.
    pub condensation: Graph,
    /// Topological order of the condensation (possibly partial).
    pub topo: TopoSort,
    /// Component containing the source vertex. `None` only for the empty
    /// graph, which has no valid source.
    pub source_component: Option<usize>,
    /// Each condensation vertex in topological order, expanded back into its
    /// member vertices.
    pub derived_task_order: Vec<usize>,
    /// Shortest distance per component from the source component.
    pub shortest: Vec<Distance>,
    /// Longest distance per component from the source component.
    pub longest: Vec<Distance>,
    /// One maximum-weight path through the condensation, source-to-sink.
    pub critical_path: Vec<usize>,
    /// Total weight of the critical path; the negative sentinel when no
    /// finite path exists.
    pub critical_length: Distance,
    /// Per-phase counters and timings.
    pub metrics: Metrics,
}

impl Analysis {
    /// Non-fatal data-integrity warning, present when the condensation
    /// could not be fully ordered.
    #[must_use]
    pub fn warning(&self) -> Option<&'static str> {
        if self.topo.is_complete() {
            None
        } else {
            Some(TOPO_INCOMPLETE_WARNING)
        }
    }
}

/// Run the full pipeline on `g` from `source`.
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfRange`] when `source` is not a valid
/// vertex of a non-empty graph. The empty graph skips source validation and
/// degrades to trivially empty outputs.
#[instrument(skip(g), fields(vertices = g.vertex_count(), edges = g.edge_count()))]
pub fn analyze(g: &Graph, source: usize) -> Result<Analysis, GraphError> {
    let n = g.vertex_count();
    if n > 0 && source >= n {
        return Err(GraphError::VertexOutOfRange {
            vertex: source,
            vertex_count: n,
        });
    }

    let total_start = Instant::now();

    let mut scc_counter = OpCounter::new();
    let scc_start = Instant::now();
    let components = tarjan_scc(g, &mut scc_counter);
    let scc_time = scc_start.elapsed();
    let assignment = ComponentAssignment::from_components(n, &components);
    debug!(components = components.len(), "scc phase done");

    let cond_start = Instant::now();
    let condensation = build_condensation(g, &assignment);
    let condensation_time = cond_start.elapsed();

    let mut topo_counter = OpCounter::new();
    let topo_start = Instant::now();
    let topo = kahn(&condensation, &mut topo_counter);
    let topo_time = topo_start.elapsed();
    if !topo.is_complete() {
        warn!(
            ordered = topo.order.len(),
            components = condensation.vertex_count(),
            "{TOPO_INCOMPLETE_WARNING}"
        );
    }

    let derived_task_order: Vec<usize> = topo
        .order
        .iter()
        .flat_map(|&comp| components[comp].iter().copied())
        .collect();

    // The empty graph has no source component and nothing to solve.
    let source_component = (n > 0).then(|| assignment.component_of(source));

    let mut shortest_counter = OpCounter::new();
    let mut longest_counter = OpCounter::new();
    let (shortest, longest, shortest_time, longest_time) = match source_component {
        Some(sc) => {
            let start = Instant::now();
            let shortest = shortest_paths(&condensation, sc, &topo.order, &mut shortest_counter);
            let shortest_time = start.elapsed();

            let start = Instant::now();
            let longest = longest_paths(&condensation, sc, &topo.order, &mut longest_counter);
            let longest_time = start.elapsed();

            (shortest, longest, shortest_time, longest_time)
        }
        None => (Vec::new(), Vec::new(), Duration::ZERO, Duration::ZERO),
    };

    let critical_path = reconstruct_critical_path(&condensation, &topo.order, &longest);
    let critical_length = max_distance(&longest);

    let metrics = Metrics {
        scc: PhaseMetrics {
            counters: scc_counter,
            duration: scc_time,
        },
        condensation_time,
        topo: PhaseMetrics {
            counters: topo_counter,
            duration: topo_time,
        },
        shortest: PhaseMetrics {
            counters: shortest_counter,
            duration: shortest_time,
        },
        longest: PhaseMetrics {
            counters: longest_counter,
            duration: longest_time,
        },
        total_time: total_start.elapsed(),
    };

    Ok(Analysis {
        components,
        assignment,
        condensation,
        topo,
        source_component,
        derived_task_order,
        shortest,
        longest,
        critical_path,
        critical_length,
        metrics,
    })
}
