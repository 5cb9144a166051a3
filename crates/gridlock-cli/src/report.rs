//! Stable JSON output model for analysis results.
//!
//! One report object per dataset, with fixed field names and ordering so
//! repeated runs diff cleanly. Infinite distances serialize as the strings
//! `"Infinity"` / `"-Infinity"` (see `gridlock_core::paths::Distance`), and
//! a dataset that failed a structural check becomes an `{"error": ...}`
//! entry instead of aborting the whole run.

use serde::Serialize;

use gridlock_core::paths::Distance;
use gridlock_core::pipeline::{Analysis, PhaseMetrics};

/// A condensation edge in wire form.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CondensationEdge {
    /// Source component.
    pub from: usize,
    /// Target component.
    pub to: usize,
    /// Minimum weight among the base edges this edge deduplicates.
    pub w: i64,
}

/// Per-phase counters and timings in wire form.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    scc_counters: gridlock_core::OpCounter,
    scc_time_ns: u64,
    condensation_time_ns: u64,
    topo_counters: gridlock_core::OpCounter,
    topo_time_ns: u64,
    shortest_counters: gridlock_core::OpCounter,
    shortest_time_ns: u64,
    longest_counters: gridlock_core::OpCounter,
    longest_time_ns: u64,
    total_time_ns: u64,
}

/// Full report for one successfully analyzed dataset.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    dataset_index: usize,
    input_path: String,
    weight_model: String,
    source_vertex: usize,
    num_components: usize,
    #[serde(rename = "SCCs")]
    sccs: Vec<Vec<usize>>,
    #[serde(rename = "SCC_sizes")]
    scc_sizes: Vec<usize>,
    condensation_edges: Vec<CondensationEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
    source_component: Option<usize>,
    derived_task_order: Vec<usize>,
    topological_order: Vec<usize>,
    shortest_distances: Vec<Distance>,
    longest_distances: Vec<Distance>,
    critical_path: Vec<usize>,
    critical_length: Distance,
    metrics: MetricsReport,
}

/// Report entry for a dataset that failed structurally.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    /// Position of the dataset in the input file.
    pub dataset_index: usize,
    /// Human-readable failure description.
    pub error: String,
}

/// One entry of the output array.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DatasetReport {
    /// The dataset was analyzed.
    Analyzed(Box<AnalysisReport>),
    /// The dataset was rejected; processing continued with the next one.
    Failed(ErrorReport),
}

impl AnalysisReport {
    /// Assemble the wire report from a finished [`Analysis`].
    #[must_use]
    pub fn new(
        dataset_index: usize,
        input_path: &str,
        weight_model: &str,
        source_vertex: usize,
        analysis: &Analysis,
    ) -> Self {
        let condensation_edges = analysis
            .condensation
            .edges()
            .map(|e| CondensationEdge {
                from: e.from,
                to: e.to,
                w: e.weight,
            })
            .collect();

        Self {
            dataset_index,
            input_path: input_path.to_string(),
            weight_model: weight_model.to_string(),
            source_vertex,
            num_components: analysis.components.len(),
            sccs: analysis.components.clone(),
            scc_sizes: analysis.components.iter().map(Vec::len).collect(),
            condensation_edges,
            warning: analysis.warning().map(String::from),
            source_component: analysis.source_component,
            derived_task_order: analysis.derived_task_order.clone(),
            topological_order: analysis.topo.order.clone(),
            shortest_distances: analysis.shortest.clone(),
            longest_distances: analysis.longest.clone(),
            critical_path: analysis.critical_path.clone(),
            critical_length: analysis.critical_length,
            metrics: MetricsReport::new(analysis),
        }
    }
}

impl MetricsReport {
    fn new(analysis: &Analysis) -> Self {
        let m = &analysis.metrics;
        Self {
            scc_counters: m.scc.counters.clone(),
            scc_time_ns: nanos(&m.scc),
            condensation_time_ns: saturating_nanos(m.condensation_time),
            topo_counters: m.topo.counters.clone(),
            topo_time_ns: nanos(&m.topo),
            shortest_counters: m.shortest.counters.clone(),
            shortest_time_ns: nanos(&m.shortest),
            longest_counters: m.longest.counters.clone(),
            longest_time_ns: nanos(&m.longest),
            total_time_ns: saturating_nanos(m.total_time),
        }
    }
}

fn nanos(phase: &PhaseMetrics) -> u64 {
    saturating_nanos(phase.duration)
}

fn saturating_nanos(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
