//! JSON dataset input model.
//!
//! An input file holds either one dataset object or an array of them:
//!
//! ```json
//! {
//!   "directed": true,
//!   "n": 7,
//!   "edges": [{"u": 0, "v": 1, "w": 3}, {"u": 1, "v": 2}],
//!   "source": 4,
//!   "weight_model": "edge"
//! }
//! ```
//!
//! `w` defaults to 1, `source` to 0, `weight_model` to `"edge"` (an opaque
//! label passed through to the output unchanged). Each dataset is built into
//! a fresh [`Graph`]; out-of-range endpoints surface as `GraphError` and
//! abort only that dataset.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use gridlock_core::{Graph, GraphError};

/// One edge triple as it appears in input JSON.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EdgeSpec {
    /// Source vertex.
    pub u: usize,
    /// Target vertex.
    pub v: usize,
    /// Edge weight, defaulting to 1.
    #[serde(default = "default_weight")]
    pub w: i64,
}

/// One dataset: a graph plus its analysis parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSpec {
    /// Whether edges are one-way.
    pub directed: bool,
    /// Vertex count.
    pub n: usize,
    /// Edge list (may be empty or absent).
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    /// Source vertex for the path solvers.
    #[serde(default)]
    pub source: usize,
    /// Opaque weight-model label, echoed into the output.
    #[serde(default = "default_weight_model")]
    pub weight_model: String,
}

impl DatasetSpec {
    /// Materialize the dataset's graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] when an edge endpoint is not
    /// a valid vertex index.
    pub fn build_graph(&self) -> Result<Graph, GraphError> {
        let mut g = Graph::new(self.n, self.directed);
        for edge in &self.edges {
            g.add_edge(edge.u, edge.v, edge.w)?;
        }
        Ok(g)
    }
}

fn default_weight() -> i64 {
    1
}

fn default_weight_model() -> String {
    "edge".to_string()
}

/// A file is either a single dataset or an array of datasets.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Many(Vec<DatasetSpec>),
    One(DatasetSpec),
}

/// Read and parse all datasets from `path`.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid dataset JSON.
pub fn load_datasets(path: &Path) -> Result<Vec<DatasetSpec>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading input file {}", path.display()))?;
    let parsed: DatasetFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing datasets from {}", path.display()))?;
    Ok(match parsed {
        DatasetFile::Many(datasets) => datasets,
        DatasetFile::One(dataset) => vec![dataset],
    })
}
