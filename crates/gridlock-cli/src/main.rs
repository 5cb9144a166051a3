#![forbid(unsafe_code)]
//! `gridlock` — structural and path analytics over weighted task graphs.
//!
//! Reads one or more JSON datasets, runs the core pipeline (SCCs →
//! condensation → topological order → shortest/longest paths → critical
//! path) on each in full isolation, and writes a JSON report array.

mod dataset;
mod report;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use gridlock_core::pipeline::{Analysis, analyze};
use gridlock_core::GraphError;

use dataset::{DatasetSpec, load_datasets};
use report::{AnalysisReport, DatasetReport, ErrorReport};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "gridlock: structural and path analytics for weighted task graphs",
    long_about = None
)]
struct Cli {
    /// Input JSON file: one dataset object or an array of them.
    #[arg(default_value = "data/input.json")]
    input: PathBuf,

    /// Output file for the JSON report array.
    #[arg(short, long, default_value = "data/output.json")]
    output: PathBuf,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let datasets = load_datasets(&cli.input)?;
    info!(
        datasets = datasets.len(),
        input = %cli.input.display(),
        "input loaded"
    );

    let input_path = cli.input.display().to_string();
    let mut reports: Vec<DatasetReport> = Vec::with_capacity(datasets.len());
    for (index, spec) in datasets.iter().enumerate() {
        info!(dataset = index, "processing dataset");
        reports.push(process_dataset(index, &input_path, spec));
    }

    write_reports(&cli.output, &reports, cli.compact)?;
    println!("Results saved to {}", cli.output.display());
    Ok(())
}

/// Run one dataset end to end.
///
/// A structural violation (bad edge endpoint or source vertex) rejects only
/// this dataset; the caller keeps going with the rest of the input.
fn process_dataset(index: usize, input_path: &str, spec: &DatasetSpec) -> DatasetReport {
    match run_dataset(spec) {
        Ok(analysis) => DatasetReport::Analyzed(Box::new(AnalysisReport::new(
            index,
            input_path,
            &spec.weight_model,
            spec.source,
            &analysis,
        ))),
        Err(err) => {
            warn!(dataset = index, error = %err, "dataset rejected");
            DatasetReport::Failed(ErrorReport {
                dataset_index: index,
                error: err.to_string(),
            })
        }
    }
}

fn run_dataset(spec: &DatasetSpec) -> Result<Analysis, GraphError> {
    let g = spec.build_graph()?;
    analyze(&g, spec.source)
}

fn write_reports(path: &Path, reports: &[DatasetReport], compact: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }

    let mut rendered = if compact {
        serde_json::to_string(reports)?
    } else {
        serde_json::to_string_pretty(reports)?
    };
    rendered.push('\n');

    fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
    info!(output = %path.display(), "results saved");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GRIDLOCK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "gridlock=debug,info"
        } else {
            "gridlock=info,warn"
        })
    });

    let format = env::var("GRIDLOCK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}
