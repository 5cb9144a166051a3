//! End-to-end tests for the `gridlock` binary.
//!
//! Each test writes an input JSON file into a temp directory, runs the
//! binary against it, and inspects the JSON report it writes.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gridlock_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gridlock"));
    cmd.current_dir(dir);
    cmd.env("GRIDLOCK_LOG", "error");
    cmd
}

fn run_on_input(dir: &Path, input_json: &str) -> Vec<Value> {
    fs::write(dir.join("input.json"), input_json).expect("write input");
    gridlock_cmd(dir)
        .args(["input.json", "--output", "output.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results saved to"));

    let raw = fs::read_to_string(dir.join("output.json")).expect("output exists");
    serde_json::from_str(&raw).expect("output is a JSON array")
}

// The reference dataset: a 3-cycle {0,1,2} feeding the chain 3 → 4 → 5 → 6,
// analyzed from source vertex 4.
const REFERENCE_INPUT: &str = r#"{
    "directed": true,
    "n": 7,
    "edges": [
        {"u": 0, "v": 1, "w": 3},
        {"u": 1, "v": 2, "w": 4},
        {"u": 2, "v": 0, "w": 2},
        {"u": 2, "v": 3, "w": 5},
        {"u": 3, "v": 4, "w": 1},
        {"u": 4, "v": 5, "w": 2},
        {"u": 5, "v": 6, "w": 3}
    ],
    "source": 4,
    "weight_model": "edge"
}"#;

#[test]
fn reference_dataset_full_report() {
    let tmp = TempDir::new().expect("temp dir");
    let reports = run_on_input(tmp.path(), REFERENCE_INPUT);

    assert_eq!(reports.len(), 1);
    let report = &reports[0];

    assert_eq!(report["dataset_index"], 0);
    assert_eq!(report["weight_model"], "edge");
    assert_eq!(report["source_vertex"], 4);
    assert_eq!(report["num_components"], 5);
    assert!(report.get("warning").is_none(), "condensation sorts fully");

    // One component holds {0,1,2}; the rest are singletons.
    let sccs = report["SCCs"].as_array().expect("SCCs array");
    let mut sorted_sccs: Vec<Vec<u64>> = sccs
        .iter()
        .map(|c| {
            let mut members: Vec<u64> = c
                .as_array()
                .expect("component array")
                .iter()
                .map(|v| v.as_u64().expect("vertex index"))
                .collect();
            members.sort_unstable();
            members
        })
        .collect();
    sorted_sccs.sort();
    assert_eq!(
        sorted_sccs,
        vec![vec![0, 1, 2], vec![3], vec![4], vec![5], vec![6]]
    );

    // Four condensation edges, one of them cycle-component → {3} with w=5.
    let edges = report["condensation_edges"].as_array().expect("edges");
    assert_eq!(edges.len(), 4);
    assert!(
        edges.iter().any(|e| e["w"] == 5),
        "the cycle exit edge keeps weight 5"
    );

    // From vertex 4: own component at distance 0, component of vertex 6 at
    // distance 2 + 3 = 5 in both solvers; upstream stays infinite.
    let source_comp = report["source_component"].as_u64().expect("index") as usize;
    let shortest = report["shortest_distances"].as_array().expect("array");
    let longest = report["longest_distances"].as_array().expect("array");
    assert_eq!(shortest[source_comp], 0);
    assert_eq!(longest[source_comp], 0);
    assert!(shortest.contains(&Value::from(5)));
    assert!(longest.contains(&Value::from(5)));
    assert!(shortest.iter().any(|d| d == "Infinity"));
    assert!(longest.iter().any(|d| d == "-Infinity"));

    assert_eq!(report["critical_length"], 5);

    // The full task order expands the cycle before the chain.
    let task_order: Vec<u64> = report["derived_task_order"]
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v.as_u64().expect("vertex"))
        .collect();
    assert_eq!(task_order, vec![2, 1, 0, 3, 4, 5, 6]);

    // Metrics carry per-phase counters and timings.
    let metrics = &report["metrics"];
    assert_eq!(metrics["scc_counters"]["dfs_visits"], 7);
    assert_eq!(metrics["topo_counters"]["kahn_pops"], 5);
    assert!(metrics["total_time_ns"].as_u64().is_some());
}

#[test]
fn bad_dataset_is_reported_and_the_rest_still_run() {
    let tmp = TempDir::new().expect("temp dir");
    let input = r#"[
        {"directed": true, "n": 2, "edges": [{"u": 0, "v": 9}]},
        {"directed": true, "n": 2, "edges": [{"u": 0, "v": 1}]}
    ]"#;

    let reports = run_on_input(tmp.path(), input);

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["dataset_index"], 0);
    assert!(
        reports[0]["error"]
            .as_str()
            .expect("error message")
            .contains("out of range"),
    );
    assert_eq!(reports[1]["num_components"], 2);
}

#[test]
fn single_object_input_is_accepted() {
    let tmp = TempDir::new().expect("temp dir");
    let reports = run_on_input(
        tmp.path(),
        r#"{"directed": false, "n": 3, "edges": [{"u": 0, "v": 1}]}"#,
    );

    assert_eq!(reports.len(), 1);
    // Undirected edge merges {0,1}; vertex 2 is isolated.
    assert_eq!(reports[0]["num_components"], 2);
}

#[test]
fn empty_graph_degrades_gracefully() {
    let tmp = TempDir::new().expect("temp dir");
    let reports = run_on_input(tmp.path(), r#"{"directed": true, "n": 0}"#);

    let report = &reports[0];
    assert_eq!(report["num_components"], 0);
    assert_eq!(report["source_component"], Value::Null);
    assert_eq!(report["critical_path"], Value::Array(vec![]));
    assert_eq!(report["critical_length"], "-Infinity");
}

#[test]
fn missing_input_file_fails_with_context() {
    let tmp = TempDir::new().expect("temp dir");
    gridlock_cmd(tmp.path())
        .args(["does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn out_of_range_source_rejects_only_that_dataset() {
    let tmp = TempDir::new().expect("temp dir");
    let reports = run_on_input(
        tmp.path(),
        r#"{"directed": true, "n": 3, "edges": [{"u": 0, "v": 1}], "source": 7}"#,
    );

    assert!(
        reports[0]["error"]
            .as_str()
            .expect("error message")
            .contains("vertex 7"),
    );
}
