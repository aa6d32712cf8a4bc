//! E2E tests for `symmetrize`, `transpose`, stdin input, config files and
//! shell completions.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn ag_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ag"));
    cmd.current_dir(dir);
    cmd.env("ADJGRAPH_LOG", "error");
    cmd.env_remove("ADJGRAPH_FORMAT");
    cmd
}

/// x -> y twice, y -> x once.
fn lopsided() -> Value {
    json!({
        "nodes": [{"id": "x"}, {"id": "y"}],
        "links": [
            {"source": "x", "target": "y"},
            {"source": "x", "target": "y"},
            {"source": "y", "target": "x"}
        ]
    })
}

fn write_graph(dir: &Path, document: &Value) -> PathBuf {
    let path = dir.join("graph.json");
    std::fs::write(&path, serde_json::to_vec(document).expect("serialize")).expect("write graph");
    path
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("ag should not crash");
    assert!(
        output.status.success(),
        "ag failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

fn count_links(document: &Value, source: &str, target: &str) -> usize {
    document["links"]
        .as_array()
        .expect("links array")
        .iter()
        .filter(|link| link["source"] == source && link["target"] == target)
        .count()
}

#[test]
fn symmetrize_default_keeps_heavier_direction() {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(dir.path(), &lopsided());

    let document = stdout_json(ag_cmd(dir.path()).args(["symmetrize", graph.to_str().expect("utf8")]));
    assert_eq!(count_links(&document, "x", "y"), 2);
    assert_eq!(count_links(&document, "y", "x"), 2);
}

#[test]
fn symmetrize_sum_listed_once_when_undirected() {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(dir.path(), &lopsided());

    let document = stdout_json(ag_cmd(dir.path()).args([
        "symmetrize",
        graph.to_str().expect("utf8"),
        "--merge",
        "sum",
        "--undirected",
    ]));
    // Undirected import mirrors each link: x-y carries 3 + 3.
    assert_eq!(
        count_links(&document, "x", "y") + count_links(&document, "y", "x"),
        6
    );
}

#[test]
fn transpose_reverses_links() {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(
        dir.path(),
        &json!({
            "nodes": [{"id": "a"}, {"id": "b"}],
            "links": [{"source": "a", "target": "b"}]
        }),
    );

    let document = stdout_json(ag_cmd(dir.path()).args(["transpose", graph.to_str().expect("utf8")]));
    assert_eq!(
        document,
        json!({
            "nodes": [{"id": "a"}, {"id": "b"}],
            "links": [{"source": "b", "target": "a"}]
        })
    );
}

#[test]
fn transpose_output_feeds_back_through_stdin() {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(
        dir.path(),
        &json!({
            "nodes": [{"id": "a"}, {"id": "b"}, {"id": "c"}],
            "links": [
                {"source": "a", "target": "b"},
                {"source": "b", "target": "c"}
            ]
        }),
    );

    let reversed = ag_cmd(dir.path())
        .args(["transpose", graph.to_str().expect("utf8")])
        .output()
        .expect("ag should not crash");
    assert!(reversed.status.success());

    ag_cmd(dir.path())
        .args(["toposort", "-", "--format", "text"])
        .write_stdin(reversed.stdout)
        .assert()
        .success()
        .stdout("c\nb\na\n");
}

#[test]
fn malformed_stdin_is_reported() {
    let dir = TempDir::new().expect("tempdir");

    ag_cmd(dir.path())
        .args(["info", "-", "--format", "text"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("as a node-link document"));
}

#[test]
fn project_config_sets_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(dir.path(), &lopsided());
    std::fs::write(
        dir.path().join("adjgraph.toml"),
        "[analysis]\nweighted = true\n\n[output]\nformat = \"json\"\n",
    )
    .expect("write config");

    // No --json: the format comes from the config file.
    let degree = stdout_json(ag_cmd(dir.path()).args(["degree", graph.to_str().expect("utf8"), "x"]));
    assert_eq!(degree["weighted"], true);
    assert_eq!(degree["outdegree"], 2.0);
    assert_eq!(degree["indegree"], 1.0);
}

#[test]
fn explicit_config_overrides_project_file() {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(dir.path(), &lopsided());
    std::fs::write(dir.path().join("adjgraph.toml"), "[output]\nformat = \"text\"\n")
        .expect("write config");
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "[analysis]\nundirected = true\n").expect("write config");

    let info = stdout_json(ag_cmd(dir.path()).args([
        "info",
        graph.to_str().expect("utf8"),
        "--config",
        explicit.to_str().expect("utf8"),
        "--json",
    ]));
    assert_eq!(info["orientation"], "undirected");
    assert_eq!(info["size"], 1);
}

#[test]
fn invalid_config_fails_before_running() {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(dir.path(), &lopsided());
    std::fs::write(dir.path().join("adjgraph.toml"), "[analysis]\nmerge = \"mean\"\n")
        .expect("write config");

    ag_cmd(dir.path())
        .args(["info", graph.to_str().expect("utf8"), "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn format_env_var_selects_text() {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(dir.path(), &lopsided());

    ag_cmd(dir.path())
        .env("ADJGRAPH_FORMAT", "text")
        .args(["cyclic", graph.to_str().expect("utf8")])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().expect("tempdir");

    ag_cmd(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("toposort"))
        .stdout(predicate::str::contains("symmetrize"));
}
