//! Reading node-link documents from a file or stdin.

use std::io::Read;
use std::path::Path;

use adjgraph_core::{D3Graph, Graph, Orientation};
use anyhow::{Context, Result};
use tracing::debug;

/// Path argument that means "read stdin".
pub const STDIN_PATH: &str = "-";

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read graph from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn parse_document(source: &str, origin: &Path) -> Result<D3Graph> {
    serde_json::from_str(source).with_context(|| {
        format!(
            "Failed to parse {} as a node-link document",
            origin.display()
        )
    })
}

/// Load `path` and build the graph it describes.
pub fn load_graph(path: &Path, orientation: Orientation) -> Result<Graph> {
    let document = parse_document(&read_source(path)?, path)?;
    debug!(
        nodes = document.nodes.len(),
        links = document.links.len(),
        ?orientation,
        "loaded document"
    );
    Graph::from_d3(&document, orientation)
        .with_context(|| format!("Invalid graph in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_node_link_json() {
        let doc = parse_document(
            r#"{"nodes":[{"id":"a"},{"id":"b"}],"links":[{"source":"a","target":"b"}]}"#,
            Path::new("inline"),
        )
        .expect("valid");
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.links.len(), 1);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let doc = parse_document(
            r#"{"nodes":[{"id":"a","group":1}],"links":[],"directed":true}"#,
            Path::new("inline"),
        )
        .expect("valid");
        assert_eq!(doc.nodes[0].id, "a");
    }

    #[test]
    fn malformed_json_names_the_source() {
        let err = parse_document("{", Path::new("broken.json")).expect_err("invalid");
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn loads_file_with_orientation() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("g.json");
        std::fs::write(
            &path,
            r#"{"nodes":[{"id":"a"},{"id":"b"}],"links":[{"source":"a","target":"b"}]}"#,
        )
        .expect("write");

        let directed = load_graph(&path, Orientation::Directed).expect("load");
        assert!(!directed.is_undirected());
        let undirected = load_graph(&path, Orientation::Undirected).expect("load");
        assert!(undirected.is_undirected());
    }

    #[test]
    fn unknown_link_endpoint_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("g.json");
        std::fs::write(
            &path,
            r#"{"nodes":[{"id":"a"}],"links":[{"source":"a","target":"z"}]}"#,
        )
        .expect("write");

        let err = load_graph(&path, Orientation::Directed).expect_err("unknown");
        assert!(err.downcast_ref::<adjgraph_core::GraphError>().is_some());
    }
}
