//! `ag info`: order, size, symmetry and acyclicity at a glance.

use std::io::Write;

use adjgraph_core::Orientation;
use clap::Args;
use serde::Serialize;

use super::{GraphArg, Settings};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `ag info`.
#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub graph: GraphArg,
}

#[derive(Debug, Serialize)]
struct InfoOutput {
    order: usize,
    size: usize,
    orientation: Orientation,
    symmetric: bool,
    cyclic: bool,
    vertices: Vec<String>,
}

/// Execute `ag info`.
pub fn run_info(args: &InfoArgs, settings: &Settings) -> anyhow::Result<()> {
    let graph = args.graph.load(settings)?;
    let payload = InfoOutput {
        order: graph.order(),
        size: graph.size(settings.orientation)?,
        orientation: settings.orientation,
        symmetric: graph.is_undirected(),
        cyclic: graph.is_cyclic(settings.orientation)?,
        vertices: graph.vertices().map(str::to_string).collect(),
    };

    render_mode(settings.output, &payload, render_text, render_pretty)
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn orientation_name(orientation: Orientation) -> &'static str {
    if orientation.is_undirected() {
        "undirected"
    } else {
        "directed"
    }
}

fn render_text(info: &InfoOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "order\t{}", info.order)?;
    writeln!(w, "size\t{}", info.size)?;
    writeln!(w, "orientation\t{}", orientation_name(info.orientation))?;
    writeln!(w, "symmetric\t{}", info.symmetric)?;
    writeln!(w, "cyclic\t{}", info.cyclic)
}

fn render_pretty(info: &InfoOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Graph")?;
    pretty_kv(w, "Order", info.order.to_string())?;
    pretty_kv(w, "Size", info.size.to_string())?;
    pretty_kv(w, "Mode", orientation_name(info.orientation))?;
    pretty_kv(w, "Symmetric", yes_no(info.symmetric))?;
    pretty_kv(w, "Cyclic", yes_no(info.cyclic))?;
    if !info.vertices.is_empty() {
        pretty_kv(w, "Vertices", info.vertices.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InfoOutput {
        InfoOutput {
            order: 2,
            size: 1,
            orientation: Orientation::Directed,
            symmetric: false,
            cyclic: false,
            vertices: vec!["a".into(), "b".into()],
        }
    }

    #[test]
    fn text_is_tab_separated() {
        let mut buf = Vec::new();
        render_text(&sample(), &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("order\t2\n"));
        assert!(text.contains("orientation\tdirected\n"));
    }

    #[test]
    fn json_uses_lowercase_orientation() {
        let value = serde_json::to_value(sample()).expect("json");
        assert_eq!(value["orientation"], "directed");
        assert_eq!(value["vertices"][1], "b");
    }

    #[test]
    fn pretty_lists_vertices() {
        let mut buf = Vec::new();
        render_pretty(&sample(), &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("Vertices:"));
        assert!(text.contains("a, b"));
    }
}
