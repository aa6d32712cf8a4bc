//! `ag edges`: the edge list with weights.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use super::{GraphArg, Settings, format_number};
use crate::output::{pretty_section, render_mode};

/// Arguments for `ag edges`.
#[derive(Args, Debug)]
pub struct EdgesArgs {
    #[command(flatten)]
    pub graph: GraphArg,
}

#[derive(Debug, Serialize)]
struct EdgeRow {
    source: String,
    target: String,
    weight: f64,
}

#[derive(Debug, Serialize)]
struct EdgesOutput {
    undirected: bool,
    edges: Vec<EdgeRow>,
}

/// Execute `ag edges`.
pub fn run_edges(args: &EdgesArgs, settings: &Settings) -> anyhow::Result<()> {
    let graph = args.graph.load(settings)?;
    let edges = graph
        .edges(settings.orientation)?
        .into_iter()
        .map(|(u, v)| {
            Ok(EdgeRow {
                source: u.to_string(),
                target: v.to_string(),
                weight: graph.get_edge((u, v))?,
            })
        })
        .collect::<adjgraph_core::Result<Vec<_>>>()?;

    let payload = EdgesOutput {
        undirected: settings.orientation.is_undirected(),
        edges,
    };
    render_mode(settings.output, &payload, render_text, render_pretty)
}

fn render_text(payload: &EdgesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for edge in &payload.edges {
        writeln!(
            w,
            "{}\t{}\t{}",
            edge.source,
            edge.target,
            format_number(edge.weight)
        )?;
    }
    Ok(())
}

fn render_pretty(payload: &EdgesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if payload.edges.is_empty() {
        return writeln!(w, "No edges.");
    }

    pretty_section(w, &format!("Edges ({})", payload.edges.len()))?;
    let arrow = if payload.undirected { "--" } else { "->" };
    for edge in &payload.edges {
        writeln!(
            w,
            "  {} {arrow} {}  [{}]",
            edge.source,
            edge.target,
            format_number(edge.weight)
        )?;
    }
    Ok(())
}
