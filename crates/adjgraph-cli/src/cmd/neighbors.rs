//! `ag neighbors <vertex>`: direct parents and children.

use std::collections::BTreeSet;
use std::io::Write;

use clap::Args;
use serde::Serialize;

use super::{GraphArg, Settings};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `ag neighbors`.
#[derive(Args, Debug)]
pub struct NeighborsArgs {
    #[command(flatten)]
    pub graph: GraphArg,

    /// Vertex id to inspect.
    #[arg(value_name = "VERTEX")]
    pub vertex: String,
}

#[derive(Debug, Serialize)]
struct NeighborsOutput {
    vertex: String,
    parents: Vec<String>,
    children: Vec<String>,
}

/// Execute `ag neighbors`.
pub fn run_neighbors(args: &NeighborsArgs, settings: &Settings) -> anyhow::Result<()> {
    let graph = args.graph.load(settings)?;
    let payload = NeighborsOutput {
        vertex: args.vertex.clone(),
        parents: owned(graph.parents(&args.vertex)?),
        children: owned(graph.children(&args.vertex)?),
    };

    render_mode(settings.output, &payload, render_text, render_pretty)
}

fn owned(set: BTreeSet<&str>) -> Vec<String> {
    set.into_iter().map(str::to_string).collect()
}

fn render_text(payload: &NeighborsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "parents\t{}", payload.parents.join(" "))?;
    writeln!(w, "children\t{}", payload.children.join(" "))
}

fn render_pretty(payload: &NeighborsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    let list = |ids: &[String]| {
        if ids.is_empty() {
            "(none)".to_string()
        } else {
            ids.join(", ")
        }
    };
    pretty_section(w, &format!("Neighbors of {}", payload.vertex))?;
    pretty_kv(w, "Parents", list(&payload.parents))?;
    pretty_kv(w, "Children", list(&payload.children))
}
