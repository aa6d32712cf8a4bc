//! `ag ancestors <vertex>` and `ag descendants <vertex>`.

use std::collections::BTreeSet;
use std::io::Write;

use clap::Args;
use serde::Serialize;

use super::{GraphArg, Settings};
use crate::output::{pretty_section, render_mode};

/// Arguments shared by `ag ancestors` and `ag descendants`.
#[derive(Args, Debug)]
pub struct ClosureArgs {
    #[command(flatten)]
    pub graph: GraphArg,

    /// Vertex id to start from.
    #[arg(value_name = "VERTEX")]
    pub vertex: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum Relation {
    Ancestors,
    Descendants,
}

#[derive(Debug, Serialize)]
struct ClosureOutput {
    vertex: String,
    relation: Relation,
    vertices: Vec<String>,
}

/// Execute `ag ancestors`.
pub fn run_ancestors(args: &ClosureArgs, settings: &Settings) -> anyhow::Result<()> {
    run_closure(args, settings, Relation::Ancestors)
}

/// Execute `ag descendants`.
pub fn run_descendants(args: &ClosureArgs, settings: &Settings) -> anyhow::Result<()> {
    run_closure(args, settings, Relation::Descendants)
}

fn run_closure(args: &ClosureArgs, settings: &Settings, relation: Relation) -> anyhow::Result<()> {
    let graph = args.graph.load(settings)?;
    let set: BTreeSet<&str> = match relation {
        Relation::Ancestors => graph.ancestors(&args.vertex)?,
        Relation::Descendants => graph.descendants(&args.vertex)?,
    };

    let payload = ClosureOutput {
        vertex: args.vertex.clone(),
        relation,
        vertices: set.into_iter().map(str::to_string).collect(),
    };
    render_mode(settings.output, &payload, render_text, render_pretty)
}

fn render_text(payload: &ClosureOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for vertex in &payload.vertices {
        writeln!(w, "{vertex}")?;
    }
    Ok(())
}

fn render_pretty(payload: &ClosureOutput, w: &mut dyn Write) -> std::io::Result<()> {
    let label = match payload.relation {
        Relation::Ancestors => "Ancestors",
        Relation::Descendants => "Descendants",
    };
    if payload.vertices.is_empty() {
        return writeln!(w, "{label} of {}: none", payload.vertex);
    }
    pretty_section(
        w,
        &format!("{label} of {} ({})", payload.vertex, payload.vertices.len()),
    )?;
    for vertex in &payload.vertices {
        writeln!(w, "  {vertex}")?;
    }
    Ok(())
}
