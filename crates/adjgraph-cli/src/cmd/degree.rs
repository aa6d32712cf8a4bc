//! `ag degree <vertex>`: in-, out- and total degree of one vertex.

use std::borrow::Cow;
use std::io::Write;

use adjgraph_core::Weighting;
use clap::Args;
use serde::Serialize;

use super::{GraphArg, Settings, format_number};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `ag degree`.
#[derive(Args, Debug)]
pub struct DegreeArgs {
    #[command(flatten)]
    pub graph: GraphArg,

    /// Vertex id to inspect.
    #[arg(value_name = "VERTEX")]
    pub vertex: String,

    /// Sum edge weights instead of counting edges.
    #[arg(long)]
    pub weighted: bool,
}

#[derive(Debug, Serialize)]
struct DegreeOutput {
    vertex: String,
    weighted: bool,
    indegree: f64,
    outdegree: f64,
    degree: f64,
}

/// Execute `ag degree`.
///
/// In undirected mode in- and out-degree are read from the canonical
/// directed form, so they add up to the total.
pub fn run_degree(args: &DegreeArgs, settings: &Settings) -> anyhow::Result<()> {
    let graph = args.graph.load(settings)?;
    let weighting = if args.weighted {
        Weighting::Weighted
    } else {
        settings.weighting
    };

    let vertex = args.vertex.as_str();
    let degree = graph.degree(vertex, weighting, settings.orientation)?;
    let canonical = if settings.orientation.is_undirected() {
        graph.to_directed()
    } else {
        Cow::Borrowed(&graph)
    };
    let payload = DegreeOutput {
        vertex: args.vertex.clone(),
        weighted: weighting == Weighting::Weighted,
        indegree: canonical.indegree(vertex, weighting)?,
        outdegree: canonical.outdegree(vertex, weighting)?,
        degree,
    };

    render_mode(settings.output, &payload, render_text, render_pretty)
}

fn render_text(payload: &DegreeOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "{}\t{}\t{}",
        format_number(payload.indegree),
        format_number(payload.outdegree),
        format_number(payload.degree)
    )
}

fn render_pretty(payload: &DegreeOutput, w: &mut dyn Write) -> std::io::Result<()> {
    let heading = if payload.weighted {
        format!("Weighted degree of {}", payload.vertex)
    } else {
        format!("Degree of {}", payload.vertex)
    };
    pretty_section(w, &heading)?;
    pretty_kv(w, "In", format_number(payload.indegree))?;
    pretty_kv(w, "Out", format_number(payload.outdegree))?;
    pretty_kv(w, "Total", format_number(payload.degree))
}
