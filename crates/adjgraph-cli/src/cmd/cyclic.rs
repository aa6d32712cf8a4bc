//! `ag cyclic`: whether the graph contains a cycle.

use clap::Args;
use serde::Serialize;

use super::{GraphArg, Settings};
use crate::output::render;

/// Arguments for `ag cyclic`.
#[derive(Args, Debug)]
pub struct CyclicArgs {
    #[command(flatten)]
    pub graph: GraphArg,
}

#[derive(Debug, Serialize)]
struct CyclicOutput {
    cyclic: bool,
    undirected: bool,
}

/// Execute `ag cyclic`.
pub fn run_cyclic(args: &CyclicArgs, settings: &Settings) -> anyhow::Result<()> {
    let graph = args.graph.load(settings)?;
    let payload = CyclicOutput {
        cyclic: graph.is_cyclic(settings.orientation)?,
        undirected: settings.orientation.is_undirected(),
    };

    render(settings.output, &payload, |p, w| writeln!(w, "{}", p.cyclic))
}
