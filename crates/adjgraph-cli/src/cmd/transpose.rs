//! `ag transpose`: reverse every edge.

use clap::Args;

use super::{GraphArg, Settings, emit_document};

/// Arguments for `ag transpose`.
#[derive(Args, Debug)]
pub struct TransposeArgs {
    #[command(flatten)]
    pub graph: GraphArg,
}

/// Execute `ag transpose`, writing the result as a node-link document.
pub fn run_transpose(args: &TransposeArgs, settings: &Settings) -> anyhow::Result<()> {
    let graph = args.graph.load(settings)?;
    let document = graph.transpose().to_d3(settings.orientation)?;
    emit_document(settings.output, &document)
}
