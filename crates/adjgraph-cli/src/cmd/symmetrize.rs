//! `ag symmetrize`: fold reciprocal edges into an undirected graph.

use adjgraph_core::MergeStrategy;
use clap::Args;
use tracing::debug;

use super::{GraphArg, Settings, emit_document};

/// Arguments for `ag symmetrize`.
#[derive(Args, Debug)]
pub struct SymmetrizeArgs {
    #[command(flatten)]
    pub graph: GraphArg,

    /// How to combine `u -> v` and `v -> u`: max, min, sum or product.
    #[arg(long, value_name = "STRATEGY")]
    pub merge: Option<MergeStrategy>,
}

/// Execute `ag symmetrize`.
///
/// The result is written as a node-link document. With `--undirected` each
/// edge is listed once; otherwise both directions are listed.
pub fn run_symmetrize(args: &SymmetrizeArgs, settings: &Settings) -> anyhow::Result<()> {
    let graph = args.graph.load(settings)?;
    let merge = args.merge.unwrap_or(settings.merge);
    debug!(%merge, "symmetrizing");

    let document = graph
        .make_undirected_with(merge)
        .to_d3(settings.orientation)?;
    emit_document(settings.output, &document)
}
