//! One module per `ag` subcommand.
//!
//! Handlers take their clap args plus the resolved [`Settings`] and return
//! `anyhow::Result`; error rendering happens once, in `main`.

use std::io::{self, Write};
use std::path::PathBuf;

use adjgraph_core::{D3Graph, Graph, MergeStrategy, Orientation, Weighting};
use clap::Args;

use crate::config::Config;
use crate::input;
use crate::output::OutputMode;

pub mod closure;
pub mod completions;
pub mod cyclic;
pub mod degree;
pub mod edges;
pub mod info;
pub mod neighbors;
pub mod symmetrize;
pub mod toposort;
pub mod transpose;

/// Flags and config folded into the values every handler needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputMode,
    pub orientation: Orientation,
    pub weighting: Weighting,
    pub merge: MergeStrategy,
}

impl Settings {
    /// Combine config defaults with the global `--undirected` flag.
    pub const fn resolve(config: &Config, undirected_flag: bool, output: OutputMode) -> Self {
        let orientation = if undirected_flag {
            Orientation::Undirected
        } else {
            config.analysis.orientation()
        };
        Self {
            output,
            orientation,
            weighting: config.analysis.weighting(),
            merge: config.analysis.merge,
        }
    }
}

/// The node-link document every analysis command reads.
#[derive(Args, Debug, Clone)]
pub struct GraphArg {
    /// Node-link JSON file, or `-` for stdin.
    #[arg(value_name = "GRAPH")]
    pub input: PathBuf,
}

impl GraphArg {
    pub fn load(&self, settings: &Settings) -> anyhow::Result<Graph> {
        input::load_graph(&self.input, settings.orientation)
    }
}

/// Write a node-link document to stdout: indented unless in text mode.
pub fn emit_document(mode: OutputMode, document: &D3Graph) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Text => serde_json::to_writer(&mut out, document)?,
        OutputMode::Pretty | OutputMode::Json => serde_json::to_writer_pretty(&mut out, document)?,
    }
    writeln!(out)?;
    Ok(())
}

/// Format a degree or weight without a trailing `.0` on whole numbers.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}
