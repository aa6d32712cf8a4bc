//! `ag toposort`: vertices in topological order.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use super::{GraphArg, Settings};
use crate::output::{pretty_section, render_mode};

/// Arguments for `ag toposort`.
#[derive(Args, Debug)]
pub struct ToposortArgs {
    #[command(flatten)]
    pub graph: GraphArg,
}

#[derive(Debug, Serialize)]
struct ToposortOutput {
    order: Vec<String>,
}

/// Execute `ag toposort`.
pub fn run_toposort(args: &ToposortArgs, settings: &Settings) -> anyhow::Result<()> {
    let graph = args.graph.load(settings)?;
    let payload = ToposortOutput {
        order: graph
            .topological_sort()?
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    render_mode(settings.output, &payload, render_text, render_pretty)
}

fn render_text(payload: &ToposortOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for vertex in &payload.order {
        writeln!(w, "{vertex}")?;
    }
    Ok(())
}

fn render_pretty(payload: &ToposortOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Topological order")?;
    for (i, vertex) in payload.order.iter().enumerate() {
        writeln!(w, "{:>4}. {vertex}", i + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_numbers_each_vertex() {
        let payload = ToposortOutput {
            order: vec!["b".into(), "a".into()],
        };
        let mut buf = Vec::new();
        render_pretty(&payload, &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("   1. b\n"));
        assert!(text.contains("   2. a\n"));
    }
}
