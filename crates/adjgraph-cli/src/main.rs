#![forbid(unsafe_code)]

mod cmd;
mod config;
mod input;
mod output;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use cmd::Settings;
use output::{OutputMode, cli_error, render_error, resolve_output_mode};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "ag",
    author,
    version,
    about = "ag: inspect weighted graphs stored as node-link JSON",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Treat the graph as undirected: links are mirrored on import and
    /// analyses count each reciprocal pair once.
    #[arg(short, long, global = true)]
    undirected: bool,

    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Summary",
        about = "Show order, size, symmetry and acyclicity",
        after_help = "EXAMPLES:\n    # Summarize a graph file\n    ag info graph.json\n\n    # Read from stdin as an undirected graph\n    cat graph.json | ag info - --undirected"
    )]
    Info(cmd::info::InfoArgs),

    #[command(
        next_help_heading = "Summary",
        about = "List edges with their weights",
        after_help = "EXAMPLES:\n    # Directed edge list\n    ag edges graph.json\n\n    # Each undirected edge once\n    ag edges graph.json --undirected --json"
    )]
    Edges(cmd::edges::EdgesArgs),

    #[command(
        next_help_heading = "Vertex",
        about = "Show in-, out- and total degree of a vertex",
        after_help = "EXAMPLES:\n    # Count edges\n    ag degree graph.json a\n\n    # Sum weights\n    ag degree graph.json a --weighted"
    )]
    Degree(cmd::degree::DegreeArgs),

    #[command(
        next_help_heading = "Vertex",
        about = "List direct parents and children of a vertex",
        after_help = "EXAMPLES:\n    ag neighbors graph.json a"
    )]
    Neighbors(cmd::neighbors::NeighborsArgs),

    #[command(
        next_help_heading = "Vertex",
        about = "List every vertex with a path into a vertex",
        after_help = "EXAMPLES:\n    ag ancestors graph.json d"
    )]
    Ancestors(cmd::closure::ClosureArgs),

    #[command(
        next_help_heading = "Vertex",
        about = "List every vertex reachable from a vertex",
        after_help = "EXAMPLES:\n    ag descendants graph.json a"
    )]
    Descendants(cmd::closure::ClosureArgs),

    #[command(
        next_help_heading = "Ordering",
        about = "Print vertices in topological order",
        after_help = "EXAMPLES:\n    ag toposort graph.json\n    ag toposort graph.json --format text | head -1"
    )]
    Toposort(cmd::toposort::ToposortArgs),

    #[command(
        next_help_heading = "Ordering",
        about = "Report whether the graph has a cycle",
        after_help = "EXAMPLES:\n    ag cyclic graph.json\n    ag cyclic graph.json --undirected"
    )]
    Cyclic(cmd::cyclic::CyclicArgs),

    #[command(
        next_help_heading = "Transform",
        about = "Merge reciprocal edges and emit the undirected graph",
        after_help = "EXAMPLES:\n    # Keep the heavier direction\n    ag symmetrize graph.json > undirected.json\n\n    # Add both directions, list each edge once\n    ag symmetrize graph.json --merge sum --undirected"
    )]
    Symmetrize(cmd::symmetrize::SymmetrizeArgs),

    #[command(
        next_help_heading = "Transform",
        about = "Reverse every edge and emit the result",
        after_help = "EXAMPLES:\n    ag transpose graph.json > reversed.json"
    )]
    Transpose(cmd::transpose::TransposeArgs),

    #[command(
        next_help_heading = "Shell",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    ag completions bash\n\n    # Generate zsh completions\n    ag completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("ADJGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "adjgraph=debug,ag=debug,info"
        } else {
            "adjgraph=info,warn"
        })
    });

    let format = env::var("ADJGRAPH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(command: &Commands, settings: &Settings) -> anyhow::Result<()> {
    match command {
        Commands::Info(args) => cmd::info::run_info(args, settings),
        Commands::Edges(args) => cmd::edges::run_edges(args, settings),
        Commands::Degree(args) => cmd::degree::run_degree(args, settings),
        Commands::Neighbors(args) => cmd::neighbors::run_neighbors(args, settings),
        Commands::Ancestors(args) => cmd::closure::run_ancestors(args, settings),
        Commands::Descendants(args) => cmd::closure::run_descendants(args, settings),
        Commands::Toposort(args) => cmd::toposort::run_toposort(args, settings),
        Commands::Cyclic(args) => cmd::cyclic::run_cyclic(args, settings),
        Commands::Symmetrize(args) => cmd::symmetrize::run_symmetrize(args, settings),
        Commands::Transpose(args) => cmd::transpose::run_transpose(args, settings),
        Commands::Completions(args) => {
            let mut cli_command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut cli_command)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let fallback_output = resolve_output_mode(cli.format, cli.json, None);
    let loaded = env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| config::load_config(cli.config.as_deref(), &cwd));
    let config = match loaded {
        Ok(config) => config,
        Err(err) => return fail(fallback_output, &err),
    };

    let output = resolve_output_mode(cli.format, cli.json, config.output.format.as_deref());
    let settings = Settings::resolve(&config, cli.undirected, output);
    debug!(?settings, "resolved settings");

    match run(&cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(output, &err),
    }
}

fn fail(output: OutputMode, err: &anyhow::Error) -> ExitCode {
    debug!(error = %format!("{err:#}"), "command failed");
    if render_error(output, &cli_error(err)).is_err() {
        eprintln!("error: {err:#}");
    }
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["ag", "edges", "g.json", "--undirected", "--json"]);
        assert!(cli.undirected);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Edges(_)));
    }

    #[test]
    fn format_flag_parses() {
        let cli = Cli::parse_from(["ag", "--format", "text", "info", "g.json"]);
        assert_eq!(cli.format, Some(OutputMode::Text));
    }

    #[test]
    fn degree_takes_vertex_and_weighted_flag() {
        let cli = Cli::parse_from(["ag", "degree", "g.json", "a", "--weighted"]);
        let Commands::Degree(args) = cli.command else {
            panic!("expected degree");
        };
        assert_eq!(args.vertex, "a");
        assert!(args.weighted);
    }

    #[test]
    fn symmetrize_parses_merge_strategy() {
        let cli = Cli::parse_from(["ag", "symmetrize", "-", "--merge", "product"]);
        let Commands::Symmetrize(args) = cli.command else {
            panic!("expected symmetrize");
        };
        assert_eq!(args.merge, Some(adjgraph_core::MergeStrategy::Product));
        assert_eq!(args.graph.input, PathBuf::from("-"));
    }

    #[test]
    fn unknown_merge_strategy_is_rejected() {
        let result = Cli::try_parse_from(["ag", "symmetrize", "g.json", "--merge", "mean"]);
        assert!(result.is_err());
    }

    #[test]
    fn all_subcommands_listed() {
        let subcommands = [
            vec!["ag", "info", "g.json"],
            vec!["ag", "edges", "g.json"],
            vec!["ag", "degree", "g.json", "a"],
            vec!["ag", "neighbors", "g.json", "a"],
            vec!["ag", "ancestors", "g.json", "a"],
            vec!["ag", "descendants", "g.json", "a"],
            vec!["ag", "toposort", "g.json"],
            vec!["ag", "cyclic", "g.json"],
            vec!["ag", "symmetrize", "g.json"],
            vec!["ag", "transpose", "g.json"],
            vec!["ag", "completions", "bash"],
        ];
        for args in &subcommands {
            let result = Cli::try_parse_from(args.iter());
            assert!(result.is_ok(), "Failed to parse {args:?}: {:?}", result.err());
        }
    }

    #[test]
    fn vertex_argument_is_required() {
        assert!(Cli::try_parse_from(["ag", "degree", "g.json"]).is_err());
    }
}
