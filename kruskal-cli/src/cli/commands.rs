//! Command implementations and argument parsing for the `kruskal` CLI.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kruskal_core::{Graph, KruskalError, NodeId, TieBreak};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeList, EdgeListError};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kruskal", about = "Compute minimum spanning forests lazily.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the minimum spanning forest of an edge list.
    Forest(ForestCommand),
}

/// Options accepted by the `forest` command.
#[derive(Debug, Args, Clone)]
pub struct ForestCommand {
    /// Edge list with one `left right weight` triple per line.
    pub path: PathBuf,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Which of several equal-weight edges is considered first.
    #[arg(long = "tie-break", value_enum, default_value_t = TieBreakArg::Insertion)]
    pub tie_break: TieBreakArg,
}

/// Output formats for the forest summary.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One line per forest edge.
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

/// Tie-break policies selectable from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum TieBreakArg {
    /// Earlier lines win ties.
    Insertion,
    /// Later lines win ties.
    LatestFirst,
}

impl From<TieBreakArg> for TieBreak {
    fn from(value: TieBreakArg) -> Self {
        match value {
            TieBreakArg::Insertion => Self::InsertionOrder,
            TieBreakArg::LatestFirst => Self::LatestFirst,
        }
    }
}

impl fmt::Display for TieBreakArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Insertion => "insertion",
            Self::LatestFirst => "latest-first",
        })
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file was not a valid edge list.
    #[error("invalid edge list `{path}`: {source}")]
    EdgeList {
        /// Path of the offending file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: EdgeListError,
    },
    /// The Kruskal iterator failed.
    #[error(transparent)]
    Core(#[from] KruskalError),
}

/// One accepted forest edge, labelled by node name.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SummaryEdge {
    /// Label of the first endpoint.
    pub from: String,
    /// Label of the second endpoint.
    pub to: String,
    /// Edge weight.
    pub weight: i64,
    /// Zero-based line order among the input edges.
    pub sequence: usize,
}

/// The forest computed for one edge list.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ForestSummary {
    /// Input file stem.
    pub source: String,
    /// Number of distinct node labels.
    pub node_count: usize,
    /// Number of input edges.
    pub edge_count: usize,
    /// Connected components once the forest is complete.
    pub component_count: usize,
    /// Sum of forest edge weights, saturating at the `i64` bounds.
    pub total_weight: i64,
    /// Whether the forest connects every node.
    pub is_tree: bool,
    /// Forest edges in emission order.
    pub edges: Vec<SummaryEdge>,
    /// Every node rendered with its component representative.
    pub nodes: Vec<String>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Format requested for rendering.
    pub format: OutputFormat,
    /// Forest computed by the command.
    pub forest: ForestSummary,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, ForestCommand, OutputFormat, TieBreakArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a b 2\nb c 1\na c 5\n")?;
/// let cli = Cli {
///     command: Command::Forest(ForestCommand {
///         path: file.path().to_path_buf(),
///         format: OutputFormat::Text,
///         tie_break: TieBreakArg::Insertion,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight, 3);
/// assert!(summary.forest.is_tree);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Forest(forest) => {
            Span::current().record("command", field::display("forest"));
            run_forest(forest)
        }
    }
}

#[instrument(
    name = "cli.forest",
    err,
    skip(command),
    fields(path = field::Empty, tie_break = field::Empty),
)]
pub(super) fn run_forest(command: ForestCommand) -> Result<ExecutionSummary, CliError> {
    let ForestCommand {
        path,
        format,
        tie_break,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("tie_break", field::display(tie_break));

    let list = read_edge_list(&path)?;
    let graph = list.into_graph(tie_break.into());
    let forest = summarise(&graph, derive_source_name(&path))?;

    info!(
        nodes = forest.node_count,
        forest_edges = forest.edges.len(),
        components = forest.component_count,
        "command completed"
    );
    Ok(ExecutionSummary { format, forest })
}

pub(super) fn read_edge_list(path: &Path) -> Result<EdgeList, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    EdgeList::parse(BufReader::new(file)).map_err(|source| CliError::EdgeList {
        path: path.to_path_buf(),
        source,
    })
}

/// Drains a fresh Kruskal iterator over `graph` into a summary.
pub(super) fn summarise(graph: &Graph<String>, source: String) -> Result<ForestSummary, CliError> {
    let forest = graph.kruskal_iter().into_forest()?;
    let label = |id: NodeId| {
        graph
            .node(id)
            .map_or_else(|| id.to_string(), |node| node.data().clone())
    };

    let edges: Vec<SummaryEdge> = forest
        .edges()
        .iter()
        .map(|edge| SummaryEdge {
            from: label(edge.node1()),
            to: label(edge.node2()),
            weight: edge.weight(),
            sequence: edge.sequence(),
        })
        .collect();
    let total_weight = edges
        .iter()
        .fold(0_i64, |total, edge| total.saturating_add(edge.weight));
    let render = |name: &String, f: &mut fmt::Formatter<'_>| f.write_str(name);
    let nodes = graph
        .nodes()
        .iter()
        .filter_map(|node| graph.display_node(node.id(), render))
        .map(|display| display.to_string())
        .collect();

    Ok(ForestSummary {
        source,
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        component_count: forest.component_count(),
        total_weight,
        is_tree: forest.is_tree(),
        edges,
        nodes,
    })
}

pub(super) fn derive_source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "edges".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in the format it was requested in.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{ExecutionSummary, ForestSummary, OutputFormat, SummaryEdge, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     format: OutputFormat::Text,
///     forest: ForestSummary {
///         source: "demo".into(),
///         node_count: 2,
///         edge_count: 1,
///         component_count: 1,
///         total_weight: 4,
///         is_tree: true,
///         edges: vec![SummaryEdge { from: "a".into(), to: "b".into(), weight: 4, sequence: 0 }],
///         nodes: vec!["a".into(), "b (a)".into()],
///     },
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("a -- b\t4"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let forest = &summary.forest;
    match summary.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, forest).map_err(io::Error::from)?;
            writeln!(writer)
        }
        OutputFormat::Text => {
            writeln!(writer, "source: {}", forest.source)?;
            writeln!(writer, "nodes: {}", forest.node_count)?;
            writeln!(writer, "components: {}", forest.component_count)?;
            writeln!(writer, "total weight: {}", forest.total_weight)?;
            for edge in &forest.edges {
                writeln!(writer, "{} -- {}\t{}", edge.from, edge.to, edge.weight)?;
            }
            for node in &forest.nodes {
                writeln!(writer, "node\t{node}")?;
            }
            Ok(())
        }
    }
}
