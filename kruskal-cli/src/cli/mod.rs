//! Command-line interface for computing minimum spanning forests.
//!
//! The `forest` command reads a whitespace-separated edge list and prints the
//! forest chosen by the lazy Kruskal iterator.

mod commands;
mod edge_list;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, ForestCommand, ForestSummary, OutputFormat,
    SummaryEdge, TieBreakArg, render_summary, run_cli,
};
pub use edge_list::{EdgeList, EdgeListError};
