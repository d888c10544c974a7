use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// parbfs - level-synchronous parallel breadth-first search over undirected graphs
#[derive(Debug, Parser)]
#[command(name = "parbfs", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load an edge-list file and traverse it in parallel from a root node.
    Run {
        /// Path to the edge-list file (node count, then one `a b` pair per edge).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Node to start the traversal from.
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        root: i64,

        /// Number of worker threads (defaults to the available parallelism).
        #[arg(short, long)]
        threads: Option<usize>,

        /// Minimum number of frontier nodes handed to a worker at once.
        #[arg(long, default_value_t = parbfs::traversal::DEFAULT_MIN_CHUNK)]
        chunk: usize,

        /// Also run the sequential reference and fail if the results differ.
        #[arg(long)]
        compare: bool,
    },

    /// Print the adjacency lists of an edge-list file.
    Show {
        /// Path to the edge-list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,
    },

    /// Write a synthetic graph in edge-list format.
    Generate {
        /// Graph family.
        #[arg(value_enum)]
        kind: GraphKind,

        /// Node count (side length for `grid`).
        #[arg(value_name = "N")]
        size: usize,

        /// Write to this file instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// One `v->n1 n2 ...` line per node with neighbors
    Text,
    /// Graphviz DOT
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphKind {
    /// Simple path 0-1-...-(N-1)
    Path,
    /// Every pair of nodes connected
    Complete,
    /// Binary tree, node i has children 2i+1 and 2i+2
    Tree,
    /// N x N lattice
    Grid,
}
