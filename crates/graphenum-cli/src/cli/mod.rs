//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use graphenum_core::{DEFAULT_MAX_VERTICES, EnumerationConfig, Strategy};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    Human,
    /// A single pretty-printed JSON object.
    Json,
}

/// Search strategy used by `cycles` and `path`.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyArg {
    /// Enumerate every vertex subset and every ordering of it (default).
    Exhaustive,
    /// Depth-first search that prunes on adjacency and partial length.
    Backtracking,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exhaustive => Strategy::Exhaustive,
            StrategyArg::Backtracking => Strategy::Backtracking,
        }
    }
}

/// All top-level subcommands exposed by the `graphenum` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Check that a graph file's edge and length lists are well formed.
    Validate {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print the vertices and canonical edges of a graph.
    Inspect {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Count the vertex subsets of a graph by size.
    Subsets {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// List every subset, not just the per-size counts.
        #[arg(long)]
        list: bool,
    },

    /// Enumerate all simple cycles, grouped by cycle size.
    Cycles {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Only report cycles with exactly this many edges.
        #[arg(long, value_parser = clap::value_parser!(u32).range(3..))]
        size: Option<u32>,
        /// Exit with code 1 when no cycle is found.
        #[arg(long)]
        require: bool,
    },

    /// Find every shortest route between the first and last anchor.
    ///
    /// Anchors other than the first and last are excluded from routing.
    Path {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Anchor vertices; the first and last (in label order) are the
        /// route endpoints.
        #[arg(value_name = "ANCHOR", num_args = 1.., required = true)]
        anchors: Vec<String>,
    },

    /// Print the graphenum-core library version.
    Version,
}

/// Root CLI struct for the `graphenum` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "graphenum",
    version,
    about = "Exhaustive cycle and shortest-path enumeration",
    long_about = "Enumerates simple cycles and all tied shortest routes in small\n\
                  weighted undirected graphs read from JSON edge lists."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: timing and debug logging
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `GRAPHENUM_MAX_FILE_SIZE` environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "GRAPHENUM_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Enumeration strategy: exhaustive (default) or backtracking.
    #[arg(long, global = true, default_value = "exhaustive", value_enum)]
    pub strategy: StrategyArg,

    /// Abort after evaluating this many candidates (default: unlimited).
    #[arg(long, global = true, env = "GRAPHENUM_MAX_CANDIDATES")]
    pub max_candidates: Option<u64>,

    /// Refuse graphs with more vertices than this.
    #[arg(
        long,
        global = true,
        env = "GRAPHENUM_MAX_VERTICES",
        default_value_t = DEFAULT_MAX_VERTICES
    )]
    pub max_vertices: usize,

    /// Disable ANSI color codes in log output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

impl Cli {
    /// Builds the engine configuration from the global flags.
    pub fn enumeration_config(&self) -> EnumerationConfig {
        let config = EnumerationConfig::default()
            .with_strategy(self.strategy.into())
            .with_max_vertices(self.max_vertices);
        match self.max_candidates {
            Some(limit) => config.with_max_candidates(limit),
            None => config,
        }
    }
}
