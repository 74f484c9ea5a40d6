/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `graphenum` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The file could not be read, is not JSON,
///   or describes an invalid graph. Nothing was enumerated.
/// - Exit code **1**: logical failure. The graph loaded but the question had
///   no answer (unknown anchor, no route, budget exhausted, no cycles under
///   `--require`).
use std::fmt;
use std::path::PathBuf;

use graphenum_core::{EnumerationError, InputError, PathError};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `graphenum` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a JSON graph document.
    ParseFailed {
        /// Parser message with line and column.
        detail: String,
    },

    /// The document parsed but its edge or length lists are invalid.
    InvalidGraph(InputError),

    /// An argument was rejected before any enumeration ran.
    InvalidArgument {
        /// What was wrong with it.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// An anchor is not a vertex of the graph.
    InvalidVertex {
        /// The anchor as given on the command line.
        vertex: String,
    },

    /// No route connects the endpoints without passing through an anchor.
    PathNotFound {
        /// Start vertex.
        from: String,
        /// End vertex.
        to: String,
    },

    /// The vertex limit or candidate budget stopped enumeration.
    Enumeration(EnumerationError),

    /// `--require` was given and the graph has no matching cycle.
    NoCycles,
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (file not found, parse error, invalid graph, etc.).
    /// - `1`: logical failure (no route, budget exhausted, etc.).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::InvalidGraph(_)
            | Self::InvalidArgument { .. } => 2,

            Self::InvalidVertex { .. }
            | Self::PathNotFound { .. }
            | Self::Enumeration(_)
            | Self::NoCycles => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed { detail } => format!("error: invalid graph document: {detail}"),
            Self::InvalidGraph(e) => format!("error: invalid graph: {e}"),
            Self::InvalidArgument { detail } => format!("error: {detail}"),
            Self::InvalidVertex { vertex } => {
                format!("error: vertex {vertex:?} is not in the graph")
            }
            Self::PathNotFound { from, to } => {
                format!("error: no path from {from} to {to} avoiding the other anchors")
            }
            Self::Enumeration(e) => format!("error: {e}"),
            Self::NoCycles => "error: no cycles found".to_owned(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<InputError> for CliError {
    fn from(e: InputError) -> Self {
        Self::InvalidGraph(e)
    }
}

impl From<EnumerationError> for CliError {
    fn from(e: EnumerationError) -> Self {
        Self::Enumeration(e)
    }
}

impl From<PathError> for CliError {
    fn from(e: PathError) -> Self {
        match e {
            PathError::NoAnchors => Self::InvalidArgument {
                detail: "at least one anchor vertex is required".to_owned(),
            },
            PathError::InvalidVertex(v) => Self::InvalidVertex {
                vertex: v.to_string(),
            },
            PathError::Enumeration(e) => Self::Enumeration(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
