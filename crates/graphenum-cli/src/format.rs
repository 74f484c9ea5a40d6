/// Output helpers shared by all subcommands.
///
/// Results go to stdout; notes and timing go to stderr. Both respect the
/// global flags:
///
/// - `--quiet` suppresses notes.
/// - `--verbose` adds timing lines such as `enumerated cycles in 3ms`.
/// - `--no-color`, the `NO_COLOR` environment variable, or a non-TTY stderr
///   disable ANSI colors in log output.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Output settings derived from the global CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress all non-error stderr output.
    pub quiet: bool,
    /// Emit timing and debug logging to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// Human-mode helpers
// ---------------------------------------------------------------------------

/// Writes timing information in verbose mode; a no-op otherwise.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

/// Writes an informational note unless quiet mode is on.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_note_human<W: Write>(
    writer: &mut W,
    note: &str,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(writer, "note: {note}")
}

/// Formats a length the way `f64`'s `Display` does (`3` rather than `3.0`).
pub fn format_length(length: f64) -> String {
    format!("{length}")
}

// ---------------------------------------------------------------------------
// JSON-mode helpers
// ---------------------------------------------------------------------------

/// Writes `value` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(writer: &mut W, value: &serde_json::Value) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(writer, "{json}")
}

/// Converts a length to a JSON number; non-finite values become `null`.
pub fn length_value(length: f64) -> serde_json::Value {
    serde_json::Value::from(length)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
