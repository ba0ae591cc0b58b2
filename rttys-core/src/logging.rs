use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with JSON formatting and environment-based filtering
///
/// - Uses `RUST_LOG` for log level filtering (defaults to "info" if not set)
/// - Writes to stderr so command output on stdout stays machine-readable
/// - Flattens event fields for cleaner log output
pub fn init_normal_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

/// Human-readable variant for interactive use.
pub fn init_pretty_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .compact()
        .init();
}

pub fn init_logging(mode: LogMode) {
    match mode {
        LogMode::Raw => init_normal_logging(),
        LogMode::Pretty => init_pretty_logging(),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Picks the mode for the stream logs are written to (stderr).
pub fn default_log_mode() -> LogMode {
    log_mode_for(io::stderr().is_terminal())
}

fn log_mode_for(terminal: bool) -> LogMode {
    if terminal {
        LogMode::Pretty
    } else {
        LogMode::Raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Raw,
    Pretty,
}
