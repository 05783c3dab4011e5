//! # Logging
//!
//! Global terminal logger. Never log from the JACK process callback: it runs on the real-time
//! thread.
use anyhow::Result;
use slog_scope::GlobalLoggerGuard;
use sloggers::terminal::{Destination, TerminalLoggerBuilder};
use sloggers::types::Severity;
use sloggers::Build;

/// Map the number of `-v` flags to a severity.
pub fn severity(verbosity: u64) -> Severity {
    match verbosity {
        0 => Severity::Error,
        1 => Severity::Warning,
        2 => Severity::Info,
        3 => Severity::Debug,
        _ => Severity::Trace,
    }
}

/// Install the global logger. It stays installed while the guard is alive.
pub fn init(verbosity: u64) -> Result<GlobalLoggerGuard> {
    let mut builder = TerminalLoggerBuilder::new();
    builder.level(severity(verbosity));
    builder.destination(Destination::Stderr);
    let logger = builder
        .build()
        .map_err(|e| anyhow!("Failed to build logger: {}", e))?;
    Ok(slog_scope::set_global_logger(logger))
}
