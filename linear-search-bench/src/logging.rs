//! Subscriber setup shared by the binaries.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Validates a `--log-level` value as an [`EnvFilter`] directive.
///
/// Used as a `clap` value parser so a malformed filter is rejected with the other argument
/// errors.
pub fn parse_log_level(level: &str) -> Result<String, String> {
    EnvFilter::try_new(level)
        .map(|_| level.to_string())
        .map_err(|err| format!("invalid log filter {level:?}: {err}"))
}

/// Installs a stderr `fmt` subscriber filtered at `level` (e.g. `info`, `debug`,
/// `linear_search_bench=trace`).
///
/// Logs go to stderr so that stdout carries only the program's own output. A malformed `level`
/// is reported on stderr and replaced by `info`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|err| {
        eprintln!("Warning: invalid log filter {level:?} ({err}); using \"info\"");
        EnvFilter::new("info")
    });
    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // a second initialization in the same process keeps the first subscriber
    let _ = tracing_subscriber::registry().with(filter).with(stderr_layer).try_init();
}

/// Prints `err` and its chain of sources to stderr.
pub fn report_error(err: &dyn std::error::Error) {
    eprintln!("Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

// TESTS
// ================================================================================================
