use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "bookgraph.log";

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    // RUST_LOG wins over --verbose
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Human-readable stderr output; stdout is reserved for query/mutate JSON
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        subscriber.init();
        return;
    };

    let (directory, file_name) = appender_location(&log_path);
    let _ = std::fs::create_dir_all(&directory);

    // Structured JSON lines, one file per day
    let file_layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(directory, file_name))
        .with_ansi(false)
        .json();

    subscriber.with(file_layer).init();
}

/// Filter used when `RUST_LOG` is unset
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("bookgraph={}", level)
}

/// Splits `--log-file` into the directory and file-name prefix the rolling
/// appender expects. A bare file name logs into the working directory.
fn appender_location(log_path: &Path) -> (PathBuf, OsString) {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_FILE));
    (directory, file_name)
}
