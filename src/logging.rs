use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file when `--log-file` is not given.
pub const LOG_ENV_VAR: &str = "REDDIT_TOP_LOG";

/// Resolves the log file base path: the CLI flag wins over the environment.
pub fn log_path(cli_override: Option<PathBuf>) -> Option<PathBuf> {
    cli_override.or_else(|| std::env::var_os(LOG_ENV_VAR).map(PathBuf::from))
}

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless a path is configured, since stdout belongs to
/// the TUI. Log files get a `.{timestamp}.{pid}` suffix so concurrent
/// instances don't clobber each other. `RUST_LOG` overrides the default
/// `info` filter.
pub fn init_tracing(cli_override: Option<PathBuf>) {
    let Some(log_path) = log_path(cli_override) else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path.display(), timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
