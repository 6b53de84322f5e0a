use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file for interactive sessions.
pub const LOG_FILE_ENV: &str = "SHOWROOM_LOG";

/// Initialize tracing for the terminal UI.
///
/// Logging is disabled by default so output never lands on the alternate
/// screen. Set `SHOWROOM_LOG` to a file path to enable it.
///
/// Log files get unique names so concurrent sessions don't clobber each
/// other: `{path}.{timestamp}.{pid}`
pub fn init_tui_tracing() {
    let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

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

/// Initialize tracing for one-shot commands: stderr, `warn` unless
/// `RUST_LOG` says otherwise.
pub fn init_command_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
