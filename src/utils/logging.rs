use anyhow::Result;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `RUST_LOG` wins, otherwise the `-v` level
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Timestamped log file name, e.g. `datamuse_20250101_120000.log`
pub fn log_file_name() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("datamuse_{}.log", timestamp)
}

/// Create the log file in `log_dir` and point `latest.log` at it
pub fn open_log_file(log_dir: &Path) -> Result<(File, PathBuf)> {
    std::fs::create_dir_all(log_dir)?;
    let log_path = log_dir.join(log_file_name());

    #[cfg(unix)]
    {
        let latest_path = log_dir.join("latest.log");
        let _ = std::fs::remove_file(&latest_path);
        let _ = std::os::unix::fs::symlink(&log_path, &latest_path);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    Ok((file, log_path))
}

/// Initialize tracing: compact stderr output plus an optional log file.
///
/// Returns the log file path when file logging is on.
pub fn init_tracing(verbosity: u8, log_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .without_time()
        .compact();

    let (file_layer, log_path) = match log_dir {
        Some(dir) => {
            let (file, path) = open_log_file(dir)?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::LocalTime::rfc_3339());
            (Some(layer), Some(path))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    tracing::debug!(target: "logging", "Logging initialized");
    Ok(log_path)
}
