//! Tracing initialization and subscriber setup.
//!
//! This module configures the global `tracing` subscriber: an `EnvFilter`
//! followed by a `fmt` layer writing either to stderr or to a rotating log
//! file.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::RotatingFileWriter;
use crate::Config;

/// Default filter directive when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Output
///
/// - `config.log_file` set: plain-text lines appended to that file, rotated
///   at 10 MB with 3 backups retained
/// - otherwise: stderr
///
/// # Initialization Behavior
///
/// - Creates the log file's parent directory if it doesn't exist
/// - Silently skips file logging if that directory cannot be created
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use filter_section::observability::init_tracing;
/// use filter_section::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_file.as_deref().map(Path::new) {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if std::fs::create_dir_all(parent).is_err() {
                    return;
                }
            }

            registry
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(RotatingFileWriter::new(path)),
                )
                .try_init()
        }
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    // A subscriber installed earlier (by the host or a previous call) wins.
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            trace_level: Some("debug".to_string()),
            log_file: Some(dir.path().join("logs/render.log").to_string_lossy().into_owned()),
            ..Default::default()
        };

        init_tracing(&config);
        init_tracing(&config);
        init_tracing(&Config::default());

        tracing::info!("still logging after repeated init");
    }

    #[test]
    fn unwritable_log_directory_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let config = Config {
            log_file: Some(blocker.join("render.log").to_string_lossy().into_owned()),
            ..Default::default()
        };

        init_tracing(&config);
        init_tracing(&config);
    }
}
