//! Tracing setup
//!
//! The shell logs to stderr. The TUI owns the terminal, so it logs to a file
//! in the config directory instead.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};

static INIT_LOGGING: Once = Once::new();

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(settings: &Settings, target: LogTarget) -> TrackerResult<()> {
    if INIT_LOGGING.is_completed() {
        return Ok(());
    }

    let (writer, ansi) = match &target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    TrackerError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };
    let filter = build_filter(&settings.log_level);

    INIT_LOGGING.call_once(|| {
        // Another subscriber may already be installed (tests); keep it
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(false)
            .try_init();
    });

    tracing::info!(?target, "logging initialized");
    Ok(())
}
