//! Logging setup using tracing.
//!
//! The CLI writes to stderr. The TUI owns the terminal, so it writes to a
//! log file instead.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "levdash.log";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to `<dir>/levdash.log`.
    File(PathBuf),
}

/// Build the filter: `RUST_LOG` wins, otherwise `default_level`.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(default_level))
}

/// Filter for a configured level, falling back to `info` on a bad directive.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Path of the log file inside `dir`.
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

/// Install the global subscriber.
pub fn init_logging(target: &LogTarget, default_level: &str) -> Result<()> {
    let filter = env_filter(default_level);
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .context("failed to install log subscriber")?;
        }
        LogTarget::File(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log dir {}", dir.display()))?;
            let path = log_file_path(dir);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(true)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("failed to install log subscriber")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_in_dir() {
        assert_eq!(
            log_file_path(Path::new("/tmp/levdash")),
            PathBuf::from("/tmp/levdash/levdash.log")
        );
    }

    #[test]
    fn configured_level_is_used() {
        assert_eq!(level_filter("debug").to_string(), "debug");
    }

    #[test]
    fn invalid_level_falls_back_to_info() {
        assert_eq!(level_filter("levdash=loud").to_string(), "info");
    }
}
