//! Logging Setup - Console, Combined, and Error Sinks
//!
//! One `tracing` registry with three layers:
//! - console: human-readable, colored
//! - `combined.log`: JSON, everything the env filter lets through
//! - `error.log`: JSON, ERROR records only
//!
//! Timestamps are RFC 3339 at a fixed UTC offset from config.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::RunnerConfig;

/// File receiving every record.
pub const COMBINED_LOG: &str = "combined.log";
/// File receiving ERROR records only.
pub const ERROR_LOG: &str = "error.log";

/// Timestamp formatter pinned to a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct OffsetTimer {
    offset: FixedOffset,
}

impl OffsetTimer {
    /// `None` if `hours` is outside what `FixedOffset` accepts.
    pub fn from_hours(hours: i32) -> Option<Self> {
        FixedOffset::east_opt(hours * 3600).map(|offset| Self { offset })
    }

    /// Render `at` in this timer's offset.
    pub fn render<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String {
        at.with_timezone(&self.offset)
            .to_rfc3339_opts(SecondsFormat::Millis, false)
    }
}

impl FormatTime for OffsetTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", self.render(&Utc::now()))
    }
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`.
///
/// # Errors
/// Fails if the log directory or files cannot be created, or if a global
/// subscriber is already installed.
pub fn init(config: &RunnerConfig) -> Result<PathBuf> {
    let log_dir = PathBuf::from(&config.log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log dir {}", log_dir.display()))?;

    let timer = OffsetTimer::from_hours(config.utc_offset_hours)
        .context("utc_offset_hours out of range")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let console = tracing_subscriber::fmt::layer()
        .with_timer(timer)
        .with_target(false);

    let combined = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_timer(timer)
        .with_writer(Mutex::new(open_append(&log_dir.join(COMBINED_LOG))?));

    let errors = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_timer(timer)
        .with_writer(Mutex::new(open_append(&log_dir.join(ERROR_LOG))?))
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(combined)
        .with(errors)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_in_utc_plus_eight() {
        let timer = OffsetTimer::from_hours(8).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 9, 1, 20, 30, 0).unwrap();
        assert_eq!(timer.render(&at), "2024-09-02T04:30:00.000+08:00");
    }

    #[test]
    fn test_render_in_utc() {
        let timer = OffsetTimer::from_hours(0).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(timer.render(&at), "2024-01-01T00:00:00.000+00:00");
    }

    #[test]
    fn test_out_of_range_offset() {
        assert!(OffsetTimer::from_hours(25).is_none());
    }
}
