//! File-based logging using simplelog
//!
//! The embedding host calls [`init`] once at startup with the directory to log
//! into. Level comes from `RUST_LOG`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// `debug-YYYYMMDD-HHMMSS.log`
pub fn log_file_name(now: DateTime<Local>) -> String {
    format!("debug-{}.log", now.format("%Y%m%d-%H%M%S"))
}

/// Level for a `RUST_LOG` value; unset means debug, unknown means info
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value.map(str::to_lowercase) {
        None => LevelFilter::Debug,
        Some(v) => match v.as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        },
    }
}

/// Initialize file-based logging
///
/// Creates a timestamped log file in `log_dir` and returns its path.
pub fn init(log_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join(log_file_name(Local::now()));

    let level = level_from_env(std::env::var("RUST_LOG").ok().as_deref());

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file: {:?}", log_file))?;
    WriteLogger::init(level, config, file).context("Failed to initialize logger")?;

    Ok(log_file)
}
