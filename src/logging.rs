//! File logging bootstrap.
//!
//! The terminal belongs to the TUI, so log records go to a rotating file
//! instead of stderr. Lines are `event=<name> key=value` pairs.
//!
//! # Invariants
//! - Initialization is idempotent for the same directory and level.
//! - Initialization never panics.
//! - Re-initialization with a different directory or level is rejected.

use crate::error::{DashboardError, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "projecton";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const SUPPORTED_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: String,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

pub fn init_logging(level: &str, log_dir: &Path) -> Result<()> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        return check_matches(state, &level, log_dir);
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        std::fs::create_dir_all(log_dir).map_err(|e| DashboardError::io(log_dir, e))?;

        let logger = Logger::try_with_str(&level)
            .map_err(|e| DashboardError::Logging(format!("invalid log level `{level}`: {e}")))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|e| DashboardError::Logging(format!("failed to start logger: {e}")))?;

        install_panic_hook_once();

        log::info!(
            "event=app_start status=ok platform={} version={} level={} log_dir={}",
            std::env::consts::OS,
            env!("CARGO_PKG_VERSION"),
            level,
            log_dir.display()
        );

        Ok(LoggingState {
            level: level.clone(),
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    check_matches(state, &level, log_dir)
}

/// `(level, log_dir)` once logging is active.
pub fn logging_status() -> Option<(String, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level.clone(), state.log_dir.clone()))
}

fn check_matches(state: &LoggingState, level: &str, log_dir: &Path) -> Result<()> {
    if state.log_dir != log_dir {
        return Err(DashboardError::Logging(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        )));
    }
    if state.level != level {
        return Err(DashboardError::Logging(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        )));
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<String> {
    let lowered = level.trim().to_ascii_lowercase();
    if SUPPORTED_LEVELS.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(DashboardError::Logging(format!(
            "unsupported log level `{}` (expected one of {})",
            level,
            SUPPORTED_LEVELS.join(", ")
        )))
    }
}

// The TUI leaves the alternate screen on exit only; a panic record in the log
// file is the one trace that survives.
fn install_panic_hook_once() {
    PANIC_HOOK_INSTALLED.get_or_init(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            log::error!("event=panic message={}", info);
            default_hook(info);
        }));
    });
}
