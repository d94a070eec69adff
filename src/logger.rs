//! Logging for the slider application.
//!
//! Two sinks are involved. Every line goes into an in-memory buffer that
//! the log panel renders. When logging is enabled in the config, a `fern`
//! dispatch is also installed as the global `log` backend and writes to a
//! file under the user's data directory.

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, LOG_PANEL_CAPACITY};

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    enabled: bool,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(LOG_PANEL_CAPACITY))),
            enabled: false,
            log_file: None,
        }
    }

    /// Build a logger from the `[logging] enabled` setting, writing to the
    /// default log file when enabled.
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_log_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Build an enabled logger that writes to `path`.
    ///
    /// [`Logger::log_file`] is `None` when another global logger was
    /// already installed, since nothing will reach `path` then.
    pub fn with_log_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let installed = install_file_dispatch(&path)?;

        Ok(Self {
            enabled: true,
            log_file: installed.then_some(path),
            ..Self::new()
        })
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{message}");
        self.push(message);
    }

    /// Add an error entry
    pub fn error(&self, message: String) {
        log::error!("{message}");
        self.push(format!("❌ {message}"));
    }

    fn push(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == LOG_PANEL_CAPACITY {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Default log file location: `<data dir>/value-slider/value-slider.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Route the `log` macros to `path`.
///
/// The global logger can only be set once per process; later calls keep the
/// dispatch that is already installed and return `false`.
fn install_file_dispatch(path: &Path) -> Result<bool> {
    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(file)
        .apply();

    if result.is_err() {
        log::warn!(
            "Global logger already installed, not logging to {}",
            path.display()
        );
        return Ok(false);
    }
    Ok(true)
}
