use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::constants::MAX_LOG_ENTRIES;

type FileWriter = Arc<Mutex<BufWriter<File>>>;

/// Log sink shared by the UI and the `log` facade.
///
/// Entries are kept in memory for the log overlay and, when file logging is
/// enabled, appended to the log file as well.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_writer: Option<FileWriter>,
}

impl Logger {
    /// Create an in-memory logger
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a logger, writing to the default log file when `enabled`
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Create a logger that also appends to the given file
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Default log file location
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("authlist").join("authlist.log"))
    }

    /// Route the `log` facade into this logger.
    ///
    /// Can only succeed once per process.
    pub fn install(&self, level: LevelFilter) -> Result<()> {
        let logger = self.clone();
        fern::Dispatch::new()
            .level(level)
            .chain(fern::Output::call(move |record| {
                logger.log(format!("{} {}: {}", record.level(), record.target(), record.args()));
            }))
            .apply()
            .context("Failed to install log dispatcher")
    }

    /// Record one timestamped entry
    pub fn log(&self, message: String) {
        let entry = format!("[{}] {}", Utc::now().format("%H:%M:%S%.3f"), message);

        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", entry);
                let _ = writer.flush();
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_ENTRIES {
                logs.remove(0);
            }
            logs.push(entry);
        }
    }

    /// Entries newest first
    pub fn get_logs(&self) -> Vec<String> {
        match self.logs.lock() {
            Ok(logs) => logs.iter().rev().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Clear all in-memory logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Whether entries are also written to a file
    pub fn is_enabled(&self) -> bool {
        self.file_writer.is_some()
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
