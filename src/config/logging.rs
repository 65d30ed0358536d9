//! `[logging]` section
//!
//! The in-memory capture layer always runs at `level`; the rolling JSON
//! file layer is added only when `file_enabled` is set.

use serde::Deserialize;
use std::path::PathBuf;

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl From<&str> for LogRotation {
    /// Case-insensitive; anything unrecognised rolls daily
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }
}

impl From<String> for LogRotation {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl LogRotation {
    /// Name written back to the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter level for the crate's own targets
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem; the appender adds the date suffix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "tyrannus".to_string(),
        }
    }
}

/// `[logging]` as written in the file; every key is optional
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<PathBuf>,
    pub file_rotation: Option<LogRotation>,
    pub file_prefix: Option<String>,
}

/// Lowercased level, or `None` when blank
fn normalize_level(level: &str) -> Option<String> {
    let level = level.trim();
    (!level.is_empty()).then(|| level.to_lowercase())
}

impl LoggingConfig {
    /// Merge the file section over the defaults; `env_level` wins over both
    pub fn resolve(file: Option<FileLogging>, env_level: Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let level = env_level
            .as_deref()
            .and_then(normalize_level)
            .or_else(|| file.level.as_deref().and_then(normalize_level))
            .unwrap_or(defaults.level);

        Self {
            level,
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.unwrap_or(defaults.file_dir),
            file_rotation: file.file_rotation.unwrap_or(defaults.file_rotation),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}
