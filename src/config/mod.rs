//! Configuration for the terminal host
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/tyrannus/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;
mod ui;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use ui::{
    orientation_str, parse_orientation, FileNav, FilePanel, FileProgress, FileScroll, NavConfig,
    PanelConfig, ProgressConfig, ScrollConfig,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_FPS: u32 = 20;
const MAX_FPS: u32 = 240;

/// Environment variable overriding `[logging] level`
pub const ENV_LOG_LEVEL: &str = "TYRANNUS_LOG_LEVEL";
/// Environment variable overriding `fps`
pub const ENV_FPS: &str = "TYRANNUS_FPS";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Frames rendered per second by the host loop
    pub fps: u32,

    /// Default panel styling
    pub panel: PanelConfig,

    /// Tab nav bar layout
    pub nav: NavConfig,

    /// Scrollbar geometry and wheel speed
    pub scroll: ScrollConfig,

    /// Progress bar behavior
    pub progress: ProgressConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            panel: PanelConfig::default(),
            nav: NavConfig::default(),
            scroll: ScrollConfig::default(),
            progress: ProgressConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub fps: Option<u32>,

    /// Optional [panel] section
    pub panel: Option<FilePanel>,

    /// Optional [nav] section
    pub nav: Option<FileNav>,

    /// Optional [scroll] section
    pub scroll: Option<FileScroll>,

    /// Optional [progress] section
    pub progress: Option<FileProgress>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

fn clamp_fps(fps: u32) -> u32 {
    fps.clamp(1, MAX_FPS)
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/tyrannus/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("tyrannus").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse config file contents
    pub(crate) fn parse_file(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load the file layer from `path`; a missing file yields defaults.
    ///
    /// A file that exists but cannot be read or parsed is an error: a broken
    /// config should fail fast, not silently fall back to defaults while
    /// the user debugs the wrong thing.
    fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse_file(&contents).with_context(|| {
                format!(
                    "Failed to parse configuration file {}\n\n  \
                     Tip: check for missing quotes around strings, \
                     true/false booleans and typos in section names.\n  \
                     To reset, run `tyrannus config --reset`.",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| {
                format!("Cannot read configuration file {}", path.display())
            }),
        }
    }

    /// Resolve the three layers; `env` looks up an environment variable
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // FPS: env > file > default
        let fps = env(ENV_FPS)
            .and_then(|v| v.trim().parse().ok())
            .or(file.fps)
            .map(clamp_fps)
            .unwrap_or(DEFAULT_FPS);

        let logging = LoggingConfig::resolve(file.logging, env(ENV_LOG_LEVEL));

        Self {
            fps,
            panel: PanelConfig::from_file(file.panel),
            nav: NavConfig::from_file(file.nav),
            scroll: ScrollConfig::from_file(file.scroll),
            progress: ProgressConfig::from_file(file.progress),
            logging,
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Apply a command-line frame rate override
    pub fn with_fps(mut self, fps: Option<u32>) -> Self {
        if let Some(fps) = fps {
            self.fps = clamp_fps(fps);
        }
        self
    }

    /// Time budget for one frame
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}
