//! User configuration
//!
//! Read from `~/.sparkquiz/config.toml` unless another path is given. Every
//! field has a default, so an absent file or a partial file both work.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::app::DEFAULT_QUESTIONS_FILE;
use crate::constants::timing::DEFAULT_FRAME_MS;
use crate::error::ConfigError;
use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV question source
    pub questions: PathBuf,
    /// Fixed RNG seed for reproducible animations
    pub seed: Option<u64>,
    /// Milliseconds between frames
    pub frame_ms: u64,
    pub show_cursor_trail: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions: PathBuf::from(DEFAULT_QUESTIONS_FILE),
            seed: None,
            frame_ms: DEFAULT_FRAME_MS,
            show_cursor_trail: true,
        }
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        paths::config_file()
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from `path`, logging and falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
                Self::default()
            }
        }
    }

    /// Frame interval; zero is bumped to 1ms so the loop never spins
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}
