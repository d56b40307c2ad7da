//! Filesystem locations for config and logs

use std::path::PathBuf;

use crate::constants::app::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, LOGS_DIR_NAME};

/// Base directory (`~/.sparkquiz`), falling back to the working directory
pub fn base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Default config file location
pub fn config_file() -> PathBuf {
    base_dir().join(CONFIG_FILE_NAME)
}

/// Log directory
pub fn logs_dir() -> PathBuf {
    base_dir().join(LOGS_DIR_NAME)
}
