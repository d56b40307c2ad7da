//! Error types for question loading and configuration
//!
//! Neither error ever reaches the screen: question errors degrade to the
//! fallback set and config errors degrade to defaults. They exist so the
//! binary can log what went wrong.

use std::path::PathBuf;

use thiserror::Error;

/// Question source error
#[derive(Debug, Error)]
pub enum QuestionError {
    /// Source file could not be opened or read
    #[error("failed to read question source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV layer rejected the header row
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks one or more required columns
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Correct answer index outside the option range
    #[error("answer index {0} is out of range")]
    AnswerOutOfRange(usize),
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for our schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
