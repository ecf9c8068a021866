//! Error types for gradmap operations.
//!
//! The taxonomy is deliberately small: only a structurally unusable input
//! source or configuration is an error. Per-record anomalies (a missing
//! price, an unparseable percentage) are repaired during loading and at
//! worst surface as data-quality warnings on the scored record.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for gradmap operations.
#[derive(Debug, Error)]
pub enum GradmapError {
    /// The program data source is entirely unavailable or unusable:
    /// unreadable file, malformed CSV structure, missing required columns,
    /// or no data rows at all. Fatal; there are no partial results.
    #[error("failed to load program data from {path}: {message}")]
    Load { path: PathBuf, message: String },

    /// Configuration file problems: invalid TOML, weights out of range,
    /// an empty keyword taxonomy.
    #[error("configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failure.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GradmapError {
    /// Create a load error with path context.
    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error halts processing with no partial results.
    ///
    /// Load and config failures are fatal; everything downstream of a
    /// confirmed load degrades per-record instead of erroring.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, GradmapError>;
