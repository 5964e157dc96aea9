//! Error types and Result aliases for OSI Journey
//!
//! Only the configuration layer and the application shell can fail. The
//! activation mapper, the expansion toggle and the catalogs are total and
//! never produce an `Error`.

use std::path::PathBuf;

/// Result type alias for OSI Journey operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for OSI Journey
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to save configuration file
    #[error("Failed to save config to '{}': {reason}", path.display())]
    ConfigSaveFailed { path: PathBuf, reason: String },

    /// Configuration file not found
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Theme not found
    #[error("Theme '{theme_name}' not found")]
    ThemeNotFound { theme_name: String },

    /// Color string is not `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid hex color: '{0}'")]
    InvalidHexColor(String),

    // === Application shell errors ===
    /// The native window could not be started
    #[error("Failed to start GUI: {0}")]
    Gui(String),

    // === I/O and serialization errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
