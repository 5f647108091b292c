//! Error types for SurveyOxide
//!
//! Application-level failures (I/O, config, clipboard) are `SurveyError`.
//! Per-survey validation problems are `RecordError`; those only ever reject the
//! offending record and never abort a catalog load.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for SurveyOxide operations
#[derive(Error, Debug)]
pub enum SurveyError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog directory could not be read
    #[error("Cannot read catalog directory {}: {source}", path.display())]
    CatalogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog loaded but every survey was rejected or none were found
    #[error("No valid surveys found in {}", path.display())]
    EmptyCatalog { path: PathBuf },

    /// System clipboard unavailable or rejected the text
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Result type alias for SurveyOxide operations
pub type Result<T> = std::result::Result<T, SurveyError>;

/// Reasons a single survey description is rejected at load time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("area must be positive, got {0}")]
    NonPositiveArea(f64),

    #[error("spectrum count must be a non-negative integer, got {0}")]
    InvalidNspec(f64),

    #[error("resolution must be positive, got {0}")]
    NonPositiveResolution(f64),

    #[error("unknown status code {0}")]
    UnknownStatus(i64),

    #[error("unknown selection wavelength '{0}'")]
    UnknownBand(String),

    #[error("duplicate survey name '{0}'")]
    DuplicateSurvey(String),

    #[error("malformed survey file: {0}")]
    Malformed(String),
}

/// UI-friendly error message formatting
impl SurveyError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            SurveyError::FileIo(e) => format!("File error: {}", e),
            SurveyError::Polars(e) => format!("Data error: {}", e),
            SurveyError::Json(e) => format!("JSON error: {}", e),
            SurveyError::Config(msg) => format!("Config error: {}", msg),
            SurveyError::CatalogDir { path, source } => {
                format!("Cannot open '{}': {}", path.display(), source)
            }
            SurveyError::EmptyCatalog { path } => {
                format!("No valid surveys in '{}'", path.display())
            }
            SurveyError::Clipboard(e) => format!("Could not copy to clipboard: {}", e),
        }
    }

    /// Get a short title for the error (for toast notifications)
    pub fn title(&self) -> &'static str {
        match self {
            SurveyError::FileIo(_) => "File Error",
            SurveyError::Polars(_) => "Data Error",
            SurveyError::Json(_) => "JSON Error",
            SurveyError::Config(_) => "Configuration Error",
            SurveyError::CatalogDir { .. } => "Catalog Error",
            SurveyError::EmptyCatalog { .. } => "Empty Catalog",
            SurveyError::Clipboard(_) => "Clipboard Error",
        }
    }
}
