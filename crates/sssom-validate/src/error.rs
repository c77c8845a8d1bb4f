//! Error types for the SSSOM validator.

use thiserror::Error;

/// Main error type for validator operations.
///
/// Validation findings are never errors; they are collected into a
/// [`StageReport`](crate::validation::StageReport). Only acquiring the input
/// and wiring the pipeline can fail.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Neither inline text nor a URL was supplied.
    #[error("No SSSOM text or URL provided.")]
    NoInput,

    /// The URL could not be fetched (connection, timeout, body decoding).
    #[error("Failed to fetch '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The URL answered with a non-success status.
    #[error("Fetching '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Malformed SSSOM document.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error parsing the YAML metadata block.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Template registration or rendering failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ValidateError {
    /// Whether the error comes from reaching the remote source.
    pub fn is_fetch(&self) -> bool {
        matches!(self, ValidateError::Fetch { .. } | ValidateError::HttpStatus { .. })
    }
}

/// Result type alias for validator operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
