//! Error types for the titlecheck library.
//!
//! Only two things stop a validation run: a header that lacks required
//! columns, and input that could not be loaded. Everything wrong with the
//! data itself is a finding in the [`Report`](crate::Report), not an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for titlecheck operations.
#[derive(Debug, Error)]
pub enum TitleCheckError {
    /// The table header is missing one or more required columns.
    #[error("Missing columns in the input file: {}", missing_columns.join(", "))]
    Schema { missing_columns: Vec<String> },

    /// The ingestion layer could not produce a table.
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TitleCheckError {
    /// Missing columns when this is a schema error, otherwise empty.
    pub fn missing_columns(&self) -> &[String] {
        match self {
            TitleCheckError::Schema { missing_columns } => missing_columns,
            _ => &[],
        }
    }
}

/// Failure to read or parse an input file.
#[derive(Debug, Error)]
pub enum InputError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from the spreadsheet reader.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no header row.
    #[error("Empty data: {0}")]
    EmptyData(String),
}

/// Result type alias for titlecheck operations.
pub type Result<T> = std::result::Result<T, TitleCheckError>;
