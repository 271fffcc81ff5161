//! Error handling for CoverageJSON conversion.
//!
//! Every pipeline stage reports failures through [`ConvertError`]. Nothing is
//! recovered locally: the first error aborts the conversion and is reported
//! once at the top level.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Input file contains no data rows: {path}")]
    EmptyData { path: PathBuf },

    #[error("Failed to read input file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Validation failed at row {row}, field '{field}': {reason}")]
    Validation {
        row: usize,
        field: String,
        reason: String,
    },

    #[error("Failed to build coverage document: {reason}")]
    Build { reason: String },

    #[error("Failed to write output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ConvertError {
    /// Create a not-found error for the input path
    pub fn not_found(path: &Path) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
        }
    }

    /// Create an empty-data error for the input path
    pub fn empty_data(path: &Path) -> Self {
        Self::EmptyData {
            path: path.to_path_buf(),
        }
    }

    /// Create a read error wrapping the CSV cause
    pub fn read(path: &Path, source: csv::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a validation error for a specific row and field
    pub fn validation(row: usize, field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            row,
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a document assembly error
    pub fn build(reason: impl Into<String>) -> Self {
        Self::Build {
            reason: reason.into(),
        }
    }

    /// Create a write error wrapping the I/O cause
    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
