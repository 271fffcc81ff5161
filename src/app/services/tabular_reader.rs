//! Comma-separated input reading
//!
//! Turns a CSV file with a header line into an ordered sequence of [`Row`]
//! records. Values are kept as raw strings; typing happens in the field
//! extractor.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConvertError, Result};
use crate::models::Row;

/// Reader for a single CSV input file
#[derive(Debug, Clone)]
pub struct TabularReader {
    path: PathBuf,
}

impl TabularReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every data row, using the first line as column names
    pub fn read_rows(&self) -> Result<Vec<Row>> {
        if !self.path.exists() {
            return Err(ConvertError::not_found(&self.path));
        }

        info!("Reading CSV file: {}", self.path.display());

        let file = std::fs::File::open(&self.path)
            .map_err(|e| ConvertError::read(&self.path, csv::Error::from(e)))?;

        parse_rows(file, &self.path)
    }
}

/// Parse CSV content from any reader; `path` is used for diagnostics only
pub fn parse_rows<R: Read>(reader: R, path: &Path) -> Result<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ConvertError::read(path, e))?
        .clone();
    debug!("CSV header columns: {:?}", headers);

    let mut rows = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| ConvertError::read(path, e))?;

        // Short records leave trailing columns absent; surplus fields are dropped
        let values: HashMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();

        rows.push(Row::new(index + 1, values));
    }

    if rows.is_empty() {
        return Err(ConvertError::empty_data(path));
    }

    debug!("Read {} data rows from {}", rows.len(), path.display());
    Ok(rows)
}
