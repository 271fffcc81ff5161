//! Core data structures passed between pipeline stages.
//!
//! Each stage hands its output to the next by value; nothing here is shared
//! or mutated once constructed.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// One data line of the input file, keyed by header column name
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    number: usize,
    values: HashMap<String, String>,
}

impl Row {
    /// Create a row; `number` is 1-based and counts data lines after the header
    pub fn new(number: usize, values: HashMap<String, String>) -> Self {
        Self { number, values }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Raw value of a column, if the row has one
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

/// Typed columnar data for a single point location
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSeries {
    /// Timestamps in input order
    pub times: Vec<String>,
    pub longitude: f64,
    pub latitude: f64,
    /// Values per parameter name, each aligned with `times`
    pub values: BTreeMap<String, Vec<f64>>,
}

impl ExtractedSeries {
    /// Number of time steps in the series
    pub fn time_steps(&self) -> usize {
        self.times.len()
    }

    /// Values extracted for the named parameter
    pub fn parameter_values(&self, name: &str) -> Option<&[f64]> {
        self.values.get(name).map(Vec::as_slice)
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionSummary {
    pub rows_read: usize,
    pub time_steps: usize,
    pub parameters: Vec<String>,
    pub output_path: PathBuf,
    pub bytes_written: u64,
    pub processing_time_ms: u128,
}
