//! Integration tests for the processor module
//!
//! Tests the complete conversion pipeline against temporary input files.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::ConverterConfig;


pub const SAMPLE_CSV: &str = "time,longitude,latitude,temperature
2023-01-01T00:00:00Z,-3.0,51.0,280.5
2023-01-01T01:00:00Z,-3.0,51.0,281.0
";

/// Write `content` as the input file and return a config pointing at it
pub fn setup_conversion(temp_dir: &TempDir, content: &str) -> ConverterConfig {
    let input = temp_dir.path().join("input_csv_data.csv");
    std::fs::write(&input, content).unwrap();

    ConverterConfig::default()
        .with_input_path(input)
        .with_output_path(temp_dir.path().join("coverage.json"))
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

pub fn output_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("coverage.json")
}
