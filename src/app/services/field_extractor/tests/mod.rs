//! Test utilities for field extraction
//!
//! Builders for in-memory rows shared by the extractor test modules.

use std::collections::HashMap;

use crate::models::Row;


/// Build a row with the four standard columns
pub fn observation_row(number: usize, time: &str, lon: &str, lat: &str, temp: &str) -> Row {
    row_from_pairs(
        number,
        &[
            ("time", time),
            ("longitude", lon),
            ("latitude", lat),
            ("temperature", temp),
        ],
    )
}

/// Build a row from arbitrary column/value pairs
pub fn row_from_pairs(number: usize, pairs: &[(&str, &str)]) -> Row {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(column, value)| (column.to_string(), value.to_string()))
        .collect();
    Row::new(number, values)
}

/// The two-row scenario used across the test suite
pub fn sample_rows() -> Vec<Row> {
    vec![
        observation_row(1, "2023-01-01T00:00:00Z", "-3.0", "51.0", "280.5"),
        observation_row(2, "2023-01-01T01:00:00Z", "-3.0", "51.0", "281.0"),
    ]
}
