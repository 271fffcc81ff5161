//! Field extraction and validation
//!
//! Converts raw [`Row`] records into an [`ExtractedSeries`]: timestamps,
//! one longitude/latitude pair, and a value column per configured parameter.
//!
//! ## Point coverage
//!
//! The output describes a single location. The first row's coordinates are
//! canonical; later rows are compared against them according to the
//! configured [`CoordinatePolicy`].

pub mod field_parsers;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::config::{ConverterConfig, CoordinatePolicy, ParameterConfig};
use crate::constants::columns;
use crate::error::{ConvertError, Result};
use crate::models::{ExtractedSeries, Row};
use field_parsers::{parse_required_f64, parse_required_time};

/// Extracts typed columns from input rows
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    parameters: Vec<ParameterConfig>,
    coordinate_policy: CoordinatePolicy,
    validate_times: bool,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(vec![ParameterConfig::air_temperature()])
    }
}

impl FieldExtractor {
    pub fn new(parameters: Vec<ParameterConfig>) -> Self {
        Self {
            parameters,
            coordinate_policy: CoordinatePolicy::default(),
            validate_times: false,
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self {
            parameters: config.parameters.clone(),
            coordinate_policy: config.coordinate_policy,
            validate_times: config.validate_times,
        }
    }

    pub fn with_coordinate_policy(mut self, policy: CoordinatePolicy) -> Self {
        self.coordinate_policy = policy;
        self
    }

    pub fn with_time_validation(mut self, validate: bool) -> Self {
        self.validate_times = validate;
        self
    }

    /// Validate every row and collect typed columns in input order
    pub fn extract(&self, rows: &[Row]) -> Result<ExtractedSeries> {
        if rows.is_empty() {
            return Err(ConvertError::validation(0, columns::TIME, "no data rows to extract"));
        }

        let mut times = Vec::with_capacity(rows.len());
        let mut values: BTreeMap<String, Vec<f64>> = self
            .parameters
            .iter()
            .map(|p| (p.name.clone(), Vec::with_capacity(rows.len())))
            .collect();
        let mut origin: Option<(f64, f64)> = None;
        let mut divergent_rows = 0usize;

        for row in rows {
            let time = parse_required_time(row, columns::TIME, self.validate_times)?;
            let longitude = parse_required_f64(row, columns::LONGITUDE)?;
            let latitude = parse_required_f64(row, columns::LATITUDE)?;

            for parameter in &self.parameters {
                let value = parse_required_f64(row, &parameter.column)?;
                if let Some(column) = values.get_mut(&parameter.name) {
                    column.push(value);
                }
            }

            match origin {
                None => origin = Some((longitude, latitude)),
                Some(first) => {
                    if self.check_coordinates(row, first, (longitude, latitude))? {
                        divergent_rows += 1;
                    }
                }
            }

            times.push(time);
        }

        if divergent_rows > 0 {
            warn!(
                "{} rows have coordinates that differ from the first row; using the first row's location",
                divergent_rows
            );
        }

        let Some((longitude, latitude)) = origin else {
            return Err(ConvertError::validation(0, columns::TIME, "no data rows to extract"));
        };

        info!(
            "Extracted {} time steps for {} parameters at ({}, {})",
            times.len(),
            values.len(),
            longitude,
            latitude
        );

        Ok(ExtractedSeries {
            times,
            longitude,
            latitude,
            values,
        })
    }

    /// Returns true when the row diverges and the policy tolerates it
    fn check_coordinates(&self, row: &Row, first: (f64, f64), current: (f64, f64)) -> Result<bool> {
        let diverged_field = if current.0 != first.0 {
            columns::LONGITUDE
        } else if current.1 != first.1 {
            columns::LATITUDE
        } else {
            return Ok(false);
        };

        match self.coordinate_policy {
            CoordinatePolicy::Strict => Err(ConvertError::validation(
                row.number(),
                diverged_field,
                format!(
                    "coordinates ({}, {}) differ from first row ({}, {})",
                    current.0, current.1, first.0, first.1
                ),
            )),
            CoordinatePolicy::FirstRow => {
                debug!(
                    "Row {} coordinates ({}, {}) differ from first row",
                    row.number(),
                    current.0,
                    current.1
                );
                Ok(true)
            }
        }
    }
}
