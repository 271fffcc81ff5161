//! Configuration management and validation.
//!
//! Provides the converter configuration: input/output paths, the parameters
//! to extract and describe in the document, and the validation rules applied
//! to each row. Configuration is layered: defaults, then an optional JSON
//! file, then command-line overrides.

use crate::constants::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, UCUM_SYMBOL_TYPE, air_temperature, columns,
};
use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Describes one measured parameter: which column holds its values and how
/// the document labels it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParameterConfig {
    /// Key used under `parameters` and `ranges` in the output document
    pub name: String,

    /// Input column holding the parameter values
    pub column: String,

    /// Observed property URI
    pub observed_property_id: String,

    /// English label of the observed property
    pub observed_property_label: String,

    pub unit_label: String,

    pub unit_symbol: String,

    /// Vocabulary the unit symbol belongs to
    #[serde(default = "default_unit_symbol_type")]
    pub unit_symbol_type: String,
}

fn default_unit_symbol_type() -> String {
    UCUM_SYMBOL_TYPE.to_string()
}

impl ParameterConfig {
    /// Air temperature in Kelvin, read from the `temperature` column
    pub fn air_temperature() -> Self {
        Self {
            name: air_temperature::NAME.to_string(),
            column: columns::TEMPERATURE.to_string(),
            observed_property_id: air_temperature::OBSERVED_PROPERTY_ID.to_string(),
            observed_property_label: air_temperature::OBSERVED_PROPERTY_LABEL.to_string(),
            unit_label: air_temperature::UNIT_LABEL.to_string(),
            unit_symbol: air_temperature::UNIT_SYMBOL.to_string(),
            unit_symbol_type: default_unit_symbol_type(),
        }
    }
}

/// How rows whose coordinates differ from the first row are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoordinatePolicy {
    /// Use the first row's coordinates and log a warning on divergence
    #[default]
    FirstRow,
    /// Reject any row whose coordinates differ from the first row
    Strict,
}

/// Main configuration for a conversion run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub input_path: PathBuf,

    pub output_path: PathBuf,

    /// Parameters to extract, in output order
    pub parameters: Vec<ParameterConfig>,

    pub coordinate_policy: CoordinatePolicy,

    /// Require `time` values to be RFC 3339 date-times
    pub validate_times: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            parameters: vec![ParameterConfig::air_temperature()],
            coordinate_policy: CoordinatePolicy::FirstRow,
            validate_times: false,
        }
    }
}

impl ConverterConfig {
    /// Load configuration from a JSON file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ConvertError::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterConfig>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_coordinate_policy(mut self, policy: CoordinatePolicy) -> Self {
        self.coordinate_policy = policy;
        self
    }

    pub fn with_time_validation(mut self) -> Self {
        self.validate_times = true;
        self
    }

    /// Check the configuration is usable before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.parameters.is_empty() {
            return Err(ConvertError::configuration(
                "At least one parameter must be configured",
            ));
        }

        let reserved = [columns::TIME, columns::LONGITUDE, columns::LATITUDE];
        let mut names = HashSet::new();

        for parameter in &self.parameters {
            if parameter.name.trim().is_empty() || parameter.column.trim().is_empty() {
                return Err(ConvertError::configuration(
                    "Parameter name and column must not be empty",
                ));
            }
            if reserved.contains(&parameter.column.as_str()) {
                return Err(ConvertError::configuration(format!(
                    "Parameter '{}' cannot read from reserved column '{}'",
                    parameter.name, parameter.column
                )));
            }
            if !names.insert(parameter.name.as_str()) {
                return Err(ConvertError::configuration(format!(
                    "Duplicate parameter name '{}'",
                    parameter.name
                )));
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(ConvertError::configuration("Output path must not be empty"));
        }

        Ok(())
    }
}
