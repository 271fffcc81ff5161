//! CoverageJSON document assembly
//!
//! Builds a `PointSeries` [`CoverageDocument`] from an [`ExtractedSeries`],
//! describing each configured parameter and attaching its values as a
//! one-dimensional range along the time axis.

use std::collections::BTreeMap;
use tracing::debug;

use crate::config::ParameterConfig;
use crate::coverage::{
    CovJsonParameter, CoverageDocument, CoverageType, Domain, NdArray, ObservedProperty, Unit,
};
use crate::error::{ConvertError, Result};
use crate::models::ExtractedSeries;

/// Builds documents for a fixed set of parameters
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    parameters: Vec<ParameterConfig>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(vec![ParameterConfig::air_temperature()])
    }
}

impl DocumentBuilder {
    pub fn new(parameters: Vec<ParameterConfig>) -> Self {
        Self { parameters }
    }

    /// Assemble the document; the series is consumed
    pub fn build(&self, series: ExtractedSeries) -> Result<CoverageDocument> {
        let ExtractedSeries {
            times,
            longitude,
            latitude,
            mut values,
        } = series;
        let time_steps = times.len();

        let mut parameters = BTreeMap::new();
        let mut ranges = BTreeMap::new();

        for parameter in &self.parameters {
            let parameter_values = values.remove(&parameter.name).ok_or_else(|| {
                ConvertError::build(format!(
                    "no values extracted for parameter '{}'",
                    parameter.name
                ))
            })?;

            if parameter_values.len() != time_steps {
                return Err(ConvertError::build(format!(
                    "parameter '{}' has {} values for {} time steps",
                    parameter.name,
                    parameter_values.len(),
                    time_steps
                )));
            }

            parameters.insert(parameter.name.clone(), describe_parameter(parameter));
            ranges.insert(
                parameter.name.clone(),
                NdArray::time_series(parameter_values),
            );
        }

        debug!(
            "Built PointSeries coverage with {} time steps and parameters {:?}",
            time_steps,
            parameters.keys().collect::<Vec<_>>()
        );

        Ok(CoverageDocument {
            type_: CoverageType::Coverage,
            domain: Domain::point_series(longitude, latitude, times),
            parameters,
            ranges,
        })
    }
}

fn describe_parameter(parameter: &ParameterConfig) -> CovJsonParameter {
    CovJsonParameter::new(
        ObservedProperty::new(
            parameter.observed_property_id.clone(),
            &parameter.observed_property_label,
        ),
        Unit::new(
            &parameter.unit_label,
            parameter.unit_symbol.clone(),
            parameter.unit_symbol_type.clone(),
        ),
    )
}
