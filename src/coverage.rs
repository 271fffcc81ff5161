//! CoverageJSON document types.
//!
//! CoverageJSON describes coverage data as a domain (the axes values are
//! indexed by), parameter metadata, and ranges holding the values themselves.
//! Only the members needed for `PointSeries` documents are modelled.
//!
//! Map-valued members use [`BTreeMap`] so serialization order is stable and
//! identical input always produces identical output.
//!
//! See: <https://covjson.org/>

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{
    DOMAIN_TYPE, GREGORIAN_CALENDAR, LABEL_LANGUAGE, NDARRAY_DATA_TYPE, NDARRAY_TYPE,
    PARAMETER_TYPE, UNIT_LABEL_LANGUAGE, WGS84_CRS_URI, axes,
};

/// A CoverageJSON document containing a single coverage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverageDocument {
    /// Document type (always "Coverage").
    #[serde(rename = "type")]
    pub type_: CoverageType,

    pub domain: Domain,

    /// Parameter definitions keyed by parameter name.
    pub parameters: BTreeMap<String, CovJsonParameter>,

    /// Data ranges keyed by parameter name.
    pub ranges: BTreeMap<String, NdArray>,
}

/// Coverage type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CoverageType {
    Coverage,
}

/// The domain of a coverage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Domain {
    /// Domain type (always "Domain").
    #[serde(rename = "type")]
    pub type_: String,

    #[serde(rename = "domainType")]
    pub domain_type: DomainType,

    pub axes: BTreeMap<String, Axis>,

    pub referencing: Vec<ReferenceSystemConnection>,
}

impl Domain {
    /// Create a point series domain (time series at a single point).
    pub fn point_series(x: f64, y: f64, t_values: Vec<String>) -> Self {
        let mut domain_axes = BTreeMap::new();
        domain_axes.insert(
            axes::T.to_string(),
            Axis::new(t_values.into_iter().map(AxisValue::String).collect()),
        );
        domain_axes.insert(axes::X.to_string(), Axis::new(vec![AxisValue::Float(x)]));
        domain_axes.insert(axes::Y.to_string(), Axis::new(vec![AxisValue::Float(y)]));

        let referencing = vec![
            ReferenceSystemConnection {
                coordinates: vec![axes::X.to_string(), axes::Y.to_string()],
                system: ReferenceSystem::Geographic {
                    id: WGS84_CRS_URI.to_string(),
                },
            },
            ReferenceSystemConnection {
                coordinates: vec![axes::T.to_string()],
                system: ReferenceSystem::Temporal {
                    calendar: GREGORIAN_CALENDAR.to_string(),
                },
            },
        ];

        Self {
            type_: DOMAIN_TYPE.to_string(),
            domain_type: DomainType::PointSeries,
            axes: domain_axes,
            referencing,
        }
    }
}

/// Domain types this crate produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DomainType {
    /// Point series (time series at a point).
    PointSeries,
}

/// An axis given as an explicit list of values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Axis {
    pub values: Vec<AxisValue>,
}

impl Axis {
    pub fn new(values: Vec<AxisValue>) -> Self {
        Self { values }
    }
}

/// A value on an axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AxisValue {
    /// Coordinate value.
    Float(f64),
    /// Timestamp.
    String(String),
}

/// Connection between axes and their reference system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceSystemConnection {
    pub coordinates: Vec<String>,
    pub system: ReferenceSystem,
}

/// Reference system definitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ReferenceSystem {
    #[serde(rename = "GeographicCRS")]
    Geographic {
        /// CRS identifier URI.
        id: String,
    },

    #[serde(rename = "TemporalRS")]
    Temporal { calendar: String },
}

/// Language-tagged text, e.g. `{"en": "Air Temperature"}`.
pub type I18nString = BTreeMap<String, String>;

fn i18n(language: &str, text: &str) -> I18nString {
    let mut map = BTreeMap::new();
    map.insert(language.to_string(), text.to_string());
    map
}

/// A parameter in CoverageJSON format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CovJsonParameter {
    /// Type (always "Parameter").
    #[serde(rename = "type")]
    pub type_: String,

    #[serde(rename = "observedProperty")]
    pub observed_property: ObservedProperty,

    pub unit: Unit,
}

impl CovJsonParameter {
    pub fn new(observed_property: ObservedProperty, unit: Unit) -> Self {
        Self {
            type_: PARAMETER_TYPE.to_string(),
            observed_property,
            unit,
        }
    }
}

/// The observed property being measured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObservedProperty {
    pub label: I18nString,

    /// URI identifier for the property.
    pub id: String,
}

impl ObservedProperty {
    /// Create an observed property with an English label.
    pub fn new(id: impl Into<String>, label: &str) -> Self {
        Self {
            label: i18n(LABEL_LANGUAGE, label),
            id: id.into(),
        }
    }
}

/// Unit of measurement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Unit {
    pub label: I18nString,
    pub symbol: UnitSymbol,
}

impl Unit {
    /// Create a unit with a language-neutral label.
    pub fn new(label: &str, symbol: impl Into<String>, symbol_type: impl Into<String>) -> Self {
        Self {
            label: i18n(UNIT_LABEL_LANGUAGE, label),
            symbol: UnitSymbol {
                value: symbol.into(),
                type_: symbol_type.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitSymbol {
    pub value: String,

    /// Vocabulary URI, e.g. UCUM.
    #[serde(rename = "type")]
    pub type_: String,
}

/// N-dimensional array of parameter values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NdArray {
    /// Type (always "NdArray").
    #[serde(rename = "type")]
    pub type_: String,

    #[serde(rename = "dataType")]
    pub data_type: String,

    #[serde(rename = "axisNames")]
    pub axis_names: Vec<String>,

    pub shape: Vec<usize>,

    pub values: Vec<f64>,
}

impl NdArray {
    /// Create a one-dimensional array along the time axis.
    pub fn time_series(values: Vec<f64>) -> Self {
        Self {
            type_: NDARRAY_TYPE.to_string(),
            data_type: NDARRAY_DATA_TYPE.to_string(),
            axis_names: vec![axes::T.to_string()],
            shape: vec![values.len()],
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_point_series_domain_json() {
        let domain = Domain::point_series(-3.0, 51.0, vec!["2023-01-01T00:00:00Z".to_string()]);
        let value = serde_json::to_value(&domain).unwrap();

        assert_eq!(value["type"], "Domain");
        assert_eq!(value["domainType"], "PointSeries");
        assert_eq!(value["axes"]["t"]["values"], json!(["2023-01-01T00:00:00Z"]));
        assert_eq!(value["axes"]["x"]["values"], json!([-3.0]));
        assert_eq!(value["axes"]["y"]["values"], json!([51.0]));
        assert_eq!(
            value["referencing"],
            json!([
                {
                    "coordinates": ["x", "y"],
                    "system": {
                        "type": "GeographicCRS",
                        "id": "http://www.opengis.net/def/crs/EPSG/0/4326"
                    }
                },
                {
                    "coordinates": ["t"],
                    "system": { "type": "TemporalRS", "calendar": "Gregorian" }
                }
            ])
        );
    }

    #[test]
    fn test_parameter_json() {
        let parameter = CovJsonParameter::new(
            ObservedProperty::new(
                "http://vocab.nerc.ac.uk/standard_name/air_temperature",
                "Air Temperature",
            ),
            Unit::new("Kelvin", "K", "http://www.opengis.net/def/uom/UCUM/"),
        );

        assert_eq!(
            serde_json::to_value(&parameter).unwrap(),
            json!({
                "type": "Parameter",
                "observedProperty": {
                    "label": { "en": "Air Temperature" },
                    "id": "http://vocab.nerc.ac.uk/standard_name/air_temperature"
                },
                "unit": {
                    "label": { "": "Kelvin" },
                    "symbol": {
                        "value": "K",
                        "type": "http://www.opengis.net/def/uom/UCUM/"
                    }
                }
            })
        );
    }

    #[test]
    fn test_time_series_ndarray() {
        let array = NdArray::time_series(vec![280.5, 281.0]);

        assert_eq!(array.shape, vec![2]);
        assert_eq!(
            serde_json::to_value(&array).unwrap(),
            json!({
                "type": "NdArray",
                "dataType": "float",
                "axisNames": ["t"],
                "shape": [2],
                "values": [280.5, 281.0]
            })
        );
    }
}
