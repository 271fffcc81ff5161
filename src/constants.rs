//! Application constants for the CoverageJSON converter
//!
//! Column names, default paths, and the fixed CoverageJSON identifiers used
//! when building documents.

// =============================================================================
// Default Paths
// =============================================================================

/// Input CSV path used when none is given on the command line
pub const DEFAULT_INPUT_PATH: &str = "input_csv_data.csv";

/// Output JSON path used when none is given on the command line
pub const DEFAULT_OUTPUT_PATH: &str = "coverage.json";

// =============================================================================
// Input Columns
// =============================================================================

/// Required input column names
pub mod columns {
    pub const TIME: &str = "time";
    pub const LONGITUDE: &str = "longitude";
    pub const LATITUDE: &str = "latitude";
    pub const TEMPERATURE: &str = "temperature";
}

// =============================================================================
// CoverageJSON Identifiers
// =============================================================================

pub const DOMAIN_TYPE: &str = "Domain";
pub const PARAMETER_TYPE: &str = "Parameter";
pub const NDARRAY_TYPE: &str = "NdArray";
pub const NDARRAY_DATA_TYPE: &str = "float";

/// WGS84 geographic CRS
pub const WGS84_CRS_URI: &str = "http://www.opengis.net/def/crs/EPSG/0/4326";

pub const GREGORIAN_CALENDAR: &str = "Gregorian";

/// Axis names for the point-series domain
pub mod axes {
    pub const T: &str = "t";
    pub const X: &str = "x";
    pub const Y: &str = "y";
}

// =============================================================================
// Default Parameter (air temperature in Kelvin)
// =============================================================================

pub mod air_temperature {
    pub const NAME: &str = "temperature";
    pub const OBSERVED_PROPERTY_ID: &str = "http://vocab.nerc.ac.uk/standard_name/air_temperature";
    pub const OBSERVED_PROPERTY_LABEL: &str = "Air Temperature";
    pub const UNIT_LABEL: &str = "Kelvin";
    pub const UNIT_SYMBOL: &str = "K";
}

/// Symbol type for units expressed in UCUM
pub const UCUM_SYMBOL_TYPE: &str = "http://www.opengis.net/def/uom/UCUM/";

/// Language tag for observed property labels
pub const LABEL_LANGUAGE: &str = "en";

/// Language tag for unit labels (language-neutral)
pub const UNIT_LABEL_LANGUAGE: &str = "";

// =============================================================================
// Logging
// =============================================================================

pub const LOG_TARGET_CRATE: &str = "coveragejson_converter";
