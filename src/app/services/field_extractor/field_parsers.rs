//! Field parsing utilities for input rows
//!
//! Helpers for pulling typed values out of a [`Row`], reporting the row
//! number, field and raw value on failure.

use chrono::DateTime;

use crate::error::{ConvertError, Result};
use crate::models::Row;

/// Get a required, non-blank field value from a row (trimmed)
pub fn get_required_field<'a>(row: &'a Row, field_name: &str) -> Result<&'a str> {
    let value = row.get(field_name).ok_or_else(|| {
        ConvertError::validation(row.number(), field_name, "missing required field")
    })?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::validation(
            row.number(),
            field_name,
            "empty value for required field",
        ));
    }

    Ok(trimmed)
}

/// Parse a required floating point field; NaN and infinities are rejected
pub fn parse_required_f64(row: &Row, field_name: &str) -> Result<f64> {
    let value_str = get_required_field(row, field_name)?;

    let value = value_str.parse::<f64>().map_err(|e| {
        ConvertError::validation(
            row.number(),
            field_name,
            format!("invalid number '{}' ({})", value_str, e),
        )
    })?;

    if !value.is_finite() {
        return Err(ConvertError::validation(
            row.number(),
            field_name,
            format!("non-finite number '{}'", value_str),
        ));
    }

    Ok(value)
}

/// Parse the required timestamp field, optionally checking RFC 3339 shape
///
/// The blank and RFC 3339 checks look at the trimmed value, but the raw
/// value is returned unchanged, surrounding whitespace included.
pub fn parse_required_time(row: &Row, field_name: &str, validate: bool) -> Result<String> {
    let value_str = get_required_field(row, field_name)?;
    let raw = row.get(field_name).unwrap_or(value_str);

    if validate {
        DateTime::parse_from_rfc3339(value_str).map_err(|e| {
            ConvertError::validation(
                row.number(),
                field_name,
                format!("invalid ISO-8601 timestamp '{}' ({})", value_str, e),
            )
        })?;
    }

    Ok(raw.to_string())
}
