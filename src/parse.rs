//! Numeric parsing policies shared by the coordinate and path parsers.

use crate::error::{Field, LbsError, Result};

/// Parse a float, falling back to `0.0` when the text is not a number.
///
/// This is the fallback policy behind every lenient parser in the crate.
/// Whitespace is not trimmed, so `" 1.5"` reads as zero.
///
/// # Examples
///
/// ```
/// use lbs::parse::parse_float_or_zero;
///
/// assert_eq!(parse_float_or_zero("116.397128"), 116.397128);
/// assert_eq!(parse_float_or_zero("north"), 0.0);
/// assert_eq!(parse_float_or_zero(""), 0.0);
/// ```
pub fn parse_float_or_zero(value: &str) -> f64 {
    match value.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            if !value.is_empty() {
                log::debug!("Substituting 0 for unparsable number {:?}", value);
            }
            0.0
        }
    }
}

/// Parse a float for `field`, reporting the offending text on failure.
pub fn parse_float(value: &str, field: Field) -> Result<f64> {
    if value.is_empty() {
        return Err(LbsError::MissingField {
            field,
            position: 0,
            input: value.to_string(),
        });
    }

    value.parse::<f64>().map_err(|_| LbsError::InvalidNumber {
        field,
        position: 0,
        input: value.to_string(),
    })
}
