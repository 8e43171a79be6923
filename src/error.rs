//! Error types for the strict parsing and GeoJSON entry points.
//!
//! The lenient API (`LngLat::from_string`, `Polyline::from_string`) never
//! produces these; it substitutes zero for anything it cannot read.

use std::fmt;
use thiserror::Error;

/// Which half of a coordinate a parse error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Longitude,
    Latitude,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Longitude => f.write_str("longitude"),
            Field::Latitude => f.write_str("latitude"),
        }
    }
}

/// Errors surfaced by the strict parsers and GeoJSON conversion.
///
/// `position` is the index of the coordinate within a path; a bare
/// coordinate is always position 0.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LbsError {
    #[error("invalid {field} at position {position}: {input:?}")]
    InvalidNumber {
        field: Field,
        position: usize,
        input: String,
    },

    #[error("missing {field} at position {position}: {input:?}")]
    MissingField {
        field: Field,
        position: usize,
        input: String,
    },

    #[error("unexpected extra fields at position {position}: {input:?}")]
    TrailingFields { position: usize, input: String },

    #[error("GeoJSON error: {0}")]
    GeoJson(String),
}

impl LbsError {
    /// Re-tag a coordinate-level error with its index inside a path.
    pub(crate) fn at(self, index: usize) -> Self {
        match self {
            LbsError::InvalidNumber { field, input, .. } => LbsError::InvalidNumber {
                field,
                position: index,
                input,
            },
            LbsError::MissingField { field, input, .. } => LbsError::MissingField {
                field,
                position: index,
                input,
            },
            LbsError::TrailingFields { input, .. } => LbsError::TrailingFields {
                position: index,
                input,
            },
            other => other,
        }
    }
}

/// Shorthand result type for this crate.
pub type Result<T> = std::result::Result<T, LbsError>;
