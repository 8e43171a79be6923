//! Geographic primitives for location-based services.
//!
//! Coordinates with a compact text form, haversine distance on a spherical
//! earth, `|`-delimited polylines, point-in-polygon tests and bounding boxes
//! around a center point.
//!
//! ```rust
//! use lbs::{BoundingBox, BoxMode, CrossingRule, LngLat, Polygon};
//!
//! let beijing = LngLat::from_string("116.397128,39.916527");
//! let shanghai: LngLat = "121.473701,31.230416".parse()?;
//! assert!((beijing.distance(&shanghai) - 1067.0).abs() < 5.0);
//!
//! let area = Polygon::from_string("116.0,39.0|117.0,39.0|117.0,41.0|116.0,41.0");
//! assert!(area.contains_with(&beijing, CrossingRule::EvenOdd));
//!
//! let nearby = BoundingBox::from_center_with(&beijing, 10.0, BoxMode::Corrected);
//! assert!(nearby.contains_point(&beijing));
//! # Ok::<(), lbs::LbsError>(())
//! ```
//!
//! All parsing through `from_string` is lenient: unreadable numbers become
//! zero. Use `parse_strict` or [`str::parse`] to get an [`LbsError`] instead.

pub mod bbox;
pub mod config;
pub mod coord;
pub mod error;
pub mod parse;
pub mod polygon;
pub mod polyline;

pub use bbox::{BoundingBox, BoxMode, DEGREES_PER_KM};
pub use config::Config;
pub use coord::{EARTH_RADIUS_KM, LngLat};
pub use error::{Field, LbsError, Result};
pub use parse::parse_float_or_zero;
pub use polygon::{CrossingRule, Polygon};
pub use polyline::Polyline;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{BoundingBox, BoxMode, Config, CrossingRule, LngLat, Polygon, Polyline};

    pub use crate::{LbsError, Result};
}
