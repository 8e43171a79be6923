//! Bounding boxes derived from a center point and a radius.

use crate::coord::{LngLat, rad};
use serde::{Deserialize, Serialize};

/// Kilometres spanned by one degree of arc on the reference sphere.
pub const DEGREES_PER_KM: f64 = 111.044736;

/// How [`BoundingBox::from_center_with`] fills the max corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxMode {
    /// `max = center + (lng_delta, lat_delta)`.
    Corrected,
    /// Historical output: `max.longitude = center.longitude + lat_delta` and
    /// `max.latitude = 0`. Use when comparing against data produced by
    /// older releases.
    Legacy,
}

impl Default for BoxMode {
    fn default() -> Self {
        if cfg!(feature = "legacy-bbox") {
            BoxMode::Legacy
        } else {
            BoxMode::Corrected
        }
    }
}

/// An axis-aligned rectangle in degree space.
///
/// # Examples
///
/// ```
/// use lbs::{BoundingBox, BoxMode, LngLat};
///
/// let center = LngLat::new(116.397128, 39.916527);
/// let bbox = BoundingBox::from_center_with(&center, 5.0, BoxMode::Corrected);
/// assert!(bbox.contains_point(&LngLat::new(116.40, 39.92)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: LngLat,
    pub max: LngLat,
}

impl BoundingBox {
    /// Approximate a circle of `distance_km` around `center` using the
    /// default [`BoxMode`].
    pub fn from_center(center: &LngLat, distance_km: f64) -> Self {
        Self::from_center_with(center, distance_km, BoxMode::default())
    }

    /// Approximate a circle of `distance_km` around `center`.
    ///
    /// Longitude spread is widened by `1 / cos(latitude)`. Nothing is
    /// clamped, so results near the poles or the antimeridian can leave
    /// the valid coordinate range.
    pub fn from_center_with(center: &LngLat, distance_km: f64, mode: BoxMode) -> Self {
        let lng = distance_km / (rad(center.latitude).cos() * DEGREES_PER_KM).abs();
        let lat = distance_km / DEGREES_PER_KM;

        let min = LngLat::new(center.longitude - lng, center.latitude - lat);
        let max = match mode {
            BoxMode::Corrected => LngLat::new(center.longitude + lng, center.latitude + lat),
            BoxMode::Legacy => LngLat::new(center.longitude + lat, 0.0),
        };

        let bbox = Self { min, max };
        if !(bbox.min.is_finite() && bbox.max.is_finite()) {
            log::warn!(
                "Bounding box around {} with radius {} km is not finite",
                center,
                distance_km
            );
        }
        bbox
    }

    /// Inclusive containment check.
    pub fn contains_point(&self, point: &LngLat) -> bool {
        point.longitude >= self.min.longitude
            && point.longitude <= self.max.longitude
            && point.latitude >= self.min.latitude
            && point.latitude <= self.max.latitude
    }

    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.min.longitude + self.max.longitude) / 2.0,
            (self.min.latitude + self.max.latitude) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.max.longitude - self.min.longitude
    }

    pub fn height(&self) -> f64 {
        self.max.latitude - self.min.latitude
    }
}

impl From<geo::Rect<f64>> for BoundingBox {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self {
            min: rect.min().into(),
            max: rect.max().into(),
        }
    }
}

impl From<BoundingBox> for geo::Rect<f64> {
    // Rect::new normalises the corners, so a legacy box may come back reordered.
    fn from(bbox: BoundingBox) -> Self {
        geo::Rect::new(
            geo::Coord::<f64>::from(bbox.min),
            geo::Coord::<f64>::from(bbox.max),
        )
    }
}
