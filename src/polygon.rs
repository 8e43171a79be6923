//! Closed regions and point-in-polygon tests.

use crate::coord::LngLat;
use crate::error::{LbsError, Result};
use crate::polyline::Polyline;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Crossing-number variant used by [`Polygon::contains_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossingRule {
    /// Only advances the trailing vertex when an edge straddles the query
    /// longitude and also rises through its latitude. Matches results
    /// produced by existing consumers of the text format.
    #[default]
    Legacy,
    /// Textbook even-odd rule: every ring edge is tested once.
    EvenOdd,
}

/// A closed ring of coordinates.
///
/// The last point connects back to the first whether or not the two are
/// equal. Shares the text form of [`Polyline`].
///
/// # Examples
///
/// ```
/// use lbs::{LngLat, Polygon};
///
/// let square = Polygon::from_string("0,0|10,0|10,10|0,10");
/// assert!(square.contains(&LngLat::new(6.0, 6.0)));
/// assert!(!square.contains(&LngLat::new(100.0, 100.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    ring: Polyline,
}

impl Polygon {
    pub fn new(points: Vec<LngLat>) -> Self {
        Self {
            ring: Polyline::new(points),
        }
    }

    /// Lenient parse, see [`Polyline::from_string`].
    pub fn from_string(value: &str) -> Self {
        Self {
            ring: Polyline::from_string(value),
        }
    }

    /// Strict parse, see [`Polyline::parse_strict`].
    pub fn parse_strict(value: &str) -> Result<Self> {
        Polyline::parse_strict(value).map(Self::from)
    }

    pub fn ring(&self) -> &Polyline {
        &self.ring
    }

    pub fn points(&self) -> &[LngLat] {
        self.ring.points()
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Test whether `point` lies inside the region using [`CrossingRule::Legacy`].
    ///
    /// Rings with fewer than three points contain nothing.
    pub fn contains(&self, point: &LngLat) -> bool {
        self.contains_with(point, CrossingRule::Legacy)
    }

    pub fn contains_with(&self, point: &LngLat, rule: CrossingRule) -> bool {
        let points = self.ring.points();
        if points.len() < 3 {
            return false;
        }

        match rule {
            CrossingRule::Legacy => legacy_crossing(points, point),
            CrossingRule::EvenOdd => even_odd_crossing(points, point),
        }
    }

    /// Convert to a GeoJSON `Polygon` geometry string (exterior ring only).
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String> {
        use geojson::{Geometry, Value};

        let mut exterior: Vec<Vec<f64>> = self
            .points()
            .iter()
            .map(|p| vec![p.longitude, p.latitude])
            .collect();
        if let Some(first) = exterior.first().cloned()
            && exterior.last() != Some(&first)
        {
            exterior.push(first);
        }

        let geom = Geometry::new(Value::Polygon(vec![exterior]));
        serde_json::to_string(&geom)
            .map_err(|e| LbsError::GeoJson(format!("Failed to serialize polygon: {}", e)))
    }

    /// Parse a GeoJSON `Polygon` geometry string.
    ///
    /// Only the exterior ring is read. Its closing vertex is dropped when it
    /// repeats the first one.
    #[cfg(feature = "geojson")]
    pub fn from_geojson(geojson: &str) -> Result<Self> {
        use geojson::{Geometry, Value};

        let geom: Geometry = serde_json::from_str(geojson)
            .map_err(|e| LbsError::GeoJson(format!("Failed to parse GeoJSON: {}", e)))?;

        let rings = match geom.value {
            Value::Polygon(rings) => rings,
            _ => {
                return Err(LbsError::GeoJson(
                    "GeoJSON geometry is not a Polygon".to_string(),
                ));
            }
        };

        let exterior = rings.first().ok_or_else(|| {
            LbsError::GeoJson("Polygon must have an exterior ring".to_string())
        })?;

        let mut points = exterior
            .iter()
            .map(|c| LngLat::from_position(c))
            .collect::<Result<Vec<_>>>()?;
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        Ok(Self::new(points))
    }
}

/// Crossing test whose trailing index only moves on a qualifying edge.
fn legacy_crossing(points: &[LngLat], loc: &LngLat) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;

    for (i, v1) in points.iter().enumerate() {
        let v2 = &points[j];

        let straddles = (v1.longitude < loc.longitude && v2.longitude >= loc.longitude)
            || (v2.longitude < loc.longitude && v1.longitude >= loc.longitude);
        let rises = v1.latitude < loc.latitude && v2.latitude >= loc.latitude;

        if straddles && rises {
            if interpolate_latitude(v1, v2, loc.longitude) < loc.latitude {
                inside = !inside;
            }
            j = i;
        }
    }

    inside
}

fn even_odd_crossing(points: &[LngLat], loc: &LngLat) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;

    for (i, v1) in points.iter().enumerate() {
        let v2 = &points[j];

        let straddles = (v1.longitude < loc.longitude && v2.longitude >= loc.longitude)
            || (v2.longitude < loc.longitude && v1.longitude >= loc.longitude);

        if straddles && interpolate_latitude(v1, v2, loc.longitude) < loc.latitude {
            inside = !inside;
        }
        j = i;
    }

    inside
}

// Caller guarantees the two longitudes differ.
#[inline]
fn interpolate_latitude(v1: &LngLat, v2: &LngLat, longitude: f64) -> f64 {
    v1.latitude
        + (longitude - v1.longitude) / (v2.longitude - v1.longitude) * (v2.latitude - v1.latitude)
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ring, f)
    }
}

impl FromStr for Polygon {
    type Err = LbsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_strict(s)
    }
}

impl From<&str> for Polygon {
    fn from(value: &str) -> Self {
        Self::from_string(value)
    }
}

impl From<Polyline> for Polygon {
    fn from(ring: Polyline) -> Self {
        Self { ring }
    }
}

impl From<Polygon> for Polyline {
    fn from(polygon: Polygon) -> Self {
        polygon.ring
    }
}

impl From<Vec<LngLat>> for Polygon {
    fn from(points: Vec<LngLat>) -> Self {
        Self::new(points)
    }
}

impl From<&Polygon> for geo::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        // geo closes the exterior ring itself
        geo::Polygon::new((&polygon.ring).into(), vec![])
    }
}
