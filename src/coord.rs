//! Longitude/latitude coordinates and great-circle distance.

use crate::error::{Field, LbsError, Result};
use crate::parse::{parse_float, parse_float_or_zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Radius of the sphere used for distance calculations, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Separator between longitude and latitude in the text form.
pub const COORD_SEPARATOR: char = ',';

#[inline]
pub(crate) fn rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// A geographic coordinate in decimal degrees.
///
/// Values are not range-checked: a longitude of 200 or a latitude of -95
/// is stored as given.
///
/// # Examples
///
/// ```
/// use lbs::LngLat;
///
/// let beijing = LngLat::new(116.397128, 39.916527);
/// assert_eq!(beijing.to_string(), "116.397128,39.916527");
///
/// let parsed = LngLat::from_string("116.397128,39.916527");
/// assert_eq!(parsed, beijing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LngLat {
    pub longitude: f64,
    pub latitude: f64,
}

impl LngLat {
    /// The coordinate every lenient parse falls back to.
    pub const ZERO: LngLat = LngLat {
        longitude: 0.0,
        latitude: 0.0,
    };

    #[inline]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Parse `"<lon>,<lat>"`, reading anything missing or malformed as zero.
    ///
    /// Components after the second comma are ignored.
    ///
    /// ```
    /// use lbs::LngLat;
    ///
    /// assert_eq!(LngLat::from_string("12.5"), LngLat::new(12.5, 0.0));
    /// assert_eq!(LngLat::from_string("abc,7"), LngLat::new(0.0, 7.0));
    /// assert_eq!(LngLat::from_string(""), LngLat::ZERO);
    /// ```
    pub fn from_string(value: &str) -> Self {
        let mut parts = value.split(COORD_SEPARATOR);
        let longitude = parts.next().map(parse_float_or_zero).unwrap_or_default();
        let latitude = parts.next().map(parse_float_or_zero).unwrap_or_default();
        Self {
            longitude,
            latitude,
        }
    }

    /// Parse `"<lon>,<lat>"`, rejecting anything but exactly two numbers.
    ///
    /// ```
    /// use lbs::{LngLat, LbsError};
    ///
    /// assert_eq!(LngLat::parse_strict("1.5,2.5"), Ok(LngLat::new(1.5, 2.5)));
    /// assert!(matches!(
    ///     LngLat::parse_strict("1.5"),
    ///     Err(LbsError::MissingField { .. })
    /// ));
    /// ```
    pub fn parse_strict(value: &str) -> Result<Self> {
        let mut parts = value.split(COORD_SEPARATOR);

        let longitude = parse_float(parts.next().unwrap_or_default(), Field::Longitude)?;
        let latitude = match parts.next() {
            Some(lat) => parse_float(lat, Field::Latitude)?,
            None => {
                return Err(LbsError::MissingField {
                    field: Field::Latitude,
                    position: 0,
                    input: value.to_string(),
                });
            }
        };

        if parts.next().is_some() {
            return Err(LbsError::TrailingFields {
                position: 0,
                input: value.to_string(),
            });
        }

        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Great-circle distance to `other` in kilometres (haversine).
    ///
    /// ```
    /// use lbs::LngLat;
    ///
    /// let beijing = LngLat::new(116.397128, 39.916527);
    /// let shanghai = LngLat::new(121.473701, 31.230416);
    /// let km = beijing.distance(&shanghai);
    /// assert!((km - 1067.0).abs() < 5.0);
    /// ```
    pub fn distance(&self, other: &LngLat) -> f64 {
        let lat1 = rad(self.latitude);
        let lat2 = rad(other.latitude);
        let a = lat1 - lat2;
        let b = rad(self.longitude) - rad(other.longitude);

        let s = 2.0
            * ((a / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (b / 2.0).sin().powi(2))
                .sqrt()
                .asin();
        s * EARTH_RADIUS_KM
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// Convert to a GeoJSON `Point` geometry string.
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String> {
        use geojson::{Geometry, Value};

        let geom = Geometry::new(Value::Point(vec![self.longitude, self.latitude]));
        serde_json::to_string(&geom)
            .map_err(|e| LbsError::GeoJson(format!("Failed to serialize point: {}", e)))
    }

    /// Parse a GeoJSON `Point` geometry string.
    #[cfg(feature = "geojson")]
    pub fn from_geojson(geojson: &str) -> Result<Self> {
        use geojson::{Geometry, Value};

        let geom: Geometry = serde_json::from_str(geojson)
            .map_err(|e| LbsError::GeoJson(format!("Failed to parse GeoJSON: {}", e)))?;

        match geom.value {
            Value::Point(coords) => Self::from_position(&coords),
            _ => Err(LbsError::GeoJson(
                "GeoJSON geometry is not a Point".to_string(),
            )),
        }
    }

    #[cfg(feature = "geojson")]
    pub(crate) fn from_position(coords: &[f64]) -> Result<Self> {
        match coords {
            [lon, lat, ..] => Ok(Self::new(*lon, *lat)),
            _ => Err(LbsError::GeoJson(
                "Position must have at least 2 coordinates".to_string(),
            )),
        }
    }
}

impl fmt::Display for LngLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.longitude, self.latitude)
    }
}

impl FromStr for LngLat {
    type Err = LbsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_strict(s)
    }
}

impl From<&str> for LngLat {
    fn from(value: &str) -> Self {
        Self::from_string(value)
    }
}

impl From<(f64, f64)> for LngLat {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<LngLat> for (f64, f64) {
    fn from(c: LngLat) -> Self {
        (c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for LngLat {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl From<LngLat> for geo::Point<f64> {
    fn from(c: LngLat) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Coord<f64>> for LngLat {
    fn from(coord: geo::Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<LngLat> for geo::Coord<f64> {
    fn from(c: LngLat) -> Self {
        geo::coord! { x: c.longitude, y: c.latitude }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEIJING: LngLat = LngLat::new(116.397128, 39.916527);
    const SHANGHAI: LngLat = LngLat::new(121.473701, 31.230416);

    #[test]
    fn test_display_fixed_precision() {
        assert_eq!(LngLat::new(1.0, -2.5).to_string(), "1.000000,-2.500000");
        assert_eq!(LngLat::ZERO.to_string(), "0.000000,0.000000");
        assert_eq!(
            LngLat::new(12.3456789, 0.0000004).to_string(),
            "12.345679,0.000000"
        );
    }

    #[test]
    fn test_from_string_lenient() {
        assert_eq!(LngLat::from_string("1.5,2.5"), LngLat::new(1.5, 2.5));
        assert_eq!(LngLat::from_string("1.5"), LngLat::new(1.5, 0.0));
        assert_eq!(LngLat::from_string("1.5,"), LngLat::new(1.5, 0.0));
        assert_eq!(LngLat::from_string(",2.5"), LngLat::new(0.0, 2.5));
        assert_eq!(LngLat::from_string("x,y"), LngLat::ZERO);
        assert_eq!(LngLat::from_string("1,2,3"), LngLat::new(1.0, 2.0));
        assert_eq!(LngLat::from_string(""), LngLat::ZERO);
    }

    #[test]
    fn test_parse_strict_errors() {
        assert_eq!(
            LngLat::parse_strict("1,abc"),
            Err(LbsError::InvalidNumber {
                field: Field::Latitude,
                position: 0,
                input: "abc".to_string(),
            })
        );
        assert!(matches!(
            LngLat::parse_strict(""),
            Err(LbsError::MissingField {
                field: Field::Longitude,
                ..
            })
        ));
        assert!(matches!(
            LngLat::parse_strict("1,2,3"),
            Err(LbsError::TrailingFields { .. })
        ));
        assert_eq!("3,4".parse::<LngLat>(), Ok(LngLat::new(3.0, 4.0)));
    }

    #[test]
    fn test_text_roundtrip() {
        let c = LngLat::new(-74.0060123, 40.7128456);
        let back = LngLat::from_string(&c.to_string());
        assert!((back.longitude - c.longitude).abs() < 1e-6);
        assert!((back.latitude - c.latitude).abs() < 1e-6);
    }

    #[test]
    fn test_distance_known_values() {
        let d = LngLat::ZERO.distance(&LngLat::new(0.0, 1.0));
        assert!((d - 111.3195).abs() < 0.001, "got {d}");

        let d = BEIJING.distance(&SHANGHAI);
        assert!((d - 1067.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn test_distance_symmetric_and_zero() {
        assert!((BEIJING.distance(&SHANGHAI) - SHANGHAI.distance(&BEIJING)).abs() < 1e-9);
        assert_eq!(BEIJING.distance(&BEIJING), 0.0);
    }

    #[test]
    fn test_distance_nan_propagates() {
        let d = LngLat::new(f64::NAN, 0.0).distance(&LngLat::ZERO);
        assert!(d.is_nan());
    }

    #[test]
    fn test_geo_conversion() {
        let p: geo::Point<f64> = BEIJING.into();
        assert_eq!(p.x(), 116.397128);
        assert_eq!(p.y(), 39.916527);
        assert_eq!(LngLat::from(p), BEIJING);

        let c: geo::Coord<f64> = SHANGHAI.into();
        assert_eq!(LngLat::from(c), SHANGHAI);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&LngLat::new(1.5, 2.5)).unwrap();
        assert_eq!(json, r#"{"longitude":1.5,"latitude":2.5}"#);
        let back: LngLat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LngLat::new(1.5, 2.5));
    }

    #[cfg(feature = "geojson")]
    #[test]
    fn test_geojson() {
        let json = BEIJING.to_geojson().unwrap();
        assert!(json.contains("Point"));
        assert_eq!(LngLat::from_geojson(&json).unwrap(), BEIJING);

        let line = r#"{"type":"LineString","coordinates":[[0.0,0.0],[1.0,1.0]]}"#;
        assert!(matches!(
            LngLat::from_geojson(line),
            Err(LbsError::GeoJson(_))
        ));
    }
}
