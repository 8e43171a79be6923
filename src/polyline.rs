//! Ordered coordinate sequences and their `|`-delimited text form.

use crate::coord::LngLat;
use crate::error::{LbsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between coordinates in the text form.
pub const PATH_DELIMITER: char = '|';

/// An ordered list of coordinates.
///
/// Order is significant and duplicates are allowed.
///
/// # Examples
///
/// ```
/// use lbs::{LngLat, Polyline};
///
/// let path = Polyline::from_string("1,2|3,4");
/// assert_eq!(path.points(), &[LngLat::new(1.0, 2.0), LngLat::new(3.0, 4.0)]);
/// assert_eq!(path.to_string(), "1.000000,2.000000|3.000000,4.000000");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<LngLat>,
}

impl Polyline {
    pub fn new(points: Vec<LngLat>) -> Self {
        Self { points }
    }

    /// Parse a `|`-delimited list, reading every segment leniently.
    ///
    /// Empty segments become the zero coordinate, so `""` parses to a
    /// single-point path rather than an empty one.
    pub fn from_string(value: &str) -> Self {
        value.split(PATH_DELIMITER).map(LngLat::from_string).collect()
    }

    /// Parse a `|`-delimited list, failing on the first malformed coordinate.
    ///
    /// An empty string is an empty path here. Errors carry the index of the
    /// offending coordinate.
    pub fn parse_strict(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Ok(Self::default());
        }

        value
            .split(PATH_DELIMITER)
            .enumerate()
            .map(|(idx, segment)| LngLat::parse_strict(segment).map_err(|e| e.at(idx)))
            .collect()
    }

    pub fn points(&self) -> &[LngLat] {
        &self.points
    }

    pub fn into_points(self) -> Vec<LngLat> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: LngLat) {
        self.points.push(point);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LngLat> {
        self.points.iter()
    }

    /// Total length in kilometres, summed over consecutive points.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }

    /// Convert to a GeoJSON `LineString` geometry string.
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String> {
        use geojson::{Geometry, Value};

        let coords = self
            .points
            .iter()
            .map(|p| vec![p.longitude, p.latitude])
            .collect();
        let geom = Geometry::new(Value::LineString(coords));
        serde_json::to_string(&geom)
            .map_err(|e| LbsError::GeoJson(format!("Failed to serialize line string: {}", e)))
    }

    /// Parse a GeoJSON `LineString` geometry string.
    #[cfg(feature = "geojson")]
    pub fn from_geojson(geojson: &str) -> Result<Self> {
        use geojson::{Geometry, Value};

        let geom: Geometry = serde_json::from_str(geojson)
            .map_err(|e| LbsError::GeoJson(format!("Failed to parse GeoJSON: {}", e)))?;

        match geom.value {
            Value::LineString(coords) => coords.iter().map(|c| LngLat::from_position(c)).collect(),
            _ => Err(LbsError::GeoJson(
                "GeoJSON geometry is not a LineString".to_string(),
            )),
        }
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i != 0 {
                write!(f, "{}", PATH_DELIMITER)?;
            }
            write!(f, "{}", point)?;
        }
        Ok(())
    }
}

impl FromStr for Polyline {
    type Err = LbsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_strict(s)
    }
}

impl From<&str> for Polyline {
    fn from(value: &str) -> Self {
        Self::from_string(value)
    }
}

impl From<Vec<LngLat>> for Polyline {
    fn from(points: Vec<LngLat>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<LngLat> for Polyline {
    fn from_iter<I: IntoIterator<Item = LngLat>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Polyline {
    type Item = LngLat;
    type IntoIter = std::vec::IntoIter<LngLat>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a LngLat;
    type IntoIter = std::slice::Iter<'a, LngLat>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<geo::LineString<f64>> for Polyline {
    fn from(line: geo::LineString<f64>) -> Self {
        line.0.into_iter().map(LngLat::from).collect()
    }
}

impl From<&Polyline> for geo::LineString<f64> {
    fn from(path: &Polyline) -> Self {
        geo::LineString::new(path.points.iter().map(|&p| p.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;

    #[test]
    fn test_display() {
        let path = Polyline::new(vec![LngLat::new(1.0, 2.0), LngLat::new(-3.5, 4.25)]);
        assert_eq!(path.to_string(), "1.000000,2.000000|-3.500000,4.250000");
        assert_eq!(Polyline::default().to_string(), "");
    }

    #[test]
    fn test_from_string_preserves_order() {
        let path = Polyline::from_string("3,4|1,2|3,4");
        assert_eq!(
            path.points(),
            &[
                LngLat::new(3.0, 4.0),
                LngLat::new(1.0, 2.0),
                LngLat::new(3.0, 4.0)
            ]
        );
    }

    #[test]
    fn test_from_string_empty_segments() {
        assert_eq!(Polyline::from_string("").points(), &[LngLat::ZERO]);

        let path = Polyline::from_string("1,1||2,2");
        assert_eq!(path.len(), 3);
        assert_eq!(path.points()[1], LngLat::ZERO);
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(Polyline::parse_strict("").unwrap().len(), 0);
        assert_eq!("1,2|3,4".parse::<Polyline>().unwrap().len(), 2);

        assert_eq!(
            Polyline::parse_strict("1,2|3,4|5,oops"),
            Err(LbsError::InvalidNumber {
                field: Field::Latitude,
                position: 2,
                input: "oops".to_string(),
            })
        );
        assert!(matches!(
            Polyline::parse_strict("1,2||3,4"),
            Err(LbsError::MissingField {
                field: Field::Longitude,
                position: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_text_roundtrip() {
        let path = Polyline::new(vec![
            LngLat::new(116.397128, 39.916527),
            LngLat::new(121.473701, 31.230416),
            LngLat::new(-0.1275, 51.507222),
        ]);
        let back = Polyline::from_string(&path.to_string());
        assert_eq!(back.len(), path.len());
        for (a, b) in back.iter().zip(path.iter()) {
            assert!((a.longitude - b.longitude).abs() < 1e-6);
            assert!((a.latitude - b.latitude).abs() < 1e-6);
        }
    }

    #[test]
    fn test_length() {
        let path = Polyline::from_string("0,0|0,1|0,2");
        let expected = 2.0 * LngLat::ZERO.distance(&LngLat::new(0.0, 1.0));
        assert!((path.length() - expected).abs() < 1e-9);
        assert_eq!(Polyline::default().length(), 0.0);
    }

    #[test]
    fn test_geo_conversion() {
        let path = Polyline::from_string("0,0|1,1|2,0");
        let line: geo::LineString<f64> = (&path).into();
        assert_eq!(line.0.len(), 3);
        assert_eq!(Polyline::from(line), path);
    }

    #[cfg(feature = "geojson")]
    #[test]
    fn test_geojson() {
        let path = Polyline::from_string("0,0|1,1|2,0");
        let json = path.to_geojson().unwrap();
        assert!(json.contains("LineString"));
        assert_eq!(Polyline::from_geojson(&json).unwrap(), path);
    }
}
