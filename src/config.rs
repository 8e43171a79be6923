//! Behaviour switches for compatibility with historical output.
//!
//! The physical constants (`EARTH_RADIUS_KM`, `DEGREES_PER_KM`) are not
//! configurable; only the two algorithm variants are.
use crate::bbox::{BoundingBox, BoxMode};
use crate::coord::LngLat;
use crate::polygon::{CrossingRule, Polygon};

/// Algorithm variants applied by [`Config::bounding_box`] and [`Config::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bbox_mode: BoxMode,

    #[serde(default)]
    pub crossing_rule: CrossingRule,
}

impl Config {
    /// Config reproducing historical output for both algorithms.
    pub fn legacy() -> Self {
        Self {
            bbox_mode: BoxMode::Legacy,
            crossing_rule: CrossingRule::Legacy,
        }
    }

    pub fn with_bbox_mode(mut self, mode: BoxMode) -> Self {
        self.bbox_mode = mode;
        self
    }

    pub fn with_crossing_rule(mut self, rule: CrossingRule) -> Self {
        self.crossing_rule = rule;
        self
    }

    pub fn bounding_box(&self, center: &LngLat, distance_km: f64) -> BoundingBox {
        BoundingBox::from_center_with(center, distance_km, self.bbox_mode)
    }

    pub fn contains(&self, polygon: &Polygon, point: &LngLat) -> bool {
        polygon.contains_with(point, self.crossing_rule)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
