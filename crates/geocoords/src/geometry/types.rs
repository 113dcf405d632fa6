//! Record shapes for geometries, features and raw coordinate nests.
//!
//! - `Geometry`: closed enum over the GeoJSON geometry tags; serde pins the
//!   `type` / `coordinates` / `geometries` field names.
//! - `GeometryKind`: the bare tag, with the tag → nesting-depth table.
//! - `Nested`: raw, untyped nested sequences of numbers.
//! - `BoundingBox`: `(min_lon, min_lat, max_lon, max_lat)` sampling window.

use crate::error::{GeoError, GeoResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One position, conventionally `(lon, lat[, alt])`.
pub type Coordinate = Vec<f64>;

/// Geometry-shaped record. The nesting depth of `coordinates` is fixed by the variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Coordinate,
    },
    LineString {
        coordinates: Vec<Coordinate>,
    },
    Polygon {
        coordinates: Vec<Vec<Coordinate>>,
    },
    MultiPoint {
        coordinates: Vec<Coordinate>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Coordinate>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Coordinate>>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

impl Geometry {
    #[inline]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Point { .. } => GeometryKind::Point,
            Self::LineString { .. } => GeometryKind::LineString,
            Self::Polygon { .. } => GeometryKind::Polygon,
            Self::MultiPoint { .. } => GeometryKind::MultiPoint,
            Self::MultiLineString { .. } => GeometryKind::MultiLineString,
            Self::MultiPolygon { .. } => GeometryKind::MultiPolygon,
            Self::GeometryCollection { .. } => GeometryKind::GeometryCollection,
        }
    }
}

/// Type tag of a geometry record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 7] = [
        Self::Point,
        Self::LineString,
        Self::Polygon,
        Self::MultiPoint,
        Self::MultiLineString,
        Self::MultiPolygon,
        Self::GeometryCollection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }

    /// Nesting depth of `coordinates` for this tag; `None` when the tag
    /// carries no coordinates of its own.
    pub fn nesting_depth(self) -> Option<usize> {
        match self {
            Self::Point => Some(1),
            Self::LineString | Self::MultiPoint => Some(2),
            Self::Polygon | Self::MultiLineString => Some(3),
            Self::MultiPolygon => Some(4),
            Self::GeometryCollection => None,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKind {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| GeoError::unsupported_geometry(s))
    }
}

/// GeoJSON feature id: string or number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    String(String),
    Number(serde_json::Number),
}

/// Feature-shaped record. Only `geometry` is read; `properties` belong to the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FeatureId>,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Feature {
    pub fn from_geometry(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            ..Self::default()
        }
    }
}

/// Raw nested sequence of numbers, of any depth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested {
    Number(f64),
    List(Vec<Nested>),
}

impl Nested {
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl From<f64> for Nested {
    fn from(x: f64) -> Self {
        Self::Number(x)
    }
}

impl<T: Into<Nested>> From<Vec<T>> for Nested {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Sampling window `(min_lon, min_lat, max_lon, max_lat)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Default for BoundingBox {
    /// The whole world: `[-180, -90, 180, 90]`.
    fn default() -> Self {
        Self::new(-180.0, -90.0, 180.0, 90.0)
    }
}

impl BoundingBox {
    pub const fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Build from `[min_lon, min_lat, max_lon, max_lat]`.
    pub fn from_slice(values: &[f64]) -> GeoResult<Self> {
        match *values {
            [a, b, c, d] => Ok(Self::new(a, b, c, d)),
            _ => Err(GeoError::invalid(format!(
                "bounding box needs 4 values, got {}",
                values.len()
            ))),
        }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    /// Finite bounds with `min <= max` on both axes, and spans that stay
    /// finite when the uniform sampler scales them.
    pub fn validate(&self) -> GeoResult<()> {
        if !self.to_array().iter().all(|v| v.is_finite()) {
            return Err(GeoError::invalid("bounding box values must be finite"));
        }
        if self.min_lon > self.max_lon {
            return Err(GeoError::invalid("min_lon <= max_lon required"));
        }
        if self.min_lat > self.max_lat {
            return Err(GeoError::invalid("min_lat <= max_lat required"));
        }
        // The sampler divides the span by a factor just below one; keep 2x headroom.
        let spans = [self.max_lon - self.min_lon, self.max_lat - self.min_lat];
        if !spans.iter().all(|s| (2.0 * s).is_finite()) {
            return Err(GeoError::invalid("bounding box span overflows f64"));
        }
        Ok(())
    }

    /// Closed-interval containment test on the first two components.
    pub fn contains(&self, c: &[f64]) -> bool {
        match c {
            [lon, lat, ..] => {
                (self.min_lon..=self.max_lon).contains(lon)
                    && (self.min_lat..=self.max_lat).contains(lat)
            }
            _ => false,
        }
    }
}

impl FromStr for BoundingBox {
    type Err = GeoError;

    /// Parse `"min_lon,min_lat,max_lon,max_lat"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| GeoError::invalid(format!("not a number: {:?}", part.trim())))
            })
            .collect::<GeoResult<Vec<f64>>>()?;
        Self::from_slice(&values)
    }
}
