//! Geometry record shapes.
//!
//! Purpose
//! - Pin the shape contract shared by every producer and consumer of records:
//!   field names `type`, `coordinates`, `geometry`, `geometries`, and the
//!   tag → nesting-depth table.
//! - Construction/validation of geometries beyond that contract is left to callers.
//!
//! | tag | depth of `coordinates` |
//! |---|---|
//! | Point | 1 |
//! | LineString, MultiPoint | 2 |
//! | Polygon, MultiLineString | 3 |
//! | MultiPolygon | 4 |

mod types;

pub use types::{
    BoundingBox, Coordinate, Feature, FeatureId, Geometry, GeometryKind, Nested,
};
