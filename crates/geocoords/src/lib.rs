//! Structural operations over GeoJSON-shaped coordinate data.
//!
//! - `coords`: depth-first coordinate extraction and structure-preserving maps.
//! - `random`: random Point / LineString / Polygon synthesis inside a bounding box.
//! - `geometry`: the record shapes both sides agree on.
//!
//! Everything is a pure, synchronous function of its inputs (plus an RNG for
//! generation). Text encodings, CRS transforms and validity checks live
//! outside this crate.

pub mod coords;
pub mod error;
pub mod geometry;
pub mod random;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeoError, GeoResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coords::{extract, map_coords, map_tuples, CoordinateSource, Coords};
    pub use crate::error::{GeoError, GeoResult};
    pub use crate::geometry::{
        BoundingBox, Coordinate, Feature, FeatureId, Geometry, GeometryKind, Nested,
    };
    pub use crate::random::{
        clip, generate, generate_named, generate_seeded, irregular_ring, PolygonShape, RandomCfg,
        RandomGeometrySampler, ReplayToken,
    };
}
