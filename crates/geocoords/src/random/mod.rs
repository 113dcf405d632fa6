//! Random Point / LineString / Polygon geometries.
//!
//! Purpose
//! - Synthesize test and sampling data in the same record shapes that
//!   extraction and mapping consume.
//! - Points and line vertices are uniform over a bounding box (continuous
//!   draws, fractional bounds are fine). Polygons come from
//!   [`irregular_ring`] and are not constrained by the box.
//!
//! Reproducibility
//! - Every entry point takes a caller RNG; `ReplayToken` and
//!   `RandomGeometrySampler` add seeded, indexable streams on top.

mod polygon;

pub use polygon::{clip, irregular_ring, PolygonShape};

use crate::error::{GeoError, GeoResult};
use crate::geometry::{BoundingBox, Coordinate, Geometry, GeometryKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Generator configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomCfg {
    /// More than one wraps the results in a `GeometryCollection`.
    pub number_features: usize,
    /// Vertices per LineString, and per Polygon ring before closure.
    pub number_vertices: usize,
    pub bbox: BoundingBox,
    pub polygon: PolygonShape,
}

impl Default for RandomCfg {
    fn default() -> Self {
        Self {
            number_features: 1,
            number_vertices: 3,
            bbox: BoundingBox::default(),
            polygon: PolygonShape::default(),
        }
    }
}

impl RandomCfg {
    /// Reject kinds without a builder and parameters the builders cannot use.
    fn check(&self, kind: GeometryKind) -> GeoResult<()> {
        if !matches!(
            kind,
            GeometryKind::Point | GeometryKind::LineString | GeometryKind::Polygon
        ) {
            return Err(GeoError::unsupported_feature(kind.as_str()));
        }
        self.bbox.validate()?;
        if kind == GeometryKind::Polygon && self.number_vertices == 0 {
            return Err(GeoError::invalid("a polygon needs at least one vertex"));
        }
        Ok(())
    }
}

/// Build `cfg.number_features` random geometries of `kind`.
///
/// One feature (or zero) returns the geometry itself; more return a
/// `GeometryCollection` in generation order. Only Point, LineString and
/// Polygon have builders; anything else is `UnsupportedFeatureType`.
pub fn generate<R: Rng + ?Sized>(
    kind: GeometryKind,
    cfg: &RandomCfg,
    rng: &mut R,
) -> GeoResult<Geometry> {
    cfg.check(kind)?;
    debug!(
        kind = %kind,
        features = cfg.number_features,
        vertices = cfg.number_vertices,
        "generate"
    );
    if cfg.number_features > 1 {
        let geometries = (0..cfg.number_features)
            .map(|_| build_one(kind, cfg, rng))
            .collect();
        return Ok(Geometry::GeometryCollection { geometries });
    }
    Ok(build_one(kind, cfg, rng))
}

/// [`generate`] with the type given by its tag name.
pub fn generate_named<R: Rng + ?Sized>(
    feature_type: &str,
    cfg: &RandomCfg,
    rng: &mut R,
) -> GeoResult<Geometry> {
    let kind = feature_type
        .parse::<GeometryKind>()
        .map_err(|_| GeoError::unsupported_feature(feature_type))?;
    generate(kind, cfg, rng)
}

/// [`generate`] from a fresh `StdRng` seeded with `seed`.
pub fn generate_seeded(kind: GeometryKind, cfg: &RandomCfg, seed: u64) -> GeoResult<Geometry> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(kind, cfg, &mut rng)
}

fn build_one<R: Rng + ?Sized>(kind: GeometryKind, cfg: &RandomCfg, rng: &mut R) -> Geometry {
    match kind {
        GeometryKind::LineString => Geometry::LineString {
            coordinates: (0..cfg.number_vertices)
                .map(|_| random_position(&cfg.bbox, rng))
                .collect(),
        },
        GeometryKind::Polygon => Geometry::Polygon {
            coordinates: vec![irregular_ring(cfg.number_vertices, &cfg.polygon, rng)],
        },
        // Point; other kinds are rejected in `generate`.
        _ => Geometry::Point {
            coordinates: random_position(&cfg.bbox, rng),
        },
    }
}

fn random_position<R: Rng + ?Sized>(bbox: &BoundingBox, rng: &mut R) -> Coordinate {
    vec![
        rng.gen_range(bbox.min_lon..=bbox.max_lon),
        rng.gen_range(bbox.min_lat..=bbox.max_lat),
    ]
}

/// Replay token making draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Seeded stream of random geometries; any element can be rebuilt from its token.
#[derive(Clone, Debug)]
pub struct RandomGeometrySampler {
    kind: GeometryKind,
    cfg: RandomCfg,
    seed: u64,
    next_index: u64,
}

impl RandomGeometrySampler {
    pub fn new(kind: GeometryKind, cfg: RandomCfg, seed: u64) -> GeoResult<Self> {
        // Fail on construction rather than on the first draw.
        cfg.check(kind)?;
        Ok(Self {
            kind,
            cfg,
            seed,
            next_index: 0,
        })
    }

    pub fn cfg(&self) -> &RandomCfg {
        &self.cfg
    }

    pub fn generate_next(&mut self) -> GeoResult<(Geometry, ReplayToken)> {
        let token = ReplayToken {
            seed: self.seed,
            index: self.next_index,
        };
        self.next_index = self.next_index.wrapping_add(1);
        Ok((self.regenerate(token)?, token))
    }

    pub fn regenerate(&self, token: ReplayToken) -> GeoResult<Geometry> {
        generate(self.kind, &self.cfg, &mut token.to_std_rng())
    }
}
