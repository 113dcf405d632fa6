//! Coordinate extraction and structure-preserving coordinate maps.
//!
//! Purpose
//! - `extract`: lazily flatten every leaf coordinate of a geometry, feature
//!   or raw nested sequence, depth-first, left to right.
//! - `map_coords` / `map_tuples`: rebuild a geometry with transformed
//!   coordinates, reproducing the nesting fixed by its type tag.
//!
//! Traversal rule for raw nests
//! - A level is a coordinate as soon as a number is found in it. Sequences
//!   preceding that number are descended into first. If the level mixes
//!   numbers and sequences, the iterator yields `MalformedGeometryInput`
//!   after whatever it already produced, then ends.

mod map;

pub use map::{map_coords, map_tuples};

use crate::error::{GeoError, GeoResult};
use crate::geometry::{Coordinate, Feature, Geometry, Nested};
use std::iter::FusedIterator;

/// Where to look for coordinates. Resolved once, at the call boundary.
#[derive(Clone, Copy, Debug)]
pub enum CoordinateSource<'a> {
    Raw(&'a Nested),
    Feature(&'a Feature),
    Geometry(&'a Geometry),
}

impl<'a> From<&'a Nested> for CoordinateSource<'a> {
    fn from(n: &'a Nested) -> Self {
        Self::Raw(n)
    }
}

impl<'a> From<&'a Feature> for CoordinateSource<'a> {
    fn from(f: &'a Feature) -> Self {
        Self::Feature(f)
    }
}

impl<'a> From<&'a Geometry> for CoordinateSource<'a> {
    fn from(g: &'a Geometry) -> Self {
        Self::Geometry(g)
    }
}

/// Lazily yield every coordinate reachable from `source`.
///
/// Fails up front when the source holds no coordinate structure at all (a
/// feature with a null geometry, a bare number). Later failures surface as
/// `Err` items; see the module docs.
pub fn extract<'a>(source: impl Into<CoordinateSource<'a>>) -> GeoResult<Coords<'a>> {
    match source.into() {
        CoordinateSource::Raw(Nested::List(items)) => Ok(Coords::with_frame(Frame::Raw {
            items: items.as_slice(),
            next: 0,
        })),
        CoordinateSource::Raw(Nested::Number(x)) => Err(GeoError::malformed(format!(
            "expected a sequence of coordinates, found the number {x}"
        ))),
        CoordinateSource::Feature(f) => match &f.geometry {
            Some(g) => Ok(Coords::from_geometry(g)),
            None => Err(GeoError::malformed("feature has no geometry")),
        },
        CoordinateSource::Geometry(g) => Ok(Coords::from_geometry(g)),
    }
}

impl Geometry {
    /// All coordinates of this geometry in document order.
    ///
    /// Typed frames never fail; should one ever do, iteration stops there.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coords::from_geometry(self).map_while(Result::ok)
    }
}

enum Frame<'a> {
    Raw { items: &'a [Nested], next: usize },
    Points(std::slice::Iter<'a, Coordinate>),
    Lines(std::slice::Iter<'a, Vec<Coordinate>>),
    Polygons(std::slice::Iter<'a, Vec<Vec<Coordinate>>>),
    Geometries(std::slice::Iter<'a, Geometry>),
}

impl<'a> Frame<'a> {
    fn for_geometry(g: &'a Geometry) -> Self {
        match g {
            Geometry::Point { coordinates } => {
                Frame::Points(std::slice::from_ref(coordinates).iter())
            }
            Geometry::LineString { coordinates } | Geometry::MultiPoint { coordinates } => {
                Frame::Points(coordinates.iter())
            }
            Geometry::Polygon { coordinates } | Geometry::MultiLineString { coordinates } => {
                Frame::Lines(coordinates.iter())
            }
            Geometry::MultiPolygon { coordinates } => Frame::Polygons(coordinates.iter()),
            Geometry::GeometryCollection { geometries } => Frame::Geometries(geometries.iter()),
        }
    }
}

enum Step<'a> {
    Emit(Coordinate),
    Descend(Frame<'a>),
    Finish,
    Fail(GeoError),
}

/// Depth-first coordinate iterator returned by [`extract`].
///
/// Holds only borrowed slices and an explicit stack; dropping it early
/// abandons the traversal without further work.
pub struct Coords<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Coords<'a> {
    fn with_frame(frame: Frame<'a>) -> Self {
        Self { stack: vec![frame] }
    }

    pub fn from_geometry(g: &'a Geometry) -> Self {
        Self::with_frame(Frame::for_geometry(g))
    }

    /// Collect everything, stopping at the first malformed level.
    pub fn try_collect(self) -> GeoResult<Vec<Coordinate>> {
        self.collect()
    }
}

impl<'a> Iterator for Coords<'a> {
    type Item = GeoResult<Coordinate>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let step = match self.stack.last_mut()? {
                Frame::Raw { items, next } => {
                    let level: &'a [Nested] = *items;
                    match level.get(*next) {
                        None => Step::Finish,
                        Some(Nested::List(children)) => {
                            *next += 1;
                            Step::Descend(Frame::Raw {
                                items: children.as_slice(),
                                next: 0,
                            })
                        }
                        Some(Nested::Number(_)) => match leaf_level(level) {
                            Ok(c) => {
                                // A leaf level is emitted once; the rest of it is not scanned.
                                *next = level.len();
                                Step::Emit(c)
                            }
                            Err(e) => Step::Fail(e),
                        },
                    }
                }
                Frame::Points(it) => match it.next() {
                    Some(c) => Step::Emit(c.clone()),
                    None => Step::Finish,
                },
                Frame::Lines(it) => match it.next() {
                    Some(line) => Step::Descend(Frame::Points(line.iter())),
                    None => Step::Finish,
                },
                Frame::Polygons(it) => match it.next() {
                    Some(poly) => Step::Descend(Frame::Lines(poly.iter())),
                    None => Step::Finish,
                },
                Frame::Geometries(it) => match it.next() {
                    Some(g) => Step::Descend(Frame::for_geometry(g)),
                    None => Step::Finish,
                },
            };
            match step {
                Step::Emit(c) => return Some(Ok(c)),
                Step::Descend(frame) => self.stack.push(frame),
                Step::Finish => {
                    self.stack.pop();
                }
                Step::Fail(e) => {
                    self.stack.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}

impl FusedIterator for Coords<'_> {}

fn leaf_level(items: &[Nested]) -> GeoResult<Coordinate> {
    items
        .iter()
        .map(|n| match n {
            Nested::Number(x) => Ok(*x),
            Nested::List(_) => Err(GeoError::malformed(
                "coordinate level mixes numbers and sequences",
            )),
        })
        .collect()
}

#[cfg(test)]
mod tests;
