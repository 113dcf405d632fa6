use crate::error::{GeoError, GeoResult};
use crate::geometry::{Coordinate, Geometry};

/// Apply `f` to every numeric component of every coordinate of `geometry`.
///
/// Returns a new record of the same type whose nesting and element counts
/// match the input exactly. `GeometryCollection` has no coordinate nesting of
/// its own and fails with `UnsupportedGeometryType`.
pub fn map_coords<F>(mut f: F, geometry: &Geometry) -> GeoResult<Geometry>
where
    F: FnMut(f64) -> f64,
{
    map_tuples(|c| c.iter().map(|&x| f(x)).collect(), geometry)
}

/// Like [`map_coords`], but `f` sees whole coordinates and may change their arity.
pub fn map_tuples<F>(mut f: F, geometry: &Geometry) -> GeoResult<Geometry>
where
    F: FnMut(&[f64]) -> Coordinate,
{
    let mapped = match geometry {
        Geometry::Point { coordinates } => Geometry::Point {
            coordinates: f(coordinates.as_slice()),
        },
        Geometry::LineString { coordinates } => Geometry::LineString {
            coordinates: map_line(&mut f, coordinates),
        },
        Geometry::MultiPoint { coordinates } => Geometry::MultiPoint {
            coordinates: map_line(&mut f, coordinates),
        },
        Geometry::Polygon { coordinates } => Geometry::Polygon {
            coordinates: map_lines(&mut f, coordinates),
        },
        Geometry::MultiLineString { coordinates } => Geometry::MultiLineString {
            coordinates: map_lines(&mut f, coordinates),
        },
        Geometry::MultiPolygon { coordinates } => Geometry::MultiPolygon {
            coordinates: coordinates
                .iter()
                .map(|part| map_lines(&mut f, part))
                .collect(),
        },
        Geometry::GeometryCollection { .. } => {
            return Err(GeoError::unsupported_geometry(geometry.kind().as_str()))
        }
    };
    Ok(mapped)
}

fn map_line<F>(f: &mut F, line: &[Coordinate]) -> Vec<Coordinate>
where
    F: FnMut(&[f64]) -> Coordinate,
{
    line.iter().map(|c| f(c.as_slice())).collect()
}

fn map_lines<F>(f: &mut F, lines: &[Vec<Coordinate>]) -> Vec<Vec<Coordinate>>
where
    F: FnMut(&[f64]) -> Coordinate,
{
    lines.iter().map(|curve| map_line(f, curve)).collect()
}
