//! Print a few random geometries with their coordinate counts.
//!
//! Usage:
//!   cargo run -p geocoords --example random_shapes -- polygon
//!   cargo run -p geocoords --example random_shapes -- line

use geocoords::prelude::*;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "polygon".to_string());
    let kind = match mode.as_str() {
        "polygon" => GeometryKind::Polygon,
        "line" => GeometryKind::LineString,
        "point" => GeometryKind::Point,
        _ => {
            eprintln!("usage: random_shapes [polygon|line|point]");
            return;
        }
    };
    let cfg = RandomCfg {
        number_vertices: 8,
        bbox: BoundingBox::new(-10.0, -10.0, 10.0, 10.0),
        ..RandomCfg::default()
    };
    let mut sampler = RandomGeometrySampler::new(kind, cfg, 2025).unwrap();
    for i in 0..5 {
        let (g, token) = sampler.generate_next().unwrap();
        let first = g.coords().next().unwrap_or_default();
        println!(
            "{kind} sample {i} (index {}): {} coords, first {:?}",
            token.index,
            g.coords().count(),
            first
        );
    }
}
