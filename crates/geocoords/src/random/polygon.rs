//! Irregular star-shaped polygon rings (angle perturbation + radius jitter).
//!
//! Model
//! - Split one revolution into `n` angle steps, each drawn around `2π/n`
//!   with `±irregularity`, then rescale the steps to sum to exactly `2π`.
//! - Walk the steps from a random phase; each vertex sits at a Gaussian
//!   radius (mean `average_radius`, sd `spikeyness`) clipped to `[0, 2·average_radius]`.
//! - Close the ring by repeating the first vertex.

use crate::geometry::Coordinate;
use nalgebra::Vector2;
use rand::Rng;
use std::f64::consts::TAU;

/// Shape knobs for [`irregular_ring`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonShape {
    pub average_radius: f64,
    pub center: Vector2<f64>,
    /// Fraction of the base angle step, clipped to [0, 1].
    pub irregularity: f64,
    /// Radius standard deviation as a fraction of `average_radius`, clipped to [0, 1].
    pub spikeyness: f64,
}

impl Default for PolygonShape {
    fn default() -> Self {
        Self {
            average_radius: 60.0,
            center: Vector2::new(0.1, 0.2),
            irregularity: 0.1,
            spikeyness: 0.5,
        }
    }
}

/// Clamp `x` to `[min, max]`; an inverted range leaves `x` untouched.
#[inline]
pub fn clip(x: f64, min: f64, max: f64) -> f64 {
    if min > max {
        x
    } else if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Closed ring of `n + 1` vertices, first == last. Callers guarantee `n > 0`.
pub fn irregular_ring<R: Rng + ?Sized>(
    n: usize,
    shape: &PolygonShape,
    rng: &mut R,
) -> Vec<Coordinate> {
    let base = TAU / n as f64;
    let irregularity = clip(shape.irregularity, 0.0, 1.0) * base;
    let spikeyness = clip(shape.spikeyness, 0.0, 1.0) * shape.average_radius;

    let mut steps: Vec<f64> = (0..n)
        .map(|_| uniform(rng, base - irregularity, base + irregularity))
        .collect();
    let k = steps.iter().sum::<f64>() / TAU;
    for s in &mut steps {
        *s /= k;
    }

    let mut angle = uniform(rng, 0.0, TAU);
    let mut ring: Vec<Coordinate> = Vec::with_capacity(n + 1);
    for step in steps {
        let r = clip(
            gauss(rng, shape.average_radius, spikeyness),
            0.0,
            2.0 * shape.average_radius,
        );
        let v = shape.center + Vector2::new(angle.cos(), angle.sin()) * r;
        ring.push(vec![v.x, v.y]);
        angle += step;
    }
    if let Some(first) = ring.first().cloned() {
        ring.push(first);
    }
    ring
}

/// Uniform draw from `[a, b)`; `a == b` returns `a`.
#[inline]
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    a + (b - a) * rng.gen::<f64>()
}

/// Normal draw via Box–Muller.
fn gauss<R: Rng + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> f64 {
    // 1 - U keeps the log argument in (0, 1].
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
    mean + sd * z
}
