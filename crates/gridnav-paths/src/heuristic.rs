use std::f64::consts::SQRT_2;

use gridnav_core::Point;

use crate::config::Heuristic;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    f64::from(dx) + f64::from(dy)
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    (dx * dx + dy * dy).sqrt()
}

/// Octile distance: `max(dx, dy) + (√2 − 1)·min(dx, dy)`.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    f64::from(dx.max(dy)) + (SQRT_2 - 1.0) * f64::from(dx.min(dy))
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    f64::from(dx.max(dy))
}

/// Estimate of the remaining cost from `a` to `b` under `kind`.
#[inline]
pub fn calculate_heuristic(a: Point, b: Point, kind: Heuristic) -> f64 {
    match kind {
        Heuristic::Manhattan => manhattan(a, b),
        Heuristic::Euclidean => euclidean(a, b),
        Heuristic::Diagonal => octile(a, b),
        Heuristic::Chebyshev => chebyshev(a, b),
    }
}

impl Heuristic {
    /// Shorthand for [`calculate_heuristic`].
    #[inline]
    pub fn estimate(self, a: Point, b: Point) -> f64 {
        calculate_heuristic(a, b, self)
    }
}
