//! Convex hull of a point set.
//!
//! The hull is the outline a complete triangulation must fill, so the mesh
//! area can be checked against [`convex_hull_area`].
//!
//! # Example
//!
//! ```
//! use delaunay2d::hull::{convex_hull, convex_hull_area};
//! use delaunay2d::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull(&points);
//! assert_eq!(hull.len(), 4);
//! assert!((convex_hull_area(&hull) - 1.0).abs() < 1e-12);
//! ```

use crate::primitives::Point2;
use crate::tolerance::{orient2d, Orientation};
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull using Andrew's monotone chain algorithm.
///
/// Returns the hull vertices in counter-clockwise order, starting from the
/// lowest-x point. Collinear boundary points are dropped, and the first
/// vertex is not repeated at the end.
///
/// Fewer than three points are returned as given.
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted: Vec<Point2<F>> = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });

    let lower = half_hull(sorted.iter().copied());
    let upper = half_hull(sorted.iter().rev().copied());

    lower
        .iter()
        .take(lower.len().saturating_sub(1))
        .chain(upper.iter().take(upper.len().saturating_sub(1)))
        .copied()
        .collect()
}

/// One monotone chain: keeps only left turns.
fn half_hull<F: Float>(points: impl Iterator<Item = Point2<F>>) -> Vec<Point2<F>> {
    let mut chain: Vec<Point2<F>> = Vec::new();
    for p in points {
        while chain.len() >= 2
            && orient2d(chain[chain.len() - 2], chain[chain.len() - 1], p, F::zero())
                != Orientation::CounterClockwise
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Computes the area enclosed by a hull with the shoelace formula.
///
/// Vertices may be in either winding. Returns 0 for fewer than 3 vertices.
pub fn convex_hull_area<F: Float>(hull: &[Point2<F>]) -> F {
    if hull.len() < 3 {
        return F::zero();
    }

    let doubled = hull
        .iter()
        .zip(hull.iter().cycle().skip(1))
        .fold(F::zero(), |acc, (a, b)| acc + a.x * b.y - b.x * a.y);

    doubled.abs() / (F::one() + F::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convex_hull_small_inputs() {
        assert!(convex_hull::<f64>(&[]).is_empty());
        assert_eq!(convex_hull(&[Point2::new(1.0_f64, 1.0)]).len(), 1);
    }

    #[test]
    fn test_convex_hull_is_ccw() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        for i in 0..hull.len() {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            let c = hull[(i + 2) % hull.len()];
            assert_eq!(orient2d(a, b, c, 0.0), Orientation::CounterClockwise);
        }
    }

    #[test]
    fn test_convex_hull_drops_collinear_boundary_points() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert_eq!(convex_hull(&points).len(), 4);
    }

    #[test]
    fn test_convex_hull_with_duplicates() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 3);
        assert_relative_eq!(convex_hull_area(&hull), 0.5);
    }

    #[test]
    fn test_convex_hull_area_either_winding() {
        let ccw: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let cw: Vec<Point2<f64>> = ccw.iter().rev().copied().collect();
        assert_relative_eq!(convex_hull_area(&ccw), 6.0);
        assert_relative_eq!(convex_hull_area(&cw), 6.0);
    }

    #[test]
    fn test_collinear_points_have_zero_area() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ];
        let hull = convex_hull(&points);
        assert_relative_eq!(convex_hull_area(&hull), 0.0);
    }
}
