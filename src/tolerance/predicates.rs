//! Geometric predicates with explicit tolerance.

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if `c` is on the line (within `eps` tolerance)
///
/// `eps` is compared against the absolute value of the cross product
/// (twice the signed area), so it carries units of length squared.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if every point lies on a single line.
///
/// The line runs from the first point to the point farthest from it. Each
/// point is tested with [`orient2d`] at a tolerance of `eps` times the
/// squared length of that baseline, so `eps` is relative and the result does
/// not depend on the coordinate scale. Empty input, a single point, and
/// coincident points are all collinear.
///
/// # Example
///
/// ```
/// use delaunay2d::tolerance::all_collinear;
/// use delaunay2d::Point2;
///
/// let line = [Point2::new(0.0_f64, 0.0), Point2::new(1.0, 1.0), Point2::new(3.0, 3.0)];
/// assert!(all_collinear(&line, 1e-9));
///
/// let bent = [Point2::new(0.0_f64, 0.0), Point2::new(1.0, 1.0), Point2::new(3.0, 2.0)];
/// assert!(!all_collinear(&bent, 1e-9));
/// ```
pub fn all_collinear<F: Float>(points: &[Point2<F>], eps: F) -> bool {
    let Some(&anchor) = points.first() else {
        return true;
    };

    let Some(&far) = points.iter().max_by(|p, q| {
        anchor
            .distance_squared(**p)
            .partial_cmp(&anchor.distance_squared(**q))
            .unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return true;
    };

    let baseline = anchor.distance_squared(far);
    if baseline <= F::zero() {
        return true;
    }

    let tolerance = eps * baseline;
    points
        .iter()
        .all(|&p| orient2d(anchor, far, p, tolerance) == Orientation::Collinear)
}
