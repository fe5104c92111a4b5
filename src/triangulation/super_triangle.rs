//! The sentinel triangle that seeds Bowyer-Watson insertion.

use super::symbolic::SymbolicPoint;
use crate::bounds::Aabb2;
use crate::primitives::{Point2, Triangle2, Vec2};
use num_traits::Float;

/// A triangle that encloses every input point, with its vertices at infinity.
///
/// It only exists while a triangulation runs: insertion proceeds inside it,
/// and every triangle still attached to one of its vertices is stripped at
/// the end.
///
/// Each vertex is a ray `anchor + s·direction` evaluated in the limit of
/// large `s`. For a bounding box with center `m` and larger side `d` the
/// vertices at parameter `s` are `(m.x - s·d, m.y - d)`,
/// `(m.x + s·d, m.y - d)` and `(m.x + d, m.y + s·d)`, in counter-clockwise
/// order. No ray's supporting line crosses the box, so no sentinel ever
/// lines up with two input points.
///
/// Keeping the vertices at infinity rather than at a fixed distance keeps
/// every convex-hull edge of the input: a finite super-triangle can fall
/// inside the circumcircle of a thin hull triangle and steal it.
///
/// # Example
///
/// ```
/// use delaunay2d::triangulation::SuperTriangle;
/// use delaunay2d::Point2;
///
/// let points = [Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0), Point2::new(0.5, 1.0)];
/// let sentinel = SuperTriangle::enclosing(&points).unwrap();
///
/// // Any realization at a large enough parameter encloses the input.
/// let outer = sentinel.triangle_at(20.0);
/// assert!(outer.signed_area() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperTriangle<F> {
    anchors: [Point2<F>; 3],
    directions: [Vec2<F>; 3],
}

impl<F: Float> SuperTriangle<F> {
    /// Builds the super-triangle for `points`, or `None` if there are none.
    pub fn enclosing(points: &[Point2<F>]) -> Option<Self> {
        let bounds = Aabb2::from_points(points.iter().copied())?;
        Some(Self::around(bounds))
    }

    /// Builds the super-triangle for a bounding box.
    ///
    /// A box with no extent (every point coincides) is treated as having
    /// unit extent so the rays stay clear of it.
    pub fn around(bounds: Aabb2<F>) -> Self {
        let extent = bounds.max_extent();
        let delta = if extent > F::zero() { extent } else { F::one() };
        let mid = bounds.center();
        let zero = F::zero();

        Self {
            anchors: [
                Point2::new(mid.x, mid.y - delta),
                Point2::new(mid.x, mid.y - delta),
                Point2::new(mid.x + delta, mid.y),
            ],
            directions: [
                Vec2::new(-delta, zero),
                Vec2::new(delta, zero),
                Vec2::new(zero, delta),
            ],
        }
    }

    /// Returns the vertices at parameter `scale`.
    pub fn vertices_at(&self, scale: F) -> [Point2<F>; 3] {
        [0, 1, 2].map(|k| self.sentinel(k).at(scale))
    }

    /// Returns the finite triangle traced at parameter `scale`.
    pub fn triangle_at(&self, scale: F) -> Triangle2<F> {
        let [a, b, c] = self.vertices_at(scale);
        Triangle2::new(a, b, c)
    }

    /// Returns vertex `k` (0, 1 or 2) as a point at infinity.
    pub(crate) fn sentinel(&self, k: u8) -> SymbolicPoint<F> {
        let k = usize::from(k);
        SymbolicPoint::receding(self.anchors[k], self.directions[k])
    }
}
