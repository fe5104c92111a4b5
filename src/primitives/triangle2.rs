//! 2D triangle type with circumcircle and vertex tests.

use super::{Circle2, Edge2, Point2, Vec2};
use num_traits::Float;

/// A triangle given by three points.
///
/// No winding order is enforced. The circumcircle computation does not
/// depend on orientation, and [`Triangle2::to_ccw`] normalizes winding when
/// a consumer needs it.
///
/// # Example
///
/// ```
/// use delaunay2d::primitives::{Point2, Triangle2};
///
/// let tri = Triangle2::new(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// );
///
/// // The hypotenuse is a diameter, so the opposite square corner is on the circle.
/// assert!(tri.circumcircle_contains(Point2::new(1.0, 1.0), 1e-9));
/// assert!(!tri.circumcircle_contains(Point2::new(2.0, 2.0), 1e-9));
/// assert!(tri.contains_vertex(Point2::new(1.0, 0.0), 1e-9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle2<F> {
    pub v0: Point2<F>,
    pub v1: Point2<F>,
    pub v2: Point2<F>,
}

impl<F: Float> Triangle2<F> {
    #[inline]
    pub fn new(v0: Point2<F>, v1: Point2<F>, v2: Point2<F>) -> Self {
        Self { v0, v1, v2 }
    }

    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Returns the edges `(v0, v1)`, `(v1, v2)`, `(v2, v0)` in that order.
    #[inline]
    pub fn edges(&self) -> [Edge2<F>; 3] {
        [
            Edge2::new(self.v0, self.v1),
            Edge2::new(self.v1, self.v2),
            Edge2::new(self.v2, self.v0),
        ]
    }

    /// Returns twice the signed area. Positive for counter-clockwise winding.
    #[inline]
    fn doubled_signed_area(&self) -> F {
        (self.v1 - self.v0).cross(self.v2 - self.v0)
    }

    /// Returns the signed area. Positive for counter-clockwise winding.
    #[inline]
    pub fn signed_area(&self) -> F {
        self.doubled_signed_area() / (F::one() + F::one())
    }

    /// Returns the unsigned area.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the average of the three vertices.
    pub fn centroid(&self) -> Point2<F> {
        let three = F::one() + F::one() + F::one();
        Point2::new(
            (self.v0.x + self.v1.x + self.v2.x) / three,
            (self.v0.y + self.v1.y + self.v2.y) / three,
        )
    }

    /// Returns `true` if the triangle has (near) zero area.
    ///
    /// The doubled area is compared against `eps` times the squared length of
    /// the longest edge, which makes the test independent of the input scale:
    /// it bounds the sine of the angle opposite the longest edge. A triangle
    /// whose vertices all coincide is degenerate.
    pub fn is_degenerate(&self, eps: F) -> bool {
        let longest_squared = self
            .edges()
            .iter()
            .map(|e| e.length_squared())
            .fold(F::zero(), |acc, l| acc.max(l));
        self.doubled_signed_area().abs() <= eps * longest_squared
    }

    /// Computes the circle through all three vertices.
    ///
    /// Uses the perpendicular-bisector intersection with `v0` translated to
    /// the origin. Returns `None` for degenerate triangles, whose
    /// circumcircle is undefined or numerically meaningless.
    pub fn circumcircle(&self, eps: F) -> Option<Circle2<F>> {
        if self.is_degenerate(eps) {
            return None;
        }

        let b = self.v1 - self.v0;
        let c = self.v2 - self.v0;
        let d = (F::one() + F::one()) * b.cross(c);

        let bb = b.magnitude_squared();
        let cc = c.magnitude_squared();
        let offset = Vec2::new((c.y * bb - b.y * cc) / d, (b.x * cc - c.x * bb) / d);

        Some(Circle2::from_radius_squared(
            self.v0 + offset,
            offset.magnitude_squared(),
        ))
    }

    /// Returns `true` if `p` lies inside or on the circumcircle.
    ///
    /// A point within `eps` of a vertex is on the circle by definition, which
    /// keeps duplicate points from slipping past the test through rounding.
    /// Degenerate triangles contain nothing.
    pub fn circumcircle_contains(&self, p: Point2<F>, eps: F) -> bool {
        match self.circumcircle(eps) {
            Some(circle) => self.contains_vertex(p, eps) || circle.contains(p),
            None => false,
        }
    }

    /// Returns `true` if `p` is within `eps` of any of the three vertices.
    #[inline]
    pub fn contains_vertex(&self, p: Point2<F>, eps: F) -> bool {
        self.v0.approx_eq(p, eps) || self.v1.approx_eq(p, eps) || self.v2.approx_eq(p, eps)
    }

    /// Returns `true` if both triangles have the same vertex set, in any order.
    pub fn same_vertices(&self, other: &Self, eps: F) -> bool {
        self.vertices().iter().all(|&v| other.contains_vertex(v, eps))
            && other.vertices().iter().all(|&v| self.contains_vertex(v, eps))
    }

    /// Returns the triangle with counter-clockwise winding.
    ///
    /// Clockwise triangles get `v1` and `v2` swapped; all others are returned
    /// unchanged.
    #[inline]
    pub fn to_ccw(self) -> Self {
        if self.doubled_signed_area() < F::zero() {
            Self::new(self.v0, self.v2, self.v1)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-9;

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle2<f64> {
        Triangle2::new(a.into(), b.into(), c.into())
    }

    #[test]
    fn test_edges_follow_vertex_order() {
        let t = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let [e0, e1, e2] = t.edges();
        assert_eq!((e0.v0, e0.v1), (t.v0, t.v1));
        assert_eq!((e1.v0, e1.v1), (t.v1, t.v2));
        assert_eq!((e2.v0, e2.v1), (t.v2, t.v0));
    }

    #[test]
    fn test_area() {
        let ccw = tri((0.0, 0.0), (2.0, 0.0), (0.0, 2.0));
        assert_relative_eq!(ccw.signed_area(), 2.0);
        let cw = tri((0.0, 0.0), (0.0, 2.0), (2.0, 0.0));
        assert_relative_eq!(cw.signed_area(), -2.0);
        assert_relative_eq!(cw.area(), 2.0);
    }

    #[test]
    fn test_centroid() {
        let t = tri((0.0, 0.0), (3.0, 0.0), (0.0, 3.0));
        let c = t.centroid();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn test_circumcircle_right_triangle() {
        let t = tri((0.0, 0.0), (1.0, 0.0), (1.0, 1.0));
        let circle = t.circumcircle(EPS).unwrap();
        assert_relative_eq!(circle.center.x, 0.5);
        assert_relative_eq!(circle.center.y, 0.5);
        assert_relative_eq!(circle.radius_squared, 0.5);
    }

    #[test]
    fn test_circumcircle_independent_of_winding() {
        let ccw = tri((0.0, 0.0), (4.0, 0.0), (1.0, 3.0));
        let cw = tri((0.0, 0.0), (1.0, 3.0), (4.0, 0.0));
        let a = ccw.circumcircle(EPS).unwrap();
        let b = cw.circumcircle(EPS).unwrap();
        assert_relative_eq!(a.center.x, b.center.x, epsilon = 1e-12);
        assert_relative_eq!(a.center.y, b.center.y, epsilon = 1e-12);
        assert_relative_eq!(a.radius_squared, b.radius_squared, epsilon = 1e-12);
    }

    #[test]
    fn test_circumcircle_contains() {
        let t = tri((0.0, 0.0), (1.0, 0.0), (0.5, 0.866));
        assert!(t.circumcircle_contains(Point2::new(0.5, 0.288), EPS));
        assert!(!t.circumcircle_contains(Point2::new(10.0, 10.0), EPS));
    }

    #[test]
    fn test_circumcircle_contains_own_vertices() {
        let t = tri((0.1, 0.2), (0.8, 0.1), (0.4, 0.8));
        for v in t.vertices() {
            assert!(t.circumcircle_contains(v, EPS));
        }
    }

    #[test]
    fn test_collinear_triangle_is_degenerate() {
        let t = tri((0.0, 0.0), (1.0, 0.0), (2.0, 0.0));
        assert!(t.is_degenerate(EPS));
        assert!(t.circumcircle(EPS).is_none());
        assert!(!t.circumcircle_contains(Point2::new(1.0, 0.0), EPS));
        assert!(!t.circumcircle_contains(Point2::new(0.0, 0.0), EPS));
    }

    #[test]
    fn test_coincident_vertices_are_degenerate() {
        let t = tri((1.0, 1.0), (1.0, 1.0), (1.0, 1.0));
        assert!(t.is_degenerate(EPS));
        let sliver = tri((0.0, 0.0), (0.0, 0.0), (1.0, 1.0));
        assert!(sliver.is_degenerate(EPS));
    }

    #[test]
    fn test_degeneracy_is_scale_invariant() {
        let small = tri((0.0, 0.0), (1e-6, 0.0), (0.0, 1e-6));
        assert!(!small.is_degenerate(EPS));
        assert!(small.circumcircle(EPS).is_some());

        let flat = tri((0.0, 0.0), (1e6, 0.0), (5e5, 1e-6));
        assert!(flat.is_degenerate(EPS));
    }

    #[test]
    fn test_contains_vertex() {
        let t = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        assert!(t.contains_vertex(Point2::new(0.0, 0.0), EPS));
        assert!(t.contains_vertex(Point2::new(1.0 + 1e-12, 0.0), EPS));
        assert!(!t.contains_vertex(Point2::new(0.5, 0.5), EPS));
    }

    #[test]
    fn test_same_vertices_ignores_order() {
        let a = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let b = tri((0.0, 1.0), (0.0, 0.0), (1.0, 0.0));
        let c = tri((0.0, 1.0), (0.0, 0.0), (1.0, 1.0));
        assert!(a.same_vertices(&b, EPS));
        assert!(!a.same_vertices(&c, EPS));
    }

    #[test]
    fn test_to_ccw() {
        let cw = tri((0.0, 0.0), (0.0, 1.0), (1.0, 0.0));
        let ccw = cw.to_ccw();
        assert!(ccw.signed_area() > 0.0);
        assert!(ccw.same_vertices(&cw, 0.0));
        assert_eq!(ccw.to_ccw(), ccw);
    }
}
