//! Undirected 2D edge type.

use super::Point2;
use num_traits::Float;

/// An edge between two points.
///
/// The endpoints are stored in the order they were given, but the edge is
/// undirected: [`Edge2::approx_eq`] treats `(v0, v1)` and `(v1, v0)` as the
/// same edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge2<F> {
    pub v0: Point2<F>,
    pub v1: Point2<F>,
}

impl<F: Float> Edge2<F> {
    /// Creates a new edge from two endpoints.
    #[inline]
    pub fn new(v0: Point2<F>, v1: Point2<F>) -> Self {
        Self { v0, v1 }
    }

    /// Returns the squared length of the edge.
    #[inline]
    pub fn length_squared(self) -> F {
        self.v0.distance_squared(self.v1)
    }

    #[inline]
    pub fn length(self) -> F {
        self.v0.distance(self.v1)
    }

    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.v0.midpoint(self.v1)
    }

    /// Returns the edge with its endpoints swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            v0: self.v1,
            v1: self.v0,
        }
    }

    /// Returns `true` if both edges join the same two points, in either
    /// orientation, with each endpoint compared within `eps`.
    ///
    /// # Example
    ///
    /// ```
    /// use delaunay2d::primitives::{Edge2, Point2};
    ///
    /// let a = Point2::new(0.0_f64, 0.0);
    /// let b = Point2::new(1.0, 0.5);
    ///
    /// assert!(Edge2::new(a, b).approx_eq(Edge2::new(b, a), 1e-9));
    /// ```
    #[inline]
    pub fn approx_eq(self, other: Self, eps: F) -> bool {
        (self.v0.approx_eq(other.v0, eps) && self.v1.approx_eq(other.v1, eps))
            || (self.v0.approx_eq(other.v1, eps) && self.v1.approx_eq(other.v0, eps))
    }

    /// Returns `true` if the endpoints coincide within `eps`.
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.v0.approx_eq(self.v1, eps)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Edge2<F> {
    fn from((v0, v1): (Point2<F>, Point2<F>)) -> Self {
        Self::new(v0, v1)
    }
}
