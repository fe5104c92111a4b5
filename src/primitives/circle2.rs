//! 2D circle type, used for triangle circumcircles.

use super::Point2;
use num_traits::Float;

/// A 2D circle defined by its center and squared radius.
///
/// The squared radius is stored directly so that containment tests compare
/// squared distances without a round trip through `sqrt`.
///
/// # Example
///
/// ```
/// use delaunay2d::primitives::{Circle2, Point2};
///
/// let circle: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
/// assert!(circle.contains(Point2::new(0.5, 0.0)));
/// assert!(circle.contains(Point2::new(1.0, 0.0)));
/// assert!(!circle.contains_strict(Point2::new(1.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Squared radius (non-negative)
    pub radius_squared: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a circle from its center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self {
            center,
            radius_squared: radius * radius,
        }
    }

    /// Creates a circle from its center and squared radius.
    #[inline]
    pub fn from_radius_squared(center: Point2<F>, radius_squared: F) -> Self {
        Self {
            center,
            radius_squared,
        }
    }

    #[inline]
    pub fn radius(&self) -> F {
        self.radius_squared.sqrt()
    }

    /// Checks if a point is inside the circle (including boundary).
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius_squared
    }

    /// Checks if a point is strictly inside the circle (excluding boundary).
    #[inline]
    pub fn contains_strict(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) < self.radius_squared
    }
}
