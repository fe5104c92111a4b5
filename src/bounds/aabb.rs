//! Axis-aligned bounding box.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use delaunay2d::bounds::Aabb2;
    /// use delaunay2d::Point2;
    ///
    /// let points = [Point2::new(1.0_f64, 5.0), Point2::new(-2.0, 3.0), Point2::new(0.0, 4.0)];
    /// let aabb = Aabb2::from_points(points.iter().copied()).unwrap();
    ///
    /// assert_eq!(aabb.min, Point2::new(-2.0, 3.0));
    /// assert_eq!(aabb.max, Point2::new(1.0, 5.0));
    /// assert!(Aabb2::<f64>::from_points(std::iter::empty()).is_none());
    /// ```
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    /// Returns the extent along x.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the extent along y.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the larger of width and height.
    #[inline]
    pub fn max_extent(self) -> F {
        self.width().max(self.height())
    }

    /// Returns the center point.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Maps `p` into the box's unit frame: the center moves to the origin and
    /// the larger side is scaled to length 1. A box with no extent is only
    /// translated.
    ///
    /// The map is monotone in each coordinate, so the images of points inside
    /// the box stay inside the image of the box.
    pub fn to_unit_frame(self, p: Point2<F>) -> Point2<F> {
        let extent = self.max_extent();
        let scale = if extent > F::zero() { extent } else { F::one() };
        let center = self.center();
        Point2::new((p.x - center.x) / scale, (p.y - center.y) / scale)
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns `true` if this AABB contains the given point (boundary included).
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
