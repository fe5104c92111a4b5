//! Orientation and in-circle predicates for points that may lie at infinity.
//!
//! A symbolic point is `anchor + s·direction` with `s` growing without bound.
//! Substituting it into a determinant predicate yields a polynomial in `s`,
//! and the sign of its highest-order non-zero coefficient is the sign the
//! predicate takes for every sufficiently large `s`. Finite points have a
//! zero direction, for which the predicates reduce to the ordinary ones.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

/// Highest power of `s` an in-circle determinant can reach: coordinates are
/// linear in `s` and the lifted coordinate is quadratic.
const DEGREE: usize = 4;

/// Polynomial in `s`, lowest-order coefficient first.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Poly<F>([F; DEGREE + 1]);

impl<F: Float> Poly<F> {
    fn linear(constant: F, slope: F) -> Self {
        let mut coefficients = [F::zero(); DEGREE + 1];
        coefficients[0] = constant;
        coefficients[1] = slope;
        Self(coefficients)
    }

    /// Sign of the polynomial as `s` grows without bound.
    fn sign_at_infinity(&self) -> Ordering {
        let leading = self
            .0
            .iter()
            .rev()
            .copied()
            .find(|c| *c != F::zero())
            .unwrap_or_else(F::zero);

        if leading > F::zero() {
            Ordering::Greater
        } else if leading < F::zero() {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

impl<F: Float> Add for Poly<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o = *o + r;
        }
        Self(out)
    }
}

impl<F: Float> Sub for Poly<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o = *o - r;
        }
        Self(out)
    }
}

impl<F: Float> Mul for Poly<F> {
    type Output = Self;

    /// Terms above [`DEGREE`] are discarded; the predicates below never
    /// produce them.
    fn mul(self, rhs: Self) -> Self {
        let mut out = [F::zero(); DEGREE + 1];
        for (i, &a) in self.0.iter().enumerate() {
            for (j, &b) in rhs.0.iter().enumerate().take(DEGREE + 1 - i) {
                out[i + j] = out[i + j] + a * b;
            }
        }
        Self(out)
    }
}

/// A point that is either finite or receding to infinity along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SymbolicPoint<F> {
    pub anchor: Point2<F>,
    pub direction: Vec2<F>,
}

impl<F: Float> SymbolicPoint<F> {
    pub fn finite(p: Point2<F>) -> Self {
        Self {
            anchor: p,
            direction: Vec2::zero(),
        }
    }

    pub fn receding(anchor: Point2<F>, direction: Vec2<F>) -> Self {
        Self { anchor, direction }
    }

    /// Position at parameter `s`.
    pub fn at(self, s: F) -> Point2<F> {
        self.anchor + self.direction * s
    }

    /// Coordinates of `self - origin` as polynomials in `s`.
    fn offset_from(self, origin: Self) -> (Poly<F>, Poly<F>) {
        let constant = self.anchor - origin.anchor;
        let slope = self.direction - origin.direction;
        (
            Poly::linear(constant.x, slope.x),
            Poly::linear(constant.y, slope.y),
        )
    }
}

/// Orientation of `(a, b, c)` in the limit: `Greater` for counter-clockwise,
/// `Less` for clockwise, `Equal` when the three stay collinear.
pub(crate) fn orient<F: Float>(
    a: SymbolicPoint<F>,
    b: SymbolicPoint<F>,
    c: SymbolicPoint<F>,
) -> Ordering {
    let (bx, by) = b.offset_from(a);
    let (cx, cy) = c.offset_from(a);
    (bx * cy - by * cx).sign_at_infinity()
}

/// Lifted in-circle determinant of `p` against `(a, b, c)` in the limit.
///
/// `Greater` means `p` is inside the circle when `(a, b, c)` is
/// counter-clockwise; the sign flips for clockwise input. `Equal` means `p`
/// stays on the circle.
pub(crate) fn in_circle<F: Float>(
    a: SymbolicPoint<F>,
    b: SymbolicPoint<F>,
    c: SymbolicPoint<F>,
    p: SymbolicPoint<F>,
) -> Ordering {
    let lift = |v: SymbolicPoint<F>| {
        let (x, y) = v.offset_from(p);
        (x, y, x * x + y * y)
    };
    let (ax, ay, al) = lift(a);
    let (bx, by, bl) = lift(b);
    let (cx, cy, cl) = lift(c);

    let det = ax * (by * cl - bl * cy) - ay * (bx * cl - bl * cx) + al * (bx * cy - by * cx);
    det.sign_at_infinity()
}

/// Returns `true` if `p` lies inside or on the limiting circumcircle of
/// `(a, b, c)`, whatever their winding.
///
/// A triangle that stays collinear in the limit contains nothing. When one
/// vertex recedes, the circle opens into the half-plane beyond the opposite
/// edge, plus the interior of that edge itself.
pub(crate) fn circumcircle_contains<F: Float>(
    a: SymbolicPoint<F>,
    b: SymbolicPoint<F>,
    c: SymbolicPoint<F>,
    p: SymbolicPoint<F>,
) -> bool {
    match orient(a, b, c) {
        Ordering::Equal => false,
        winding => {
            let side = in_circle(a, b, c, p);
            side == Ordering::Equal || side == winding
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Triangle2;

    fn finite(x: f64, y: f64) -> SymbolicPoint<f64> {
        SymbolicPoint::finite(Point2::new(x, y))
    }

    #[test]
    fn test_poly_product_and_sign() {
        let p = Poly::linear(1.0_f64, -2.0);
        let square = p * p; // 4s² - 4s + 1
        assert_eq!(square.0, [1.0, -4.0, 4.0, 0.0, 0.0]);
        assert_eq!(square.sign_at_infinity(), Ordering::Greater);
        assert_eq!((p - p).sign_at_infinity(), Ordering::Equal);
        assert_eq!(Poly::linear(5.0, 0.0).sign_at_infinity(), Ordering::Greater);
        assert_eq!(Poly::linear(5.0, -1e-12).sign_at_infinity(), Ordering::Less);
    }

    #[test]
    fn test_finite_orientation() {
        let (a, b) = (finite(0.0, 0.0), finite(1.0, 0.0));
        assert_eq!(orient(a, b, finite(0.0, 1.0)), Ordering::Greater);
        assert_eq!(orient(a, b, finite(0.0, -1.0)), Ordering::Less);
        assert_eq!(orient(a, b, finite(3.0, 0.0)), Ordering::Equal);
    }

    #[test]
    fn test_finite_in_circle() {
        let (a, b, c) = (finite(0.0, 0.0), finite(1.0, 0.0), finite(0.0, 1.0));
        assert!(circumcircle_contains(a, b, c, finite(0.5, 0.5)));
        assert!(circumcircle_contains(a, b, c, finite(1.0, 1.0)));
        assert!(!circumcircle_contains(a, b, c, finite(2.0, 2.0)));
        // Winding does not matter.
        assert!(circumcircle_contains(a, c, b, finite(0.5, 0.5)));
        assert!(!circumcircle_contains(a, c, b, finite(2.0, 2.0)));
    }

    #[test]
    fn test_one_receding_vertex_opens_a_half_plane() {
        let (a, b) = (finite(0.0, 0.0), finite(1.0, 0.0));
        let below = SymbolicPoint::receding(Point2::new(0.5, -1.0), Vec2::new(0.0, -1.0));

        assert!(circumcircle_contains(a, b, below, finite(0.5, -0.1)));
        assert!(circumcircle_contains(a, b, below, finite(-50.0, -1e-6)));
        assert!(!circumcircle_contains(a, b, below, finite(0.5, 0.1)));
        // On the edge's line: inside the edge only.
        assert!(circumcircle_contains(a, b, below, finite(0.5, 0.0)));
        assert!(!circumcircle_contains(a, b, below, finite(2.0, 0.0)));
        assert!(circumcircle_contains(b, below, a, finite(0.5, -0.1)));
    }

    #[test]
    fn test_two_receding_vertices() {
        // Rays heading left and right along y = -1; the circle through `a`
        // opens onto everything below `a`.
        let left = SymbolicPoint::receding(Point2::new(0.0, -1.0), Vec2::new(-1.0, 0.0));
        let right = SymbolicPoint::receding(Point2::new(0.0, -1.0), Vec2::new(1.0, 0.0));
        let a = finite(0.0, 0.0);

        assert_eq!(orient(a, left, right), Ordering::Greater);
        assert!(circumcircle_contains(a, left, right, finite(3.0, -0.5)));
        assert!(!circumcircle_contains(a, left, right, finite(-3.0, 0.5)));
    }

    #[test]
    fn test_receding_vertex_agrees_with_far_finite_vertex() {
        let (a, b) = (Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.2));
        let sentinel = SymbolicPoint::receding(Point2::new(0.0, -1.0), Vec2::new(-1.0, 0.0));
        let far = Triangle2::new(a, b, sentinel.at(1e5));

        for (x, y) in [(0.5, -0.3), (0.2, 0.4), (-3.0, -2.0), (4.0, 1.5), (0.5, 0.05)] {
            let p = Point2::new(x, y);
            assert_eq!(
                circumcircle_contains(
                    SymbolicPoint::finite(a),
                    SymbolicPoint::finite(b),
                    sentinel,
                    SymbolicPoint::finite(p)
                ),
                far.circumcircle_contains(p, 1e-12),
                "disagreement at {:?}",
                p
            );
        }
    }

    #[test]
    fn test_seed_triangle_contains_everything_nearby() {
        let sentinels = [
            SymbolicPoint::receding(Point2::new(0.0_f64, -1.0), Vec2::new(-1.0, 0.0)),
            SymbolicPoint::receding(Point2::new(0.0, -1.0), Vec2::new(1.0, 0.0)),
            SymbolicPoint::receding(Point2::new(1.0, 0.0), Vec2::new(0.0, 1.0)),
        ];
        let [s0, s1, s2] = sentinels;
        assert_eq!(orient(s0, s1, s2), Ordering::Greater);
        for (x, y) in [(0.0, 0.0), (-0.5, 0.5), (0.5, -0.5), (0.3, 0.1)] {
            assert!(circumcircle_contains(s0, s1, s2, finite(x, y)));
        }
    }
}
