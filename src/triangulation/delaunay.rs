//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Start with a super-triangle containing all points
//! 2. Insert points one at a time: remove every triangle whose circumcircle
//!    contains the point, then connect the point to the boundary of the
//!    resulting cavity
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! The super-triangle's vertices lie at infinity (see [`SuperTriangle`]), so
//! every edge of the input's convex hull survives step 3.
//!
//! # Tolerance
//!
//! Input is mapped into the unit frame of its bounding box before
//! insertion, which makes every tolerance relative to the extent of the
//! input: the same point set triangulates the same way at any scale or
//! offset. Output triangles still reference the original coordinates.
//!
//! # Degenerate input
//!
//! Triangles whose area is negligible relative to their longest edge are
//! treated as having no circumcircle: they never join a cavity, and they are
//! dropped from the output. A point that coincides with an existing vertex
//! lies on the circumcircle of every triangle using that vertex, so
//! duplicates re-triangulate the star of the earlier copy instead of
//! producing zero-area slivers. Input whose points all lie on one line
//! (within the tolerance) produces no triangles.
//!
//! # Complexity
//!
//! - Time: O(n²); every insertion scans the whole working set
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use delaunay2d::triangulation::triangulate;
//! use delaunay2d::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let triangles = triangulate(&points);
//! assert_eq!(triangles.len(), 3);
//!
//! // Output vertices are the input coordinates, untouched.
//! for tri in &triangles {
//!     for v in tri.vertices() {
//!         assert!(points.contains(&v));
//!     }
//! }
//! ```

use super::symbolic::{self, SymbolicPoint};
use super::{SuperTriangle, TriangulationConfig};
use crate::bounds::Aabb2;
use crate::error::DelaunayError;
use crate::primitives::{Edge2, Point2, Triangle2};
use crate::tolerance::all_collinear;
use num_traits::Float;

/// Where a working-set vertex came from.
///
/// Sentinel vertices are recognized by this tag, never by comparing
/// coordinates, so an input point close to a sentinel is never mistaken
/// for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexTag {
    Input(usize),
    Sentinel(u8),
}

impl VertexTag {
    #[inline]
    fn is_sentinel(self) -> bool {
        matches!(self, VertexTag::Sentinel(_))
    }

    #[inline]
    fn input_index(self) -> Option<usize> {
        match self {
            VertexTag::Input(index) => Some(index),
            VertexTag::Sentinel(_) => None,
        }
    }
}

/// A triangle in the working set, as the tags of its three vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WorkingTriangle {
    tags: [VertexTag; 3],
}

/// An edge collected from a cavity triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CavityEdge {
    tags: [VertexTag; 2],
}

impl CavityEdge {
    /// Returns `true` if both edges join the same two vertices, in either
    /// direction.
    fn same_endpoints(self, other: Self) -> bool {
        let [a, b] = self.tags;
        other.tags == [a, b] || other.tags == [b, a]
    }
}

impl WorkingTriangle {
    fn seed() -> Self {
        Self {
            tags: [
                VertexTag::Sentinel(0),
                VertexTag::Sentinel(1),
                VertexTag::Sentinel(2),
            ],
        }
    }

    /// Connects a cavity boundary edge `(a, b)` to the new point.
    fn fan(boundary: CavityEdge, tag: VertexTag) -> Self {
        let [a, b] = boundary.tags;
        Self { tags: [a, b, tag] }
    }

    fn edges(&self) -> [CavityEdge; 3] {
        let [t0, t1, t2] = self.tags;
        [
            CavityEdge { tags: [t0, t1] },
            CavityEdge { tags: [t1, t2] },
            CavityEdge { tags: [t2, t0] },
        ]
    }

    #[inline]
    fn touches_sentinel(&self) -> bool {
        self.tags.iter().any(|tag| tag.is_sentinel())
    }

    /// Returns the input indices of the vertices, or `None` if any vertex
    /// is a sentinel.
    fn input_indices(&self) -> Option<[usize; 3]> {
        let [a, b, c] = self.tags;
        Some([a.input_index()?, b.input_index()?, c.input_index()?])
    }
}

/// Scratch state for one triangulation: the input in the unit frame of its
/// bounding box, and the super-triangle around it.
struct Workspace<F> {
    points: Vec<Point2<F>>,
    sentinel: SuperTriangle<F>,
    eps: F,
}

impl<F: Float> Workspace<F> {
    fn new(points: &[Point2<F>], bounds: Aabb2<F>, eps: F) -> Self {
        let unit_bounds = Aabb2::new(
            bounds.to_unit_frame(bounds.min),
            bounds.to_unit_frame(bounds.max),
        );

        Self {
            points: points.iter().map(|&p| bounds.to_unit_frame(p)).collect(),
            sentinel: SuperTriangle::around(unit_bounds),
            eps,
        }
    }

    fn position(&self, tag: VertexTag) -> SymbolicPoint<F> {
        match tag {
            VertexTag::Input(index) => SymbolicPoint::finite(self.points[index]),
            VertexTag::Sentinel(k) => self.sentinel.sentinel(k),
        }
    }

    fn triangle(&self, [a, b, c]: [usize; 3]) -> Triangle2<F> {
        Triangle2::new(self.points[a], self.points[b], self.points[c])
    }

    fn finite_edge(&self, edge: CavityEdge) -> Option<Edge2<F>> {
        let [a, b] = edge.tags;
        Some(Edge2::new(
            self.points[a.input_index()?],
            self.points[b.input_index()?],
        ))
    }

    /// Returns `true` if inserting `p` invalidates `t`.
    ///
    /// Finite triangles use their circumcircle. Triangles with a sentinel
    /// vertex use the limiting circle as the sentinel recedes, after the
    /// same coincident-vertex rule.
    fn circumcircle_contains(&self, t: &WorkingTriangle, p: Point2<F>) -> bool {
        if let Some(indices) = t.input_indices() {
            return self.triangle(indices).circumcircle_contains(p, self.eps);
        }

        let coincident = t
            .tags
            .iter()
            .filter_map(|tag| tag.input_index())
            .any(|index| self.points[index].approx_eq(p, self.eps));

        let [a, b, c] = t.tags.map(|tag| self.position(tag));
        coincident || symbolic::circumcircle_contains(a, b, c, SymbolicPoint::finite(p))
    }

    /// Finite edges match by tolerance; edges with a sentinel endpoint match
    /// by identity.
    fn same_edge(&self, a: CavityEdge, b: CavityEdge) -> bool {
        match (self.finite_edge(a), self.finite_edge(b)) {
            (Some(ea), Some(eb)) => ea.approx_eq(eb, self.eps),
            _ => a.same_endpoints(b),
        }
    }
}

/// Counters collected during one triangulation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InsertionStats {
    /// Number of input points inserted.
    pub points_inserted: usize,
    /// Triangles created, including the super-triangle.
    pub triangles_created: usize,
    /// Triangles removed because a later point fell in their circumcircle.
    pub triangles_invalidated: usize,
    /// Largest number of triangles removed by a single insertion.
    pub largest_cavity: usize,
    /// Triangles stripped at the end for touching a super-triangle vertex.
    pub sentinel_triangles_stripped: usize,
    /// Zero-area triangles left out of the output.
    pub degenerate_triangles_dropped: usize,
}

impl InsertionStats {
    /// Number of triangles that survived insertion and cleanup.
    pub fn triangles_emitted(&self) -> usize {
        self.triangles_created
            - self.triangles_invalidated
            - self.sentinel_triangles_stripped
            - self.degenerate_triangles_dropped
    }
}

/// Bowyer-Watson triangulation engine.
///
/// Holds only its configuration; each call owns its scratch state, so one
/// `Triangulator` can be shared freely and called once per point snapshot.
///
/// # Example
///
/// ```
/// use delaunay2d::triangulation::{TriangulationConfig, Triangulator};
/// use delaunay2d::Point2;
///
/// let triangulator = Triangulator::new(
///     TriangulationConfig::default().with_normalized_winding(true),
/// );
///
/// let square = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let (triangles, stats) = triangulator.triangulate_with_stats(&square);
/// assert_eq!(triangles.len(), 2);
/// assert_eq!(stats.points_inserted, 4);
/// assert!(triangles.iter().all(|t| t.signed_area() > 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangulator<F> {
    config: TriangulationConfig<F>,
}

impl<F: Float> Default for Triangulator<F> {
    fn default() -> Self {
        Self::new(TriangulationConfig::default())
    }
}

impl<F: Float> Triangulator<F> {
    /// Creates an engine with the given configuration.
    pub fn new(config: TriangulationConfig<F>) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TriangulationConfig<F> {
        &self.config
    }

    /// Computes the Delaunay triangulation of `points`.
    ///
    /// Triangles reference the input coordinates verbatim and are returned in
    /// the order they were created. Never panics; see the module docs for how
    /// degenerate input is handled.
    pub fn triangulate(&self, points: &[Point2<F>]) -> Vec<Triangle2<F>> {
        self.triangulate_with_stats(points).0
    }

    /// Like [`Triangulator::triangulate`], after validating the configuration
    /// and rejecting non-finite coordinates.
    pub fn try_triangulate(&self, points: &[Point2<F>]) -> Result<Vec<Triangle2<F>>, DelaunayError> {
        self.config.validate()?;

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            tracing::warn!(index, "rejecting input with a non-finite coordinate");
            return Err(DelaunayError::NonFiniteCoordinate { index });
        }

        Ok(self.triangulate(points))
    }

    /// Computes the triangulation and reports what the insertion loop did.
    pub fn triangulate_with_stats(&self, points: &[Point2<F>]) -> (Vec<Triangle2<F>>, InsertionStats) {
        let mut stats = InsertionStats::default();
        let eps = self.config.epsilon;

        let Some(bounds) = Aabb2::from_points(points.iter().copied()) else {
            return (Vec::new(), stats);
        };

        if all_collinear(points, eps) {
            tracing::debug!(
                points = points.len(),
                "input points are collinear; no triangles to produce"
            );
            return (Vec::new(), stats);
        }

        tracing::debug!(points = points.len(), "starting Bowyer-Watson triangulation");
        let workspace = Workspace::new(points, bounds, eps);

        let mut working = vec![WorkingTriangle::seed()];
        stats.triangles_created = 1;

        for (index, &p) in workspace.points.iter().enumerate() {
            let (cavity, kept): (Vec<_>, Vec<_>) = working
                .into_iter()
                .partition(|t| workspace.circumcircle_contains(t, p));

            let boundary = cavity_boundary(&cavity, &workspace);
            tracing::trace!(
                index,
                cavity = cavity.len(),
                boundary = boundary.len(),
                "inserting point"
            );

            stats.points_inserted += 1;
            stats.triangles_invalidated += cavity.len();
            stats.triangles_created += boundary.len();
            stats.largest_cavity = stats.largest_cavity.max(cavity.len());

            working = kept;
            working.extend(
                boundary
                    .into_iter()
                    .map(|edge| WorkingTriangle::fan(edge, VertexTag::Input(index))),
            );
        }

        let (sentinel_attached, interior): (Vec<_>, Vec<_>) = working
            .into_iter()
            .partition(WorkingTriangle::touches_sentinel);
        stats.sentinel_triangles_stripped = sentinel_attached.len();

        let (degenerate, valid): (Vec<[usize; 3]>, Vec<[usize; 3]>) = interior
            .iter()
            .filter_map(WorkingTriangle::input_indices)
            .partition(|&indices| workspace.triangle(indices).is_degenerate(eps));
        stats.degenerate_triangles_dropped = degenerate.len();
        if !degenerate.is_empty() {
            tracing::warn!(
                count = degenerate.len(),
                "dropping zero-area triangles from the output"
            );
        }

        let normalize = self.config.normalize_winding;
        let triangles: Vec<Triangle2<F>> = valid
            .into_iter()
            .map(|[a, b, c]| {
                let triangle = Triangle2::new(points[a], points[b], points[c]);
                if normalize {
                    triangle.to_ccw()
                } else {
                    triangle
                }
            })
            .collect();

        tracing::debug!(
            triangles = triangles.len(),
            invalidated = stats.triangles_invalidated,
            stripped = stats.sentinel_triangles_stripped,
            "finished Bowyer-Watson triangulation"
        );

        (triangles, stats)
    }
}

/// Finds the boundary of the cavity left by removing `cavity`.
///
/// An edge shared by two cavity triangles is interior; an edge that appears
/// once is on the boundary. Boundary edges keep the order in which they
/// were collected.
fn cavity_boundary<F: Float>(cavity: &[WorkingTriangle], workspace: &Workspace<F>) -> Vec<CavityEdge> {
    let edges: Vec<CavityEdge> = cavity.iter().flat_map(WorkingTriangle::edges).collect();

    edges
        .iter()
        .enumerate()
        .filter(|&(i, &candidate)| {
            !edges
                .iter()
                .enumerate()
                .any(|(j, &other)| i != j && workspace.same_edge(candidate, other))
        })
        .map(|(_, &edge)| edge)
        .collect()
}

/// Computes the Delaunay triangulation of `points` with the default
/// configuration.
///
/// An empty input yields an empty output. Fewer than three points, or points
/// that are all collinear, yield no triangles either.
///
/// # Example
///
/// ```
/// use delaunay2d::triangulation::triangulate;
/// use delaunay2d::Point2;
///
/// // Square with center point
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// let triangles = triangulate(&points);
///
/// // Square with center point should produce 4 triangles
/// assert_eq!(triangles.len(), 4);
/// ```
pub fn triangulate<F: Float>(points: &[Point2<F>]) -> Vec<Triangle2<F>> {
    Triangulator::default().triangulate(points)
}
