//! delaunay2d - 2D Delaunay triangulation
//!
//! Triangulates scattered points with the incremental Bowyer-Watson
//! algorithm. Every geometric comparison takes an explicit tolerance, and
//! degenerate input (duplicates, collinear runs) is handled by a documented
//! policy rather than by whatever the floating-point arithmetic happens to
//! produce.
//!
//! ```
//! use delaunay2d::{triangulate, Point2};
//!
//! let points = [Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0), Point2::new(0.5, 1.0)];
//! let triangles = triangulate(&points);
//! assert_eq!(triangles.len(), 1);
//! ```

pub mod bounds;
pub mod error;
pub mod hull;
pub mod primitives;
pub mod tolerance;
pub mod triangulation;

pub use error::DelaunayError;
pub use primitives::{Circle2, Edge2, Point2, Triangle2, Vec2};
pub use tolerance::{orient2d, Orientation};
pub use triangulation::{triangulate, TriangulationConfig, Triangulator};
