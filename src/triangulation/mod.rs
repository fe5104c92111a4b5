//! Delaunay triangulation of point sets.
//!
//! [`triangulate`] runs the incremental Bowyer-Watson algorithm with default
//! settings. [`Triangulator`] takes a [`TriangulationConfig`] for callers that
//! need a different tolerance or consistent winding.

mod config;
mod delaunay;
mod super_triangle;
mod symbolic;

pub use config::TriangulationConfig;
pub use delaunay::{triangulate, InsertionStats, Triangulator};
pub use super_triangle::SuperTriangle;
