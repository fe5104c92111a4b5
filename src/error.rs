//! Error types for checked triangulation.

use thiserror::Error;

/// Errors reported by [`Triangulator::try_triangulate`](crate::triangulation::Triangulator::try_triangulate)
/// and [`TriangulationConfig::validate`](crate::triangulation::TriangulationConfig::validate).
///
/// The unchecked entry points never produce these; they accept any input and
/// degrade numerically instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DelaunayError {
    /// An input point has a NaN or infinite coordinate.
    #[error("input point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input slice.
        index: usize,
    },

    /// The configured tolerance is negative or not finite.
    #[error("tolerance must be finite and non-negative")]
    InvalidTolerance,
}
