//! Tunable parameters for the triangulation engine.

use crate::error::DelaunayError;
use num_traits::Float;

/// Configuration for [`Triangulator`](super::Triangulator).
///
/// # Example
///
/// ```
/// use delaunay2d::triangulation::TriangulationConfig;
///
/// let config = TriangulationConfig::<f64>::default()
///     .with_epsilon(1e-10)
///     .with_normalized_winding(true);
///
/// assert!(config.validate().is_ok());
/// assert!(config.with_epsilon(-1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangulationConfig<F> {
    /// Tolerance used by every geometric comparison, relative to the input.
    ///
    /// Points are compared after mapping the input into the unit frame of
    /// its bounding box, so two points closer than `epsilon` times the larger
    /// side of the box are treated as one. Triangles are degenerate when
    /// their area falls below `epsilon` times their squared longest edge.
    pub epsilon: F,
    /// Emit every triangle in counter-clockwise order.
    pub normalize_winding: bool,
}

impl<F: Float> TriangulationConfig<F> {
    /// Sets the comparison tolerance.
    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Enables or disables counter-clockwise output winding.
    pub fn with_normalized_winding(mut self, normalize: bool) -> Self {
        self.normalize_winding = normalize;
        self
    }

    /// Checks that the parameters describe a usable configuration.
    pub fn validate(&self) -> Result<(), DelaunayError> {
        if !self.epsilon.is_finite() || self.epsilon < F::zero() {
            return Err(DelaunayError::InvalidTolerance);
        }
        Ok(())
    }
}

impl<F: Float> Default for TriangulationConfig<F> {
    /// `epsilon` defaults to the square root of machine epsilon: about
    /// `1.5e-8` for `f64` and `3.5e-4` for `f32`.
    fn default() -> Self {
        Self {
            epsilon: F::epsilon().sqrt(),
            normalize_winding: false,
        }
    }
}
