// ============================================================================
// Projection
// Decomposition into components parallel and orthogonal to a direction
// ============================================================================

use super::errors::{VectorError, VectorResult, ZeroVectorOperation};
use super::vector::Vector;

impl<const P: u32> Vector<P> {
    /// Orthogonal projection of `self` onto the direction of `v`:
    /// `(self · û) û` with `û = normalize(v)`.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the dimensions differ
    /// - `ZeroVector(Projection)` if `v` is the zero vector
    pub fn component_parallel(&self, v: &Self) -> VectorResult<Self> {
        self.ensure_same_dimension(v, "component_parallel")?;

        let direction = v.normalize().map_err(|err| match err {
            VectorError::ZeroVector(_) => {
                VectorError::ZeroVector(ZeroVectorOperation::Projection)
            },
            other => other,
        })?;
        let weight = self.dot_product(&direction)?;
        direction.scale(weight)
    }

    /// Component of `self` orthogonal to `v`: `self - component_parallel(v)`.
    ///
    /// # Errors
    /// Same as [`Vector::component_parallel`].
    pub fn component_orthogonal(&self, v: &Self) -> VectorResult<Self> {
        let projection = self.component_parallel(v)?;
        self.minus(&projection)
    }
}
