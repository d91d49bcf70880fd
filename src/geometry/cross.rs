// ============================================================================
// Cross Product
// 3D cross product (2D inputs embedded in the z = 0 plane) and derived areas
// ============================================================================

use super::errors::{VectorError, VectorResult};
use super::vector::{Coordinates, Vector};
use crate::numeric::SigDecimal;
use rust_decimal::Decimal;
use smallvec::smallvec;

impl<const P: u32> Vector<P> {
    /// Coordinates embedded in R3, appending z = 0 to a 2D vector.
    /// Callers must have checked the dimension is 2 or 3.
    fn embedded_in_r3(&self) -> [SigDecimal<P>; 3] {
        let c = self.coordinates();
        [c[0], c[1], c.get(2).copied().unwrap_or(SigDecimal::ZERO)]
    }

    fn cross_operands(&self, v: &Self) -> VectorResult<([SigDecimal<P>; 3], [SigDecimal<P>; 3])> {
        for dimension in [self.dimension(), v.dimension()] {
            if dimension != 2 && dimension != 3 {
                tracing::debug!(dimension, "cross product requires 2 or 3 coordinates");
                return Err(VectorError::UnsupportedDimension { dimension });
            }
        }
        self.ensure_same_dimension(v, "cross_product")?;
        Ok((self.embedded_in_r3(), v.embedded_in_r3()))
    }

    /// Cross product. Two 2D vectors are embedded in the z = 0 plane first,
    /// so the result is always 3-dimensional.
    ///
    /// # Errors
    /// - `UnsupportedDimension` if either vector is not 2D or 3D
    /// - `DimensionMismatch` if one is 2D and the other 3D
    pub fn cross_product(&self, v: &Self) -> VectorResult<Self> {
        let ([x1, y1, z1], [x2, y2, z2]) = self.cross_operands(v)?;

        let x3 = y1.checked_mul(z2)?.checked_sub(y2.checked_mul(z1)?)?;
        let y3 = -(x1.checked_mul(z2)?.checked_sub(x2.checked_mul(z1)?)?);
        let z3 = x1.checked_mul(y2)?.checked_sub(x2.checked_mul(y1)?)?;

        let coordinates: Coordinates<P> = smallvec![x3, y3, z3];
        Self::from_scalars(coordinates)
    }

    /// Area of the parallelogram spanned by `self` and `v`.
    pub fn area_of_parallelogram(&self, v: &Self) -> VectorResult<SigDecimal<P>> {
        self.cross_product(v)?.magnitude()
    }

    /// Area of the triangle spanned by `self` and `v`.
    pub fn area_of_triangle(&self, v: &Self) -> VectorResult<SigDecimal<P>> {
        let half = SigDecimal::from_decimal(Decimal::new(5, 1))?;
        Ok(self.area_of_parallelogram(v)?.checked_mul(half)?)
    }
}
