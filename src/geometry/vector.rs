// ============================================================================
// Vector
// Immutable N-dimensional vector over significant-digit decimals
// ============================================================================

use super::errors::{VectorError, VectorResult, ZeroVectorOperation};
use crate::numeric::{NumericResult, SigDecimal};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inline storage covers the 2D/3D/4D cases without a heap allocation.
pub(crate) type Coordinates<const P: u32> = SmallVec<[SigDecimal<P>; 4]>;

/// Immutable geometric vector with `P` significant-digit coordinates.
///
/// Every operation returns a new vector; coordinates are never mutated after
/// construction. All arithmetic is rounded to `P` significant digits after
/// each individual operation.
///
/// # Example
/// ```
/// use decimal_vectors::geometry::Vector;
///
/// let a = Vector::new([8.218, -9.341]).unwrap();
/// let b = Vector::new([-1.129, 2.111]).unwrap();
/// assert_eq!(a.plus(&b).unwrap(), Vector::new([7.089, -7.230]).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<SigDecimal<P>>", into = "Vec<SigDecimal<P>>")
)]
pub struct Vector<const P: u32 = 7> {
    coordinates: Coordinates<P>,
}

impl Vector {
    /// Create a default-precision (7 digit) vector.
    ///
    /// Accepts any sequence whose items convert into the coordinate type:
    /// floats, integers, `Decimal`s, strings or coordinates themselves.
    ///
    /// # Errors
    /// - `EmptyCoordinates` if the sequence is empty
    /// - `Numeric` if an item is not a finite decimal
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: TryInto<SigDecimal>,
        VectorError: From<<I::Item as TryInto<SigDecimal>>::Error>,
    {
        Self::from_coordinates(coordinates)
    }
}

impl<const P: u32> Vector<P> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a vector at precision `P`.
    ///
    /// # Errors
    /// Same as [`Vector::new`].
    pub fn from_coordinates<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: TryInto<SigDecimal<P>>,
        VectorError: From<<I::Item as TryInto<SigDecimal<P>>>::Error>,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|c| c.try_into().map_err(VectorError::from))
            .collect::<VectorResult<Coordinates<P>>>()?;
        Self::from_scalars(coordinates)
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize) -> VectorResult<Self> {
        Self::from_scalars(SmallVec::from_elem(SigDecimal::ZERO, dimension))
    }

    pub(crate) fn from_scalars(coordinates: Coordinates<P>) -> VectorResult<Self> {
        if coordinates.is_empty() {
            tracing::debug!("rejected vector with no coordinates");
            return Err(VectorError::EmptyCoordinates);
        }
        tracing::trace!(dimension = coordinates.len(), "vector constructed");
        Ok(Self { coordinates })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of coordinates (always at least 1).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn coordinates(&self) -> &[SigDecimal<P>] {
        &self.coordinates
    }

    /// Coordinate at `index`.
    ///
    /// # Errors
    /// Returns `IndexOutOfBounds` if `index >= dimension()`.
    pub fn coordinate(&self, index: usize) -> VectorResult<SigDecimal<P>> {
        self.coordinates
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfBounds {
                index,
                dimension: self.dimension(),
            })
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, SigDecimal<P>> {
        self.coordinates.iter()
    }

    /// Fail unless `other` has the same dimension as `self`.
    pub(crate) fn ensure_same_dimension(
        &self,
        other: &Self,
        operation: &'static str,
    ) -> VectorResult<()> {
        if self.dimension() != other.dimension() {
            tracing::debug!(
                operation,
                expected = self.dimension(),
                found = other.dimension(),
                "dimension mismatch"
            );
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, operation: &'static str, op: F) -> VectorResult<Self>
    where
        F: Fn(SigDecimal<P>, SigDecimal<P>) -> NumericResult<SigDecimal<P>>,
    {
        self.ensure_same_dimension(other, operation)?;
        let coordinates = self
            .iter()
            .zip(other.iter())
            .map(|(&x, &y)| op(x, y).map_err(VectorError::from))
            .collect::<VectorResult<Coordinates<P>>>()?;
        Self::from_scalars(coordinates)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Element-wise sum.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the dimensions differ.
    pub fn plus(&self, v: &Self) -> VectorResult<Self> {
        self.zip_with(v, "plus", SigDecimal::checked_add)
    }

    /// Element-wise difference.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the dimensions differ.
    pub fn minus(&self, v: &Self) -> VectorResult<Self> {
        self.zip_with(v, "minus", SigDecimal::checked_sub)
    }

    /// Multiply every coordinate by `k`.
    ///
    /// # Errors
    /// - `Numeric(InvalidInput)` if `k` is not a finite decimal
    /// - `Numeric(Overflow)` if a product exceeds `Decimal::MAX` (about 7.9e28),
    ///   e.g. `1e15 * 1e14`
    pub fn times_scalar<K>(&self, k: K) -> VectorResult<Self>
    where
        K: TryInto<SigDecimal<P>>,
        VectorError: From<K::Error>,
    {
        self.scale(k.try_into()?)
    }

    pub(crate) fn scale(&self, k: SigDecimal<P>) -> VectorResult<Self> {
        let coordinates = self
            .iter()
            .map(|&x| k.checked_mul(x).map_err(VectorError::from))
            .collect::<VectorResult<Coordinates<P>>>()?;
        Self::from_scalars(coordinates)
    }

    // ========================================================================
    // Magnitude and Direction
    // ========================================================================

    /// Power-of-ten shift that brings the largest coordinate into [1, 10).
    /// `None` for the zero vector.
    pub(crate) fn normalizing_shift(&self) -> Option<i32> {
        self.iter()
            .filter_map(|x| x.exponent())
            .max()
            .map(|exponent| -exponent)
    }

    /// Coordinates multiplied by `10^shift`.
    pub(crate) fn shifted(&self, shift: i32) -> VectorResult<Coordinates<P>> {
        self.iter()
            .map(|x| x.scale_by_power_of_ten(shift).map_err(VectorError::from))
            .collect()
    }

    fn root_sum_of_squares(coordinates: &[SigDecimal<P>]) -> VectorResult<SigDecimal<P>> {
        let sum_of_squares = coordinates
            .iter()
            .try_fold(SigDecimal::ZERO, |acc, &x| acc.checked_add(x.checked_mul(x)?))?;
        Ok(sum_of_squares.sqrt()?)
    }

    /// Euclidean norm.
    ///
    /// The squares are summed after shifting the largest coordinate into
    /// [1, 10), so coordinates from 1e-28 up to the decimal range never
    /// underflow or overflow part way. Shifting by a power of ten leaves the
    /// rounding unchanged.
    pub fn magnitude(&self) -> VectorResult<SigDecimal<P>> {
        let Some(shift) = self.normalizing_shift() else {
            return Ok(SigDecimal::ZERO);
        };
        let root = Self::root_sum_of_squares(&self.shifted(shift)?)?;
        Ok(root.scale_by_power_of_ten(-shift)?)
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    /// Returns `ZeroVector(Normalize)` if every coordinate is zero.
    pub fn normalize(&self) -> VectorResult<Self> {
        let Some(shift) = self.normalizing_shift() else {
            tracing::debug!(dimension = self.dimension(), "cannot normalize the zero vector");
            return Err(VectorError::ZeroVector(ZeroVectorOperation::Normalize));
        };
        let shifted = Self {
            coordinates: self.shifted(shift)?,
        };
        // The largest shifted coordinate lies in [1, 10), so this is at least 1
        let magnitude = Self::root_sum_of_squares(shifted.coordinates())?;
        shifted.scale(SigDecimal::ONE.checked_div(magnitude)?)
    }

    /// Sum of element-wise products.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the dimensions differ.
    pub fn dot_product(&self, v: &Self) -> VectorResult<SigDecimal<P>> {
        self.ensure_same_dimension(v, "dot_product")?;
        let dot = self
            .iter()
            .zip(v.iter())
            .try_fold(SigDecimal::ZERO, |acc, (&x, &y)| {
                acc.checked_add(x.checked_mul(y)?)
            })?;
        Ok(dot)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const P: u32> Neg for &Vector<P> {
    type Output = Vector<P>;

    fn neg(self) -> Self::Output {
        Vector {
            coordinates: self.iter().map(|&x| -x).collect(),
        }
    }
}

impl<const P: u32> Neg for Vector<P> {
    type Output = Vector<P>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a, const P: u32> IntoIterator for &'a Vector<P> {
    type Item = &'a SigDecimal<P>;
    type IntoIter = std::slice::Iter<'a, SigDecimal<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl<const P: u32> IntoIterator for Vector<P> {
    type Item = SigDecimal<P>;
    type IntoIter = smallvec::IntoIter<[SigDecimal<P>; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.into_iter()
    }
}

impl<const P: u32> AsRef<[SigDecimal<P>]> for Vector<P> {
    fn as_ref(&self) -> &[SigDecimal<P>] {
        &self.coordinates
    }
}

impl<const P: u32> TryFrom<Vec<SigDecimal<P>>> for Vector<P> {
    type Error = VectorError;

    fn try_from(coordinates: Vec<SigDecimal<P>>) -> Result<Self, Self::Error> {
        Self::from_scalars(SmallVec::from_vec(coordinates))
    }
}

impl<const P: u32> From<Vector<P>> for Vec<SigDecimal<P>> {
    fn from(vector: Vector<P>) -> Self {
        vector.coordinates.into_vec()
    }
}

impl<const P: u32> fmt::Display for Vector<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, coordinate) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coordinate)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn v(coordinates: &[f64]) -> Vector {
        Vector::new(coordinates.iter().copied()).unwrap()
    }

    fn sd(s: &str) -> SigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_construction() {
        let a = v(&[1.0, 2.0, 3.0]);
        assert_eq!(a.dimension(), 3);
        assert_eq!(a.coordinates(), &[sd("1"), sd("2"), sd("3")]);
    }

    #[test]
    fn test_construction_from_mixed_sources() {
        let from_ints = Vector::new([1, -2]).unwrap();
        let from_strs = Vector::new(["1.0", "-2.00"]).unwrap();
        let from_scalars = Vector::new([sd("1"), sd("-2")]).unwrap();
        assert_eq!(from_ints, from_strs);
        assert_eq!(from_ints, from_scalars);
    }

    #[test]
    fn test_construction_rounds_coordinates() {
        let a = Vector::new([std::f64::consts::PI]).unwrap();
        assert_eq!(a.coordinate(0).unwrap().to_string(), "3.141593");
    }

    #[test]
    fn test_empty_coordinates() {
        let empty: [f64; 0] = [];
        assert_eq!(Vector::new(empty), Err(VectorError::EmptyCoordinates));
        assert_eq!(Vector::<7>::zero(0), Err(VectorError::EmptyCoordinates));
    }

    #[test]
    fn test_invalid_coordinate() {
        assert_eq!(
            Vector::new([1.0, f64::NAN]),
            Err(VectorError::Numeric(NumericError::InvalidInput))
        );
    }

    #[test]
    fn test_coordinate_access() {
        let a = v(&[1.5, -2.5]);
        assert_eq!(a.coordinate(1).unwrap(), sd("-2.5"));
        assert_eq!(
            a.coordinate(2),
            Err(VectorError::IndexOutOfBounds {
                index: 2,
                dimension: 2
            })
        );
    }

    #[test]
    fn test_iteration_is_restartable() {
        let a = v(&[1.0, 2.0, 3.0]);
        let first: Vec<_> = a.iter().copied().collect();
        let second: Vec<_> = (&a).into_iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);

        let owned: Vec<SigDecimal> = a.into_iter().collect();
        assert_eq!(owned, first);
    }

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(v(&[1.0, 2.0]), v(&[1.0, 2.0]));
        assert_ne!(v(&[1.0, 2.0]), v(&[1.0, 2.000001]));
        assert_ne!(v(&[1.0, 2.0]), v(&[1.0, 2.0, 0.0]));
    }

    #[test]
    fn test_plus_and_minus() {
        let sum = v(&[8.218, -9.341]).plus(&v(&[-1.129, 2.111])).unwrap();
        assert_eq!(sum, v(&[7.089, -7.230]));

        let diff = v(&[7.119, 8.215]).minus(&v(&[-8.223, 0.878])).unwrap();
        assert_eq!(diff, v(&[15.342, 7.337]));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = v(&[1.0, 2.0]);
        let b = v(&[1.0, 2.0, 3.0]);
        let expected = Err(VectorError::DimensionMismatch {
            expected: 2,
            found: 3,
        });
        assert_eq!(a.plus(&b), expected);
        assert_eq!(a.minus(&b), expected);
        assert!(matches!(
            a.dot_product(&b),
            Err(VectorError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn test_times_scalar() {
        let product = v(&[1.671, -1.012, -0.318]).times_scalar(7.41).unwrap();
        assert_eq!(product, v(&[12.38211, -7.49892, -2.35638]));

        let a = v(&[3.0, -4.0]);
        assert_eq!(a.times_scalar(1).unwrap(), a);
        assert_eq!(a.times_scalar(0).unwrap(), Vector::zero(2).unwrap());
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(v(&[3.0, 4.0]).magnitude().unwrap(), sd("5"));
        assert_eq!(v(&[-0.221, 7.437]).magnitude().unwrap(), sd("7.440283"));
        assert_eq!(v(&[8.813, -1.331, -6.247]).magnitude().unwrap(), sd("10.88419"));
        assert!(Vector::<7>::zero(3).unwrap().magnitude().unwrap().is_zero());
    }

    #[test]
    fn test_normalize() {
        let unit = v(&[5.581, -2.136]).normalize().unwrap();
        assert_eq!(unit, v(&[0.9339351, -0.3574423]));

        let unit = v(&[1.996, 3.108, -4.554]).normalize().unwrap();
        assert_eq!(unit, v(&[0.3404012, 0.5300436, -0.7766469]));
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(
            Vector::<7>::zero(2).unwrap().normalize(),
            Err(VectorError::ZeroVector(ZeroVectorOperation::Normalize))
        );
    }

    #[test]
    fn test_tiny_vectors_are_not_zero() {
        let a = Vector::new(["1e-15", "0"]).unwrap();
        assert_eq!(a.magnitude().unwrap(), sd("1e-15"));
        assert_eq!(a.normalize().unwrap(), v(&[1.0, 0.0]));

        let b = Vector::new(["3e-15", "4e-15"]).unwrap();
        assert_eq!(b.magnitude().unwrap(), sd("5e-15"));
        assert_eq!(b.normalize().unwrap(), v(&[0.6, 0.8]));
    }

    #[test]
    fn test_large_vectors() {
        let a = Vector::new(["1e15", "0"]).unwrap();
        assert_eq!(a.magnitude().unwrap(), sd("1e15"));
        assert_eq!(a.normalize().unwrap(), v(&[1.0, 0.0]));

        let b = Vector::new(["3e20", "-4e20"]).unwrap();
        assert_eq!(b.magnitude().unwrap(), sd("5e20"));
        assert_eq!(b.normalize().unwrap(), v(&[0.6, -0.8]));
    }

    #[test]
    fn test_magnitude_is_scale_invariant() {
        // Shifting by a power of ten shifts the 7 digit result exactly
        let a = Vector::new(["-0.221e-12", "7.437e-12"]).unwrap();
        assert_eq!(a.magnitude().unwrap(), sd("7.440283e-12"));
    }

    #[test]
    fn test_times_scalar_overflow() {
        let a = Vector::new(["1e15"]).unwrap();
        assert_eq!(
            a.times_scalar(1e14),
            Err(VectorError::Numeric(NumericError::Overflow))
        );
        assert_eq!(a.times_scalar(1e13).unwrap(), Vector::new(["1e28"]).unwrap());
    }

    #[test]
    fn test_dot_product() {
        let dot = v(&[7.887, 4.138]).dot_product(&v(&[-8.802, 6.776])).unwrap();
        assert_eq!(dot, sd("-41.38228"));

        let dot = v(&[-5.955, -4.904, -1.874])
            .dot_product(&v(&[-4.496, -8.755, 7.103]))
            .unwrap();
        assert_eq!(dot, sd("56.39718"));
    }

    #[test]
    fn test_negation() {
        let a = v(&[1.5, -2.0, 0.0]);
        assert_eq!(-&a, v(&[-1.5, 2.0, 0.0]));
        assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn test_vec_conversions() {
        let a = v(&[1.0, 2.0]);
        let raw: Vec<SigDecimal> = a.clone().into();
        assert_eq!(Vector::try_from(raw).unwrap(), a);
        assert_eq!(
            Vector::<7>::try_from(Vec::new()),
            Err(VectorError::EmptyCoordinates)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(v(&[8.218, -9.341]).to_string(), "Vector: (8.218, -9.341)");
        assert_eq!(Vector::new([1, 2, 3]).unwrap().to_string(), "Vector: (1, 2, 3)");
    }

    #[test]
    fn test_custom_precision() {
        let a = Vector::<3>::from_coordinates([1.2345, 2.0]).unwrap();
        assert_eq!(a.to_string(), "Vector: (1.23, 2)");
        assert_eq!(a.magnitude().unwrap().to_string(), "2.35");
    }
}
