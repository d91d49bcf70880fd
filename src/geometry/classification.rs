// ============================================================================
// Angle and Classification
// Angles between vectors and zero / parallel / orthogonal tests
// ============================================================================

use super::errors::{VectorError, VectorResult, ZeroVectorOperation};
use super::vector::Vector;
use crate::config::{AngleUnit, Tolerance};
use crate::numeric::{leading_exponent, scale_by_power_of_ten, NumericError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

/// `acos` of a cosine that rounding may have pushed slightly outside [-1, 1].
#[inline]
fn clamped_acos(cosine: f64) -> f64 {
    cosine.clamp(-1.0, 1.0).acos()
}

fn exact(value: Option<Decimal>) -> Result<Decimal, NumericError> {
    value.ok_or(NumericError::Overflow)
}

/// `sqrt(Σ x²)` at full decimal precision, summed with the largest value
/// shifted into [1, 10).
fn euclidean_norm(values: &[Decimal]) -> Result<Decimal, NumericError> {
    let Some(exponent) = values.iter().filter_map(|&x| leading_exponent(x)).max() else {
        return Ok(Decimal::ZERO);
    };
    let mut sum = Decimal::ZERO;
    for &x in values {
        let x = scale_by_power_of_ten(x, -exponent)?;
        sum = exact(sum.checked_add(exact(x.checked_mul(x))?))?;
    }
    scale_by_power_of_ten(exact(sum.sqrt())?, exponent)
}

impl<const P: u32> Vector<P> {
    /// Angle between `self` and `v`, computed as
    /// `acos(normalize(self) · normalize(v))`.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the dimensions differ
    /// - `ZeroVector(Angle)` if either vector is the zero vector
    pub fn angle(&self, v: &Self, unit: AngleUnit) -> VectorResult<f64> {
        self.ensure_same_dimension(v, "angle")?;

        let as_angle_error = |err| match err {
            VectorError::ZeroVector(_) => VectorError::ZeroVector(ZeroVectorOperation::Angle),
            other => other,
        };
        let u = self.normalize().map_err(as_angle_error)?;
        let w = v.normalize().map_err(as_angle_error)?;

        let cosine = u.dot_product(&w)?.to_f64()?;
        Ok(unit.convert(clamped_acos(cosine)))
    }

    /// True iff the magnitude is below the default tolerance (1e-10).
    pub fn is_zero(&self) -> VectorResult<bool> {
        self.is_zero_within(Tolerance::DEFAULT)
    }

    /// True iff the magnitude is below `tolerance`.
    pub fn is_zero_within(&self, tolerance: Tolerance) -> VectorResult<bool> {
        Ok(self.magnitude()?.as_decimal() < tolerance.value())
    }

    /// True iff `|self · v|` is below the default tolerance (1e-10).
    pub fn is_orthogonal(&self, v: &Self) -> VectorResult<bool> {
        self.is_orthogonal_within(v, Tolerance::DEFAULT)
    }

    /// True iff `|self · v|` is below `tolerance`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the dimensions differ.
    pub fn is_orthogonal_within(&self, v: &Self, tolerance: Tolerance) -> VectorResult<bool> {
        Ok(self.dot_product(v)?.abs().as_decimal() < tolerance.value())
    }

    /// True iff either vector is zero or the angle between them is 0 or π,
    /// within the default tolerance (1e-10).
    pub fn is_parallel(&self, v: &Self) -> VectorResult<bool> {
        self.is_parallel_within(v, Tolerance::DEFAULT)
    }

    /// True iff either vector is zero or the angle between them lies within
    /// `tolerance` of 0 or π.
    ///
    /// The deviation from 0 or π is `asin(sin θ)`, with the sine measured at
    /// the full working precision of the underlying decimal rather than at
    /// `P` digits. Rounding the unit vectors to `P` digits would move the
    /// angle of exactly parallel inputs by up to `sqrt(2 * 10^(1-P))` radians.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the dimensions differ.
    pub fn is_parallel_within(&self, v: &Self, tolerance: Tolerance) -> VectorResult<bool> {
        self.ensure_same_dimension(v, "is_parallel")?;

        if self.is_zero_within(tolerance)? || v.is_zero_within(tolerance)? {
            return Ok(true);
        }

        let deviation = self.working_sine(v)?.min(1.0).asin();
        Ok(deviation <= tolerance.as_f64())
    }

    /// Sine of the angle to `v` from Lagrange's identity,
    /// `|a|²|b|² - (a·b)² = Σ_{i<j} (a_i b_j - a_j b_i)²`, in unrounded
    /// decimal arithmetic. Each vector is first shifted so its largest
    /// coordinate lies in [1, 10).
    fn working_sine(&self, v: &Self) -> VectorResult<f64> {
        let a = self.working_coordinates()?;
        let b = v.working_coordinates()?;

        let mut wedge = Vec::with_capacity(a.len() * a.len().saturating_sub(1) / 2);
        for (i, (&ai, &bi)) in a.iter().zip(&b).enumerate() {
            for (&aj, &bj) in a[i + 1..].iter().zip(&b[i + 1..]) {
                let term = exact(ai.checked_mul(bj))?.checked_sub(exact(aj.checked_mul(bi))?);
                wedge.push(exact(term)?);
            }
        }

        let denominator = exact(euclidean_norm(&a)?.checked_mul(euclidean_norm(&b)?))?;
        if denominator.is_zero() {
            // The zero vector is parallel to everything
            return Ok(0.0);
        }

        let sine = exact(euclidean_norm(&wedge)?.checked_div(denominator))?;
        Ok(sine.to_f64().ok_or(NumericError::Overflow)?)
    }

    fn working_coordinates(&self) -> VectorResult<Vec<Decimal>> {
        let shift = self.normalizing_shift().unwrap_or(0);
        Ok(self
            .shifted(shift)?
            .iter()
            .map(|x| x.as_decimal())
            .collect())
    }
}
