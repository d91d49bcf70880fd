// ============================================================================
// Geometry Configuration
// Tolerances and angle units used by vector classification
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Tolerance
// ============================================================================

/// Epsilon below which a quantity is treated as zero.
///
/// Used for zero-vector detection, orthogonality (|u·v|) and parallelism
/// (angle distance from 0 or π). Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Decimal", into = "Decimal"))]
pub struct Tolerance(Decimal);

impl Tolerance {
    /// 1e-10
    pub const DEFAULT: Self = Self(Decimal::from_parts(1, 0, 0, false, 10));

    /// Create a tolerance from a decimal epsilon.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `value` is negative.
    pub fn new(value: Decimal) -> NumericResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(NumericError::InvalidInput);
        }
        Ok(Self(value))
    }

    /// The epsilon as a decimal.
    #[inline]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// The epsilon as a binary float, for comparing angles.
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<Decimal> for Tolerance {
    type Error = NumericError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = NumericError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        let decimal = Decimal::from_f64(value).ok_or(NumericError::Overflow)?;
        Self::new(decimal)
    }
}

impl From<Tolerance> for Decimal {
    fn from(value: Tolerance) -> Self {
        value.0
    }
}

// ============================================================================
// Angle Unit
// ============================================================================

/// Unit in which angles are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    /// Radians in `[0, π]`
    #[default]
    Radians,
    /// Degrees in `[0, 180]`
    Degrees,
}

impl AngleUnit {
    /// Express an angle given in radians in this unit.
    #[inline]
    pub fn convert(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }
}
