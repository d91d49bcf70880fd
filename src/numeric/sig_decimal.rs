// ============================================================================
// Significant-Digit Decimal
// Decimal scalar rounded to a compile-time number of significant digits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Significant digits used when no precision is named.
pub const DEFAULT_DIGITS: u32 = 7;

/// Largest number of decimal places a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Decimal number rounded to `DIGITS` significant digits.
///
/// Every constructor and every arithmetic result is rounded half-to-even to
/// `DIGITS` significant digits, so a chain of operations rounds exactly like a
/// decimal context with that precision. The precision is part of the type:
/// values of different precisions cannot be mixed.
///
/// Values range over `Decimal`: magnitudes up to `Decimal::MAX` (about
/// 7.9e28) and down to 1e-28. Results beyond `Decimal::MAX` fail with
/// `Overflow`, and results below 1e-28 round to zero.
///
/// # Type Parameter
/// - `DIGITS`: Significant digits (1-28). Default is 7.
///
/// # Example
/// ```
/// use decimal_vectors::numeric::SigDecimal;
///
/// let x: SigDecimal = "3.14159265".parse().unwrap();
/// assert_eq!(x.to_string(), "3.141593");
///
/// let y = x.checked_mul(SigDecimal::try_from(2).unwrap()).unwrap();
/// assert_eq!(y.to_string(), "6.283186");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Decimal", into = "Decimal"))]
#[repr(transparent)]
pub struct SigDecimal<const DIGITS: u32 = 7>(Decimal);

/// Scalar type of default-precision vectors.
pub type Coordinate = SigDecimal<DEFAULT_DIGITS>;

impl<const D: u32> SigDecimal<D> {
    const VALID_DIGITS: () = assert!(D >= 1 && D <= 28, "significant digits must be in 1..=28");

    /// Zero value
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One (1)
    pub const ONE: Self = Self(Decimal::ONE);

    /// Number of significant digits kept by this type.
    pub const DIGITS: u32 = D;

    // ========================================================================
    // Construction
    // ========================================================================

    fn round(value: Decimal) -> NumericResult<Self> {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_DIGITS;
        if value.is_zero() {
            return Ok(Self::ZERO);
        }
        value
            .round_sf_with_strategy(D, RoundingStrategy::MidpointNearestEven)
            .map(Self)
            .ok_or(NumericError::PrecisionLoss)
    }

    /// Create from a `rust_decimal::Decimal`, rounding to `DIGITS`.
    #[inline]
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        Self::round(value)
    }

    /// Create from a binary float.
    ///
    /// The float is first converted to its closest short decimal form
    /// (`0.1` becomes `0.1`, not the exact binary expansion), then rounded.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN or infinities
    /// - `Overflow` if the magnitude exceeds the decimal range
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        Decimal::from_f64(value)
            .ok_or(NumericError::Overflow)
            .and_then(Self::round)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the underlying decimal value.
    #[inline]
    pub const fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Convert to a binary float (for transcendental functions).
    #[inline]
    pub fn to_f64(self) -> NumericResult<f64> {
        self.0.to_f64().ok_or(NumericError::Overflow)
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        !self.0.is_zero() && self.0.is_sign_positive()
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        !self.0.is_zero() && self.0.is_sign_negative()
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Power of ten of the leading digit, `floor(log10(|self|))`.
    /// `None` for zero.
    #[inline]
    pub fn exponent(self) -> Option<i32> {
        leading_exponent(self.0)
    }

    /// Multiply by `10^exponent`.
    ///
    /// The shift is exact while the result stays within 1e-28 of precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    pub fn scale_by_power_of_ten(self, exponent: i32) -> NumericResult<Self> {
        scale_by_power_of_ten(self.0, exponent).and_then(Self::round)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition, rounded to `DIGITS`.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .ok_or(NumericError::Overflow)
            .and_then(Self::round)
    }

    /// Checked subtraction, rounded to `DIGITS`.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .ok_or(NumericError::Overflow)
            .and_then(Self::round)
    }

    /// Checked multiplication, rounded to `DIGITS`.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs.0)
            .ok_or(NumericError::Overflow)
            .and_then(Self::round)
    }

    /// Checked division, rounded to `DIGITS`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the result is out of range
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        self.0
            .checked_div(rhs.0)
            .ok_or(NumericError::Overflow)
            .and_then(Self::round)
    }

    /// Square root, rounded to `DIGITS`.
    ///
    /// # Errors
    /// Returns `InvalidInput` for negative values.
    pub fn sqrt(self) -> NumericResult<Self> {
        if self.is_negative() {
            return Err(NumericError::InvalidInput);
        }
        self.0
            .sqrt()
            .ok_or(NumericError::InvalidInput)
            .and_then(Self::round)
    }
}

// ============================================================================
// Powers of Ten
// ============================================================================

/// `floor(log10(|value|))`, or `None` for zero.
pub(crate) fn leading_exponent(value: Decimal) -> Option<i32> {
    if value.is_zero() {
        return None;
    }
    let digits = value.mantissa().unsigned_abs().ilog10() as i32;
    Some(digits - value.scale() as i32)
}

/// `value * 10^exponent`. Shifts up to 28 places in either direction.
pub(crate) fn scale_by_power_of_ten(value: Decimal, exponent: i32) -> NumericResult<Decimal> {
    if value.is_zero() || exponent == 0 {
        return Ok(value);
    }
    let places = exponent.unsigned_abs();
    if places > MAX_SCALE {
        return Err(if exponent > 0 {
            NumericError::Overflow
        } else {
            NumericError::PrecisionLoss
        });
    }
    let factor = if exponent > 0 {
        Decimal::try_from_i128_with_scale(10_i128.pow(places), 0)
    } else {
        Decimal::try_new(1, places)
    }
    .map_err(|_| NumericError::Overflow)?;

    value.checked_mul(factor).ok_or(NumericError::Overflow)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u32> Neg for SigDecimal<D> {
    type Output = Self;

    // Rounding is symmetric, so negation never needs to re-round.
    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<const D: u32> From<SigDecimal<D>> for Decimal {
    #[inline]
    fn from(value: SigDecimal<D>) -> Self {
        value.0
    }
}

impl<const D: u32> TryFrom<Decimal> for SigDecimal<D> {
    type Error = NumericError;

    #[inline]
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

macro_rules! impl_try_from_integer {
    ($($int:ty),*) => {
        $(
            impl<const D: u32> TryFrom<$int> for SigDecimal<D> {
                type Error = NumericError;

                #[inline]
                fn try_from(value: $int) -> Result<Self, Self::Error> {
                    Self::from_decimal(Decimal::from(value))
                }
            }
        )*
    };
}

impl_try_from_integer!(i32, i64, u32, u64);

impl<const D: u32> TryFrom<f64> for SigDecimal<D> {
    type Error = NumericError;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl<const D: u32> TryFrom<f32> for SigDecimal<D> {
    type Error = NumericError;

    #[inline]
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_f64(f64::from(value))
    }
}

impl<'a, const D: u32> TryFrom<&'a str> for SigDecimal<D> {
    type Error = NumericError;

    #[inline]
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u32> fmt::Debug for SigDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigDecimal<{}>({})", D, self)
    }
}

impl<const D: u32> fmt::Display for SigDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.normalize(), f)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u32> FromStr for SigDecimal<D> {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.001" -> -0.001
    /// - "1e-10" -> 0.0000000001
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let parsed = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| NumericError::InvalidInput)?;

        Self::round(parsed)
    }
}

// ============================================================================
// Tests
// ============================================================================
