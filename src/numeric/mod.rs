// ============================================================================
// Numeric Module
// Significant-digit decimal arithmetic for reproducible geometry
// ============================================================================
//
// This module provides:
// - SigDecimal<DIGITS>: Decimal rounded to DIGITS significant digits
// - NumericError: Error types for arithmetic operations
// - Coordinate: the default-precision scalar used by vectors
//
// Design principles:
// - No binary floating-point in stored values
// - Every result is rounded half-to-even to DIGITS significant digits
// - All arithmetic returns Result (no panics)
// - Precision is a const generic, never process-wide state

mod errors;
mod sig_decimal;

pub use errors::{NumericError, NumericResult};
pub use sig_decimal::{Coordinate, SigDecimal, DEFAULT_DIGITS};
pub(crate) use sig_decimal::{leading_exponent, scale_by_power_of_ten};
