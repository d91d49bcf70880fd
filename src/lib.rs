// ============================================================================
// Decimal Vectors Library
// Immutable N-dimensional geometric vectors over significant-digit decimals
// ============================================================================

//! # Decimal Vectors
//!
//! An immutable, arbitrary-dimension geometric vector type with reproducible
//! decimal arithmetic.
//!
//! ## Features
//!
//! - **Significant-digit decimals**: every result is rounded half-to-even to a
//!   compile-time number of significant digits (7 by default)
//! - **Linear algebra**: addition, scaling, magnitude, normalization, dot and
//!   cross products, projections and angles
//! - **Classification**: zero, parallel and orthogonal tests with tolerances
//! - **Typed errors**: dimension mismatches and zero vectors are reported,
//!   never silently truncated
//!
//! ## Example
//!
//! ```rust
//! use decimal_vectors::prelude::*;
//!
//! let a = Vector::new([8.462, 7.893, -8.187]).unwrap();
//! let b = Vector::new([6.984, -5.975, 4.778]).unwrap();
//!
//! let cross = a.cross_product(&b).unwrap();
//! println!("{}", cross); // Vector: (-11.20457, -97.60945, -105.6852)
//!
//! let angle = a.angle(&b, AngleUnit::Degrees).unwrap();
//! println!("Angle: {:.3} degrees", angle);
//!
//! assert!(cross.is_orthogonal_within(&a, Tolerance::try_from(0.01).unwrap()).unwrap());
//! ```

pub mod config;
pub mod geometry;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{AngleUnit, Tolerance};
    pub use crate::geometry::{Vector, VectorError, VectorResult, ZeroVectorOperation};
    pub use crate::numeric::{Coordinate, NumericError, NumericResult, SigDecimal};
}
