// ============================================================================
// Vector Errors
// Typed failures for vector construction and operations
// ============================================================================

use crate::numeric::NumericError;
use std::convert::Infallible;
use std::fmt;

/// Operation that was attempted on a zero-magnitude vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZeroVectorOperation {
    /// Scaling to unit length
    Normalize,
    /// Measuring the angle between two vectors
    Angle,
    /// Projecting onto the direction of a vector
    Projection,
}

/// Errors returned by [`Vector`](super::Vector) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorError {
    /// Construction from an empty coordinate sequence
    EmptyCoordinates,
    /// Binary operation on vectors of different dimension
    DimensionMismatch { expected: usize, found: usize },
    /// Operation undefined for the zero vector
    ZeroVector(ZeroVectorOperation),
    /// Cross-product family operation outside 2 or 3 dimensions
    UnsupportedDimension { dimension: usize },
    /// Coordinate index beyond the vector's dimension
    IndexOutOfBounds { index: usize, dimension: usize },
    /// Underlying decimal arithmetic failed
    Numeric(NumericError),
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::EmptyCoordinates => write!(f, "The coordinates must be nonempty"),
            VectorError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {} coordinates, found {}",
                expected, found
            ),
            VectorError::ZeroVector(ZeroVectorOperation::Normalize) => {
                write!(f, "Cannot normalize the zero vector")
            },
            VectorError::ZeroVector(ZeroVectorOperation::Angle) => {
                write!(f, "Cannot compute an angle with the zero vector")
            },
            VectorError::ZeroVector(ZeroVectorOperation::Projection) => {
                write!(f, "Cannot project onto the zero vector")
            },
            VectorError::UnsupportedDimension { dimension } => {
                write!(f, "Requires 2 or 3 coordinates (got {})", dimension)
            },
            VectorError::IndexOutOfBounds { index, dimension } => write!(
                f,
                "index {} out of bounds for vector of dimension {}",
                index, dimension
            ),
            VectorError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for VectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VectorError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for VectorError {
    fn from(err: NumericError) -> Self {
        VectorError::Numeric(err)
    }
}

impl From<Infallible> for VectorError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;
