// ============================================================================
// Geometry Module
// The immutable decimal Vector and its operation set
// ============================================================================

mod classification;
mod cross;
mod errors;
mod projection;
mod vector;

pub use errors::{VectorError, VectorResult, ZeroVectorOperation};
pub use vector::Vector;
