//! Scalar operations trait.

use crate::error::Result;
use crate::matrix::Matrix;

/// Matrix-scalar operations, applied to every element with wraparound
pub trait ScalarOps {
    /// Add a scalar to every element
    fn add_scalar(&self, a: &Matrix, scalar: u32) -> Result<Matrix>;

    /// Multiply every element by a scalar
    fn mul_scalar(&self, a: &Matrix, scalar: u32) -> Result<Matrix>;
}
