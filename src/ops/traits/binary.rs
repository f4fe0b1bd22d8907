//! Element-wise binary operations trait.

use crate::error::Result;
use crate::matrix::Matrix;

/// Element-wise operations between two matrices
pub trait BinaryOps {
    /// Element-wise sum `a[i] + b[i]`, wrapping mod 2^32
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if either operand's order differs from the current order.
    fn add(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}
