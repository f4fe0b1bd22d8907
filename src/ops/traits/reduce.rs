//! Reduction operations trait.

use crate::error::Result;
use crate::matrix::Matrix;

/// Whole-matrix reductions to a single value
///
/// Reductions read only the matrix they are given and accept any order.
pub trait ReduceOps {
    /// Wrapping sum of all elements. 0 for an empty matrix.
    fn sum(&self, a: &Matrix) -> Result<u32>;

    /// Wrapping sum of the diagonal
    ///
    /// # Errors
    ///
    /// `EmptyInput` for an empty matrix.
    fn trace(&self, a: &Matrix) -> Result<u32>;

    /// Smallest element
    ///
    /// # Errors
    ///
    /// `EmptyInput` for an empty matrix.
    fn min(&self, a: &Matrix) -> Result<u32>;

    /// Largest element
    ///
    /// # Errors
    ///
    /// `EmptyInput` for an empty matrix.
    fn max(&self, a: &Matrix) -> Result<u32>;

    /// Number of elements equal to `value`
    ///
    /// # Example
    ///
    /// ```
    /// # use wrapmat::prelude::*;
    /// let client = CpuClient::with_order(2)?;
    /// let m = client.uniform(5)?;
    /// assert_eq!(client.frequency(&m, 5)?, 4);
    /// # Ok::<(), wrapmat::error::Error>(())
    /// ```
    fn frequency(&self, a: &Matrix, value: u32) -> Result<usize>;
}
