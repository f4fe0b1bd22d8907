//! Matrix multiplication operations trait.

use crate::error::Result;
use crate::matrix::Matrix;

/// Matrix multiplication and powers
pub trait MatmulOps {
    /// Matrix multiplication: a @ b
    ///
    /// `out[r][c] = Σₖ a[r][k] * b[k][c]`, where each product and each partial
    /// sum wraps mod 2^32. Intermediate overflow is part of the result, not an
    /// error.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if either operand's order differs from the current order.
    ///
    /// # Example
    ///
    /// ```
    /// # use wrapmat::prelude::*;
    /// let client = CpuClient::with_order(2)?;
    /// let m = client.sequence(1, 1)?;
    /// assert_eq!(client.matmul(&m, &m)?.to_vec(), vec![7, 10, 15, 22]);
    /// # Ok::<(), wrapmat::error::Error>(())
    /// ```
    fn matmul(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;

    /// Matrix power `a^exponent` by repeated multiplication
    ///
    /// - `exponent == 0` returns the identity regardless of `a`
    /// - otherwise the accumulator starts as a copy of `a` and is multiplied
    ///   by `a` another `exponent - 1` times, so `a^1 == a`
    fn matrix_pow(&self, a: &Matrix, exponent: u32) -> Result<Matrix>;
}
