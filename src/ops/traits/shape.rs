//! Structural transform operations trait.

use crate::error::Result;
use crate::matrix::Matrix;

/// Operations that move elements without changing their values
pub trait ShapeOps {
    /// Element-for-element copy into a fresh buffer
    fn cloned(&self, a: &Matrix) -> Result<Matrix>;

    /// Reverse the whole flat buffer: `out[i] = a[numel - 1 - i]`
    ///
    /// This reverses across row boundaries, so it equals a 180° rotation
    /// rather than a per-row or per-column flip.
    ///
    /// # Example
    ///
    /// ```
    /// # use wrapmat::prelude::*;
    /// let client = CpuClient::with_order(2)?;
    /// let m = client.sequence(1, 1)?;
    /// assert_eq!(client.reverse(&m)?.to_vec(), vec![4, 3, 2, 1]);
    /// # Ok::<(), wrapmat::error::Error>(())
    /// ```
    fn reverse(&self, a: &Matrix) -> Result<Matrix>;

    /// Transpose: `out(col, row) = a(row, col)`
    fn transpose(&self, a: &Matrix) -> Result<Matrix>;
}
