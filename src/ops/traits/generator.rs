//! Matrix generator operations trait.

use crate::error::Result;
use crate::matrix::Matrix;

/// Build fresh matrices at the client's current order
///
/// Every generator fails with `InvalidConfiguration` if no order is set.
pub trait GeneratorOps {
    /// All elements 0
    fn zeros(&self) -> Result<Matrix>;

    /// 1 on the diagonal, 0 elsewhere
    fn identity(&self) -> Result<Matrix>;

    /// Reseed the PRNG with `seed`, then fill in row-major order, one draw
    /// per element.
    ///
    /// The same seed and order always produce the same matrix. Each value is
    /// in `0..=0x7FFF`. The reseed affects only the live stream; the
    /// context's configured seed is left as it was.
    fn random(&self, seed: u32) -> Result<Matrix>;

    /// Fill from the live PRNG stream without reseeding.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the stream has never been seeded.
    fn random_continue(&self) -> Result<Matrix>;

    /// Every element set to `value`
    fn uniform(&self, value: u32) -> Result<Matrix>;

    /// Row-major arithmetic sequence: element `i` is `start + i * step`.
    ///
    /// Computed by repeated wrapping addition of `step`.
    ///
    /// # Example
    ///
    /// ```
    /// # use wrapmat::prelude::*;
    /// let client = CpuClient::with_order(2)?;
    /// assert_eq!(client.sequence(1, 1)?.to_vec(), vec![1, 2, 3, 4]);
    /// # Ok::<(), wrapmat::error::Error>(())
    /// ```
    fn sequence(&self, start: u32, step: u32) -> Result<Matrix>;
}
