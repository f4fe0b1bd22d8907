//! Arithmetic operation helpers
//!
//! The operations themselves are defined by the [`ScalarOps`](super::ScalarOps)
//! and [`BinaryOps`](super::BinaryOps) traits.

/// Matrix-scalar operation kind
///
/// Every variant wraps modulo 2^32; overflow is never reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition: a + b
    Add,
    /// Multiplication: a * b
    Mul,
}
