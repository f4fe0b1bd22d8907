//! Scalar operation kernels

use crate::ops::BinaryOp;

/// Binary operation with a scalar (matrix op scalar), wrapping mod 2^32
///
/// `a` and `out` must have equal length.
#[inline]
pub fn scalar_op_kernel(op: BinaryOp, a: &[u32], scalar: u32, out: &mut [u32]) {
    debug_assert_eq!(a.len(), out.len());
    match op {
        BinaryOp::Add => {
            for (dst, &x) in out.iter_mut().zip(a) {
                *dst = x.wrapping_add(scalar);
            }
        }
        BinaryOp::Mul => {
            for (dst, &x) in out.iter_mut().zip(a) {
                *dst = x.wrapping_mul(scalar);
            }
        }
    }
}
