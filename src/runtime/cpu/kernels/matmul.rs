//! Matrix multiplication kernels
//!
//! Square `order × order` product over `u32` with wraparound. Both the
//! products and the running sums wrap; since addition mod 2^32 is associative
//! and commutative the loop order does not change the result, so the kernel
//! uses i-k-j order for contiguous access to B.

/// Compute rows `first_row..first_row + out.len() / order` of C = A @ B.
///
/// `a` and `b` are full `order²` buffers; `out` holds whole output rows and is
/// overwritten.
#[inline]
pub fn matmul_rows_kernel(
    a: &[u32],
    b: &[u32],
    out: &mut [u32],
    first_row: usize,
    order: usize,
) {
    out.fill(0);
    for (r, out_row) in out.chunks_exact_mut(order).enumerate() {
        let a_row = &a[(first_row + r) * order..(first_row + r + 1) * order];
        for (kk, &a_val) in a_row.iter().enumerate() {
            let b_row = &b[kk * order..(kk + 1) * order];
            for (dst, &b_val) in out_row.iter_mut().zip(b_row) {
                *dst = dst.wrapping_add(a_val.wrapping_mul(b_val));
            }
        }
    }
}
