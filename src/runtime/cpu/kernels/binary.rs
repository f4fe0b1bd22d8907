//! Element-wise binary kernels

/// Element-wise sum `a[i] + b[i]`, wrapping mod 2^32
///
/// `a`, `b`, and `out` must have equal length.
#[inline]
pub fn add_kernel(a: &[u32], b: &[u32], out: &mut [u32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    for (dst, (&x, &y)) in out.iter_mut().zip(a.iter().zip(b)) {
        *dst = x.wrapping_add(y);
    }
}
