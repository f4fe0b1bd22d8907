//! Memory and layout kernels (fill, copy, identity, sequence, reverse, transpose)

/// Fill buffer with a constant value
#[inline]
pub fn fill_kernel(out: &mut [u32], value: u32) {
    out.fill(value);
}

/// Copy elements from src to dst
///
/// `src` and `dst` must have equal length.
#[inline]
pub fn copy_kernel(src: &[u32], dst: &mut [u32]) {
    dst.copy_from_slice(src);
}

/// Write 1 on the diagonal of a zeroed `order × order` buffer
#[inline]
pub fn identity_kernel(out: &mut [u32], order: usize) {
    for i in 0..order {
        out[i * order + i] = 1;
    }
}

/// Arithmetic sequence in flat order: `out[i] = out[i-1] + step`, wrapping.
///
/// The running value is carried forward rather than recomputed from `i`, so
/// overflow accumulates exactly as repeated addition does.
#[inline]
pub fn sequence_kernel(out: &mut [u32], start: u32, step: u32) {
    let mut current = start;
    for elem in out.iter_mut() {
        *elem = current;
        current = current.wrapping_add(step);
    }
}

/// Full-buffer reversal: `out[i] = src[len - 1 - i]`
///
/// This reverses across row boundaries; it is neither a row flip nor a
/// column flip.
#[inline]
pub fn reverse_kernel(src: &[u32], out: &mut [u32]) {
    debug_assert_eq!(src.len(), out.len());
    for (dst, value) in out.iter_mut().zip(src.iter().rev()) {
        *dst = *value;
    }
}

/// Write row `row` of the transpose of `src` into `out_row`.
///
/// Row `row` of `srcᵀ` is column `row` of `src`. Working per output row keeps
/// every output row independent, so rows may be produced concurrently.
#[inline]
pub fn transpose_row_kernel(src: &[u32], out_row: &mut [u32], row: usize, order: usize) {
    for (x, dst) in out_row.iter_mut().enumerate() {
        *dst = src[x * order + row];
    }
}
