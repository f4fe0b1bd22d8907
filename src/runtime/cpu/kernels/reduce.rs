//! Reduction kernels
//!
//! Full-buffer reductions over `u32`. Sums wrap mod 2^32; min/max return
//! `None` for an empty buffer instead of reading out of bounds.

/// Wrapping sum of all elements, row-major order
#[inline]
pub fn sum_kernel(a: &[u32]) -> u32 {
    a.iter().fold(0u32, |acc, &x| acc.wrapping_add(x))
}

/// Wrapping sum of the diagonal `a[i * order + i]`
#[inline]
pub fn trace_kernel(a: &[u32], order: usize) -> u32 {
    (0..order).fold(0u32, |acc, i| acc.wrapping_add(a[i * order + i]))
}

/// Smallest element; the first element is the initial candidate and only a
/// strictly smaller value replaces it
#[inline]
pub fn min_kernel(a: &[u32]) -> Option<u32> {
    let (&first, rest) = a.split_first()?;
    let mut min_val = first;
    for &val in rest {
        if val < min_val {
            min_val = val;
        }
    }
    Some(min_val)
}

/// Largest element, strict comparison as in [`min_kernel`]
#[inline]
pub fn max_kernel(a: &[u32]) -> Option<u32> {
    let (&first, rest) = a.split_first()?;
    let mut max_val = first;
    for &val in rest {
        if val > max_val {
            max_val = val;
        }
    }
    Some(max_val)
}

/// Number of elements exactly equal to `value`
#[inline]
pub fn count_kernel(a: &[u32], value: u32) -> usize {
    a.iter().filter(|&&x| x == value).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_wraps() {
        assert_eq!(sum_kernel(&[u32::MAX, 1, 5]), 5);
        assert_eq!(sum_kernel(&[]), 0);
    }

    #[test]
    fn test_trace() {
        assert_eq!(trace_kernel(&[1, 2, 3, 4], 2), 5);
        assert_eq!(trace_kernel(&[u32::MAX, 0, 0, 2], 2), 1);
    }

    #[test]
    fn test_min_max() {
        let a = [7, 3, 9, 3, 0, 9];
        assert_eq!(min_kernel(&a), Some(0));
        assert_eq!(max_kernel(&a), Some(9));
        assert_eq!(min_kernel(&[]), None);
        assert_eq!(max_kernel(&[]), None);
    }

    #[test]
    fn test_count() {
        assert_eq!(count_kernel(&[5, 5, 1, 5], 5), 3);
        assert_eq!(count_kernel(&[5, 5, 1, 5], 2), 0);
    }
}
