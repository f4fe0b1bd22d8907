//! Order: the shared width/height of a square matrix

use std::fmt;

/// Width (== height) of a square matrix
///
/// All index arithmetic lives here so the rest of the crate never repeats
/// `row * width + col` by hand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Order(usize);

impl Order {
    /// Create an order of `n`
    #[inline]
    pub const fn new(n: usize) -> Self {
        Self(n)
    }

    /// Width (== height)
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Total number of elements (`order²`)
    ///
    /// Orders accepted by [`Matrix::from_vec`](crate::matrix::Matrix::from_vec)
    /// and [`Context::set_order`](crate::runtime::cpu::Context::set_order) are
    /// checked with [`Order::checked_numel`] first, so this never overflows for
    /// them.
    #[inline]
    pub const fn numel(self) -> usize {
        self.0 * self.0
    }

    /// `order²`, or `None` if it does not fit in `usize`
    #[inline]
    pub const fn checked_numel(self) -> Option<usize> {
        self.0.checked_mul(self.0)
    }

    /// Whether the matrix has no elements
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Flat row-major offset of `(row, col)`
    #[inline]
    pub const fn offset(self, row: usize, col: usize) -> usize {
        row * self.0 + col
    }

    /// Inverse of [`Order::offset`]
    #[inline]
    pub const fn coords(self, offset: usize) -> (usize, usize) {
        (offset / self.0, offset % self.0)
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order({}x{})", self.0, self.0)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Order {
    fn from(n: usize) -> Self {
        Self(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_row_major() {
        let order = Order::new(3);
        assert_eq!(order.offset(0, 0), 0);
        assert_eq!(order.offset(0, 2), 2);
        assert_eq!(order.offset(1, 0), 3);
        assert_eq!(order.offset(2, 1), 7);
    }

    #[test]
    fn test_coords_inverts_offset() {
        let order = Order::new(4);
        for offset in 0..order.numel() {
            let (row, col) = order.coords(offset);
            assert_eq!(order.offset(row, col), offset);
        }
    }

    #[test]
    fn test_numel() {
        assert_eq!(Order::new(0).numel(), 0);
        assert_eq!(Order::new(5).numel(), 25);
        assert!(Order::new(0).is_empty());
    }

    #[test]
    fn test_checked_numel_overflow() {
        assert_eq!(Order::new(5).checked_numel(), Some(25));
        assert_eq!(Order::new(1usize << (usize::BITS / 2)).checked_numel(), None);
        assert_eq!(Order::new(usize::MAX).checked_numel(), None);
    }
}
