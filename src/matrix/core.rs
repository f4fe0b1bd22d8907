//! Core Matrix type

use super::layout::Order;
use crate::error::{Error, Result};

/// Dense square matrix of `u32` values stored row-major in one buffer
///
/// `Matrix` is the value type every generator, transform and operator
/// produces. It consists of:
/// - **Order**: the shared width/height
/// - **Data**: `order²` elements, `(row, col)` at `row * order + col`
///
/// Operators never write into an existing matrix; they allocate a fresh
/// buffer for the result, so a `Matrix` can be shared between threads by
/// reference without locking.
///
/// # Example
///
/// ```
/// use wrapmat::matrix::Matrix;
///
/// let m = Matrix::from_vec(2, vec![1, 2, 3, 4])?;
/// assert_eq!(m.get(1, 0)?, 3);
/// # Ok::<(), wrapmat::error::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    order: Order,
    data: Vec<u32>,
}

impl Matrix {
    /// Create a matrix from an owned row-major buffer.
    ///
    /// Returns `Error::ShapeMismatch` if `data.len() != order²`, including
    /// when `order²` overflows `usize`. An order of 0 with an empty buffer is
    /// accepted.
    pub fn from_vec(order: usize, data: Vec<u32>) -> Result<Self> {
        let layout = Order::new(order);
        let numel = layout
            .checked_numel()
            .ok_or_else(|| Error::shape_mismatch(order, data.len()))?;
        if data.len() != numel {
            return Err(Error::shape_mismatch(numel, data.len()));
        }
        Ok(Self {
            order: layout,
            data,
        })
    }

    /// Create a matrix by copying a row-major slice.
    pub fn from_slice(order: usize, data: &[u32]) -> Result<Self> {
        Self::from_vec(order, data.to_vec())
    }

    /// Wrap a buffer the caller has already sized to `order.numel()`.
    pub(crate) fn from_parts(order: Order, data: Vec<u32>) -> Self {
        debug_assert_eq!(data.len(), order.numel());
        Self { order, data }
    }

    /// Zero-initialised buffer of the right size for `order`
    pub(crate) fn zeroed_buffer(order: Order) -> Vec<u32> {
        vec![0u32; order.numel()]
    }

    /// Order (width == height)
    #[inline]
    pub fn order(&self) -> usize {
        self.order.get()
    }

    /// Order as the index-arithmetic helper
    #[inline]
    pub fn layout(&self) -> Order {
        self.order
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major element buffer
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Copy the elements out in row-major order
    pub fn to_vec(&self) -> Vec<u32> {
        self.data.clone()
    }

    /// Consume the matrix, returning its buffer
    pub fn into_vec(self) -> Vec<u32> {
        self.data
    }

    /// Element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<u32> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.data[self.order.offset(row, col)])
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> Result<&[u32]> {
        self.check_row(row)?;
        let start = self.order.offset(row, 0);
        Ok(&self.data[start..start + self.order.get()])
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks_exact panics on 0; an empty matrix has no rows anyway
        self.data.chunks_exact(self.order.get().max(1))
    }

    pub(crate) fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.order.get() {
            return Err(Error::IndexOutOfBounds {
                index: row,
                size: self.order.get(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.order.get() {
            return Err(Error::IndexOutOfBounds {
                index: col,
                size: self.order.get(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matrix")
            .field("order", &self.order.get())
            .field("data", &self.data)
            .finish()
    }
}

impl AsRef<[u32]> for Matrix {
    fn as_ref(&self) -> &[u32] {
        &self.data
    }
}
