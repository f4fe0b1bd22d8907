//! CPU implementation of structural transforms.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::ShapeOps;
use crate::runtime::cpu::CpuClient;
use crate::runtime::cpu::kernels::{copy_kernel, reverse_kernel, transpose_row_kernel};

impl ShapeOps for CpuClient {
    fn cloned(&self, a: &Matrix) -> Result<Matrix> {
        let order = self.ensure_order(a)?;
        let mut out = Matrix::zeroed_buffer(order);
        copy_kernel(a.as_slice(), &mut out);
        Ok(Matrix::from_parts(order, out))
    }

    fn reverse(&self, a: &Matrix) -> Result<Matrix> {
        let order = self.ensure_order(a)?;
        let mut out = Matrix::zeroed_buffer(order);
        reverse_kernel(a.as_slice(), &mut out);
        Ok(Matrix::from_parts(order, out))
    }

    fn transpose(&self, a: &Matrix) -> Result<Matrix> {
        let order = self.ensure_order(a)?;
        let width = order.get();
        let src = a.as_slice();
        let mut out = Matrix::zeroed_buffer(order);
        self.parallel().for_each_row(&mut out, width, |row, chunk| {
            transpose_row_kernel(src, chunk, row, width);
        });
        Ok(Matrix::from_parts(order, out))
    }
}
