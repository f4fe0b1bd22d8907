//! CPU implementation of matrix multiplication operations.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::{GeneratorOps, MatmulOps, ShapeOps};
use crate::runtime::cpu::CpuClient;
use crate::runtime::cpu::kernels::matmul_rows_kernel;

impl MatmulOps for CpuClient {
    fn matmul(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let order = self.ensure_order(a)?;
        self.ensure_order(b)?;
        let width = order.get();
        tracing::trace!(order = width, "matmul");

        let (lhs, rhs) = (a.as_slice(), b.as_slice());
        let mut out = Matrix::zeroed_buffer(order);
        self.parallel().for_each_row(&mut out, width, |row, chunk| {
            matmul_rows_kernel(lhs, rhs, chunk, row, width);
        });
        Ok(Matrix::from_parts(order, out))
    }

    fn matrix_pow(&self, a: &Matrix, exponent: u32) -> Result<Matrix> {
        self.ensure_order(a)?;
        tracing::trace!(order = a.order(), exponent, "matrix_pow");

        if exponent == 0 {
            return self.identity();
        }

        // Seeded with `a`, not zeros: a zero accumulator absorbs every product.
        let mut acc = self.cloned(a)?;
        for _ in 1..exponent {
            acc = self.matmul(&acc, a)?;
        }
        Ok(acc)
    }
}
