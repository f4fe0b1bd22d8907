//! Shared implementations behind the CPU operation traits

use super::client::CpuClient;
use super::kernels::{add_kernel, scalar_op_kernel};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::BinaryOp;

/// Validate `a`, then apply `a[i] op scalar` row by row into a new matrix.
pub(crate) fn scalar_op_impl(
    client: &CpuClient,
    op: BinaryOp,
    a: &Matrix,
    scalar: u32,
    op_name: &'static str,
) -> Result<Matrix> {
    let order = client.ensure_order(a)?;
    let width = order.get();
    let src = a.as_slice();
    let mut out = Matrix::zeroed_buffer(order);
    client.parallel().for_each_row(&mut out, width, |row, chunk| {
        let start = row * width;
        scalar_op_kernel(op, &src[start..start + width], scalar, chunk);
    });
    tracing::trace!(op = op_name, order = width, "scalar op");
    Ok(Matrix::from_parts(order, out))
}

/// Validate both operands, then add them element-wise row by row into a new
/// matrix.
pub(crate) fn add_impl(client: &CpuClient, a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let order = client.ensure_order(a)?;
    client.ensure_order(b)?;
    let width = order.get();
    let (lhs, rhs) = (a.as_slice(), b.as_slice());
    let mut out = Matrix::zeroed_buffer(order);
    client.parallel().for_each_row(&mut out, width, |row, chunk| {
        let range = row * width..(row + 1) * width;
        add_kernel(&lhs[range.clone()], &rhs[range], chunk);
    });
    tracing::trace!(op = "add", order = width, "binary op");
    Ok(Matrix::from_parts(order, out))
}
