//! CPU implementation of scalar operations.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::{BinaryOp, ScalarOps};
use crate::runtime::cpu::{CpuClient, helpers::scalar_op_impl};

impl ScalarOps for CpuClient {
    fn add_scalar(&self, a: &Matrix, scalar: u32) -> Result<Matrix> {
        scalar_op_impl(self, BinaryOp::Add, a, scalar, "add_scalar")
    }

    fn mul_scalar(&self, a: &Matrix, scalar: u32) -> Result<Matrix> {
        scalar_op_impl(self, BinaryOp::Mul, a, scalar, "mul_scalar")
    }
}
