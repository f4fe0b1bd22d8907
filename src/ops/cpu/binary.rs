//! CPU implementation of element-wise binary operations.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::BinaryOps;
use crate::runtime::cpu::{CpuClient, helpers::add_impl};

impl BinaryOps for CpuClient {
    fn add(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        add_impl(self, a, b)
    }
}
