//! CPU implementation of reduction operations.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::ops::ReduceOps;
use crate::runtime::cpu::CpuClient;
use crate::runtime::cpu::kernels::{
    count_kernel, max_kernel, min_kernel, sum_kernel, trace_kernel,
};

impl ReduceOps for CpuClient {
    fn sum(&self, a: &Matrix) -> Result<u32> {
        Ok(sum_kernel(a.as_slice()))
    }

    fn trace(&self, a: &Matrix) -> Result<u32> {
        if a.is_empty() {
            return Err(Error::EmptyInput { op: "trace" });
        }
        Ok(trace_kernel(a.as_slice(), a.order()))
    }

    fn min(&self, a: &Matrix) -> Result<u32> {
        min_kernel(a.as_slice()).ok_or(Error::EmptyInput { op: "min" })
    }

    fn max(&self, a: &Matrix) -> Result<u32> {
        max_kernel(a.as_slice()).ok_or(Error::EmptyInput { op: "max" })
    }

    fn frequency(&self, a: &Matrix, value: u32) -> Result<usize> {
        Ok(count_kernel(a.as_slice(), value))
    }
}
