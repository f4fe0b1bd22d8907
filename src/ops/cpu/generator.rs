//! CPU implementation of matrix generators.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::GeneratorOps;
use crate::runtime::cpu::CpuClient;
use crate::runtime::cpu::kernels::{
    fill_kernel, identity_kernel, lcg_fill_kernel, sequence_kernel,
};

impl GeneratorOps for CpuClient {
    fn zeros(&self) -> Result<Matrix> {
        let order = self.current_order()?;
        Ok(Matrix::from_parts(order, Matrix::zeroed_buffer(order)))
    }

    fn identity(&self) -> Result<Matrix> {
        let order = self.current_order()?;
        let mut out = Matrix::zeroed_buffer(order);
        identity_kernel(&mut out, order.get());
        Ok(Matrix::from_parts(order, out))
    }

    fn random(&self, seed: u32) -> Result<Matrix> {
        let order = self.current_order()?;
        let mut out = Matrix::zeroed_buffer(order);
        self.reseed_with(seed, |state| lcg_fill_kernel(&mut out, state));
        Ok(Matrix::from_parts(order, out))
    }

    fn random_continue(&self) -> Result<Matrix> {
        let order = self.current_order()?;
        let mut out = Matrix::zeroed_buffer(order);
        self.with_rng(|state| lcg_fill_kernel(&mut out, state))?;
        Ok(Matrix::from_parts(order, out))
    }

    fn uniform(&self, value: u32) -> Result<Matrix> {
        let order = self.current_order()?;
        let mut out = Matrix::zeroed_buffer(order);
        fill_kernel(&mut out, value);
        Ok(Matrix::from_parts(order, out))
    }

    fn sequence(&self, start: u32, step: u32) -> Result<Matrix> {
        let order = self.current_order()?;
        let mut out = Matrix::zeroed_buffer(order);
        sequence_kernel(&mut out, start, step);
        Ok(Matrix::from_parts(order, out))
    }
}
