//! Common test utilities
#![allow(dead_code)]

use wrapmat::matrix::Matrix;
use wrapmat::runtime::cpu::{Context, CpuClient};

/// Create a single-threaded CPU client at `order`
pub fn create_cpu_client(order: usize) -> CpuClient {
    CpuClient::with_order(order).unwrap()
}

/// Create a CPU client at `order` running on `threads` workers
pub fn create_threaded_client(order: usize, threads: usize) -> CpuClient {
    let mut ctx = Context::with_order(order).unwrap();
    ctx.set_threads(threads).unwrap();
    CpuClient::new(ctx).unwrap()
}

/// Build a matrix from a row-major slice, inferring the order
pub fn matrix(data: &[u32]) -> Matrix {
    let order = (data.len() as f64).sqrt() as usize;
    assert_eq!(order * order, data.len(), "data is not square");
    Matrix::from_slice(order, data).unwrap()
}
