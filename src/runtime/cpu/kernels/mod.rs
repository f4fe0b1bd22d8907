//! CPU kernel implementations
//!
//! Low-level compute kernels over `u32` slices. Kernels never allocate and
//! never validate shapes; callers in `ops::cpu` size and check every buffer
//! before dispatching here.

pub mod binary;
pub mod lcg;
pub mod matmul;
pub mod memory;
pub mod reduce;
pub mod scalar;

pub use binary::add_kernel;
pub use lcg::{lcg_fill_kernel, lcg_step};
pub use matmul::matmul_rows_kernel;
pub use memory::{
    copy_kernel, fill_kernel, identity_kernel, reverse_kernel, sequence_kernel,
    transpose_row_kernel,
};
pub use reduce::{count_kernel, max_kernel, min_kernel, sum_kernel, trace_kernel};
pub use scalar::scalar_op_kernel;
