//! CPU runtime implementation
//!
//! The CPU runtime owns matrices as plain heap buffers and is the reference
//! implementation of every operation. Elementwise operators, transpose and
//! matmul split their output by rows and may run on a worker pool; PRNG fills,
//! sequences and reductions always run sequentially on the caller's thread.

mod client;
mod context;
pub(crate) mod helpers;
pub(crate) mod kernels;
mod parallel;

pub use client::CpuClient;
pub use context::{Context, ContextConfig};
pub use parallel::Parallelism;
