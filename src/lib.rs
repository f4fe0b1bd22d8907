//! # wrapmat
//!
//! **Dense square matrix arithmetic over `u32` with wraparound semantics.**
//!
//! wrapmat builds square matrices from generators (zero, identity, seeded
//! pseudo-random, uniform, arithmetic sequence), transforms them (clone,
//! full reverse, transpose), combines them (scalar add/mul, element-wise add,
//! matmul, matrix power) and reduces them (sum, trace, min, max, frequency).
//! Every arithmetic step wraps modulo 2^32 exactly like native `u32`
//! overflow; overflow is never an error.
//!
//! ## Design
//!
//! - **Explicit context**: order, seed and worker count live in a
//!   [`Context`](runtime::cpu::Context) owned by a client, not in globals, so
//!   independent matrix spaces can coexist.
//! - **Flat buffers**: a matrix is one contiguous row-major `Vec<u32>`.
//! - **Immutable results**: operators never write into their inputs; each
//!   returns a freshly allocated matrix.
//! - **Deterministic parallelism**: with the `rayon` feature, per-row work
//!   can run on a worker pool. Results are bit-identical for any thread count.
//!
//! ## Quick Start
//!
//! ```rust
//! use wrapmat::prelude::*;
//!
//! let client = CpuClient::with_order(2)?;
//! let m = client.sequence(1, 1)?; // [1 2; 3 4]
//!
//! assert_eq!(client.trace(&m)?, 5);
//! assert_eq!(client.matmul(&m, &m)?.to_vec(), vec![7, 10, 15, 22]);
//! assert_eq!(client.matrix_pow(&m, 0)?, client.identity()?);
//! # Ok::<(), wrapmat::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cpu` (default): CPU backend
//! - `rayon` (default): multi-threaded row-parallel kernels

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod matrix;
pub mod ops;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{Matrix, Order};
    pub use crate::ops::{BinaryOps, GeneratorOps, MatmulOps, ReduceOps, ScalarOps, ShapeOps};

    #[cfg(feature = "cpu")]
    pub use crate::runtime::cpu::{Context, ContextConfig, CpuClient};
}
