//! Matrix operations
//!
//! Operations are defined as traits and implemented by the runtime client,
//! which gives them access to the [`Context`](crate::runtime::cpu::Context)
//! that fixes the order of every matrix they build or accept.
//!
//! ```text
//! CpuClient
//!   ├── GeneratorOps  zeros, identity, random, random_continue, uniform, sequence
//!   ├── ShapeOps      cloned, reverse, transpose
//!   ├── ScalarOps     add_scalar, mul_scalar
//!   ├── BinaryOps     add
//!   ├── MatmulOps     matmul, matrix_pow
//!   └── ReduceOps     sum, trace, min, max, frequency
//! ```
//!
//! # Validation
//!
//! Generators fail with `InvalidConfiguration` until an order is set.
//! Operators that take matrices require each operand to have the client's
//! current order and fail with `ShapeMismatch` otherwise; nothing is computed
//! before validation passes. Reductions are pure queries and accept a matrix
//! of any order.
//!
//! # Arithmetic
//!
//! All arithmetic wraps modulo 2^32, including every multiply-accumulate step
//! of matmul and every step of a power chain.

mod arithmetic;
#[cfg(feature = "cpu")]
pub(crate) mod cpu;
mod traits;

pub use arithmetic::BinaryOp;
pub use traits::{BinaryOps, GeneratorOps, MatmulOps, ReduceOps, ScalarOps, ShapeOps};
