//! Operation traits for matrix operations.
//!
//! Implementations live in the backend-specific modules (`ops::cpu`).

mod binary;
mod generator;
mod matmul;
mod reduce;
mod scalar;
mod shape;

pub use binary::BinaryOps;
pub use generator::GeneratorOps;
pub use matmul::MatmulOps;
pub use reduce::ReduceOps;
pub use scalar::ScalarOps;
pub use shape::ShapeOps;
