//! CPU implementations of the operation traits.

mod binary;
mod generator;
mod matmul;
mod reduce;
mod scalar;
mod shape;
