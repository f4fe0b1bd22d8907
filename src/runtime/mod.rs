//! Runtime backends
//!
//! A runtime supplies the client that operation traits are implemented on.
//! Only the CPU runtime exists; its client carries the [`cpu::Context`] that
//! fixes the order, seed and worker count for every call.

#[cfg(feature = "cpu")]
pub mod cpu;
