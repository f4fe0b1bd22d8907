//! CPU client for operation dispatch

use super::context::Context;
use super::kernels::lcg_step;
use super::parallel::Parallelism;
use crate::error::{Error, Result};
use crate::matrix::{Matrix, Order};
use parking_lot::Mutex;

/// CPU client: owns a [`Context`] and implements every operation trait
///
/// The PRNG state sits behind a mutex so generators can take `&self`; each
/// draw locks it once per matrix, never per element.
#[derive(Debug)]
pub struct CpuClient {
    context: Context,
    rng: Mutex<Option<u32>>,
    parallel: Parallelism,
}

impl CpuClient {
    /// Create a client from a context
    pub fn new(context: Context) -> Result<Self> {
        let parallel = Parallelism::new(context.threads())?;
        let rng = Mutex::new(context.seed());
        Ok(Self {
            context,
            rng,
            parallel,
        })
    }

    /// Create a single-threaded client with the given order
    pub fn with_order(order: usize) -> Result<Self> {
        Self::new(Context::with_order(order)?)
    }

    /// The configuration this client runs under
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Change the matrix order. Matrices built earlier keep their own order.
    pub fn set_order(&mut self, order: usize) -> Result<()> {
        self.context.set_order(order)
    }

    /// Set the seed and reset the PRNG stream to it
    pub fn set_seed(&mut self, seed: u32) {
        self.context.set_seed(seed);
        *self.rng.get_mut() = Some(seed);
    }

    /// Change the worker count, rebuilding the pool if needed
    pub fn set_threads(&mut self, threads: usize) -> Result<()> {
        let parallel = Parallelism::new(threads)?;
        self.context.set_threads(threads)?;
        self.parallel = parallel;
        Ok(())
    }

    /// Draw one 15-bit value from the live PRNG stream.
    ///
    /// Fails with `InvalidConfiguration` if the stream was never seeded.
    pub fn next_random(&self) -> Result<u32> {
        self.with_rng(lcg_step)
    }

    /// Run `f` against the seeded PRNG state
    pub(crate) fn with_rng<T>(&self, f: impl FnOnce(&mut u32) -> T) -> Result<T> {
        let mut guard = self.rng.lock();
        let state = guard
            .as_mut()
            .ok_or_else(|| Error::invalid_config("random seed has not been set"))?;
        Ok(f(state))
    }

    /// Reseed the PRNG stream, then run `f` against it
    pub(crate) fn reseed_with<T>(&self, seed: u32, f: impl FnOnce(&mut u32) -> T) -> T {
        let mut guard = self.rng.lock();
        let state = guard.insert(seed);
        f(state)
    }

    pub(crate) fn parallel(&self) -> &Parallelism {
        &self.parallel
    }

    /// Order new matrices are built at
    pub(crate) fn current_order(&self) -> Result<Order> {
        self.context.order()
    }

    /// Check that `m` was built at the current order and return it
    pub(crate) fn ensure_order(&self, m: &Matrix) -> Result<Order> {
        let order = self.current_order()?;
        if m.layout() != order {
            return Err(Error::shape_mismatch(order.get(), m.order()));
        }
        Ok(order)
    }
}
