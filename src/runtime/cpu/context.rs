//! Matrix-space configuration: order, seed and worker count
//!
//! A [`Context`] replaces process-wide settings with an explicit value, so
//! independent matrix spaces can coexist. The element count is derived from
//! the order on every change and can't be read before an order is set.

use crate::error::{Error, Result};
use crate::matrix::Order;
use serde::{Deserialize, Serialize};

/// Serializable form of a [`Context`]
///
/// Missing fields fall back to [`ContextConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Matrix order (width == height)
    pub order: Option<usize>,
    /// Seed the PRNG stream starts from
    pub seed: Option<u32>,
    /// Worker threads for data-parallel kernels
    pub threads: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            order: None,
            seed: None,
            threads: 1,
        }
    }
}

/// Validated configuration for one matrix space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    order: Option<Order>,
    element_count: usize,
    seed: Option<u32>,
    threads: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create an unconfigured context (no order, no seed, one thread)
    pub fn new() -> Self {
        Self {
            order: None,
            element_count: 0,
            seed: None,
            threads: 1,
        }
    }

    /// Create a context with the given order
    pub fn with_order(order: usize) -> Result<Self> {
        let mut ctx = Self::new();
        ctx.set_order(order)?;
        Ok(ctx)
    }

    /// Build a context from a config, validating every field
    pub fn from_config(config: &ContextConfig) -> Result<Self> {
        let mut ctx = Self::new();
        if let Some(order) = config.order {
            ctx.set_order(order)?;
        }
        if let Some(seed) = config.seed {
            ctx.set_seed(seed);
        }
        ctx.set_threads(config.threads)?;
        Ok(ctx)
    }

    /// Snapshot as a serializable config
    pub fn config(&self) -> ContextConfig {
        ContextConfig {
            order: self.order.map(Order::get),
            seed: self.seed,
            threads: self.threads,
        }
    }

    /// Set the matrix order and recompute the element count.
    ///
    /// An order of 0, or one whose element count overflows `usize`, is
    /// rejected and the previous order is kept.
    pub fn set_order(&mut self, order: usize) -> Result<()> {
        if order == 0 {
            return Err(Error::invalid_config("order must be positive"));
        }
        let order = Order::new(order);
        let element_count = order.checked_numel().ok_or_else(|| {
            Error::invalid_config(format!("order {order} has too many elements"))
        })?;
        self.order = Some(order);
        self.element_count = element_count;
        tracing::debug!(order = order.get(), elements = self.element_count, "context order set");
        Ok(())
    }

    /// Record the PRNG seed
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = Some(seed);
        tracing::debug!(seed, "context seed set");
    }

    /// Set the worker thread count. Results never depend on it.
    pub fn set_threads(&mut self, threads: usize) -> Result<()> {
        if threads == 0 {
            return Err(Error::invalid_config("thread count must be positive"));
        }
        self.threads = threads;
        tracing::debug!(threads, "context thread count set");
        Ok(())
    }

    /// Current order, or `InvalidConfiguration` if none was set
    pub fn order(&self) -> Result<Order> {
        self.order
            .ok_or_else(|| Error::invalid_config("matrix order has not been set"))
    }

    /// `order²`, or `InvalidConfiguration` if no order was set
    pub fn element_count(&self) -> Result<usize> {
        self.order()?;
        Ok(self.element_count)
    }

    /// Seed last set through [`Context::set_seed`] or the config, if any.
    ///
    /// This is where the stream started, not where it is now: draws and
    /// `GeneratorOps::random(seed)` move the client's live stream without
    /// touching it.
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Configured worker thread count
    pub fn threads(&self) -> usize {
        self.threads
    }
}
