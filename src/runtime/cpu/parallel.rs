//! Row-parallel execution
//!
//! Every parallel kernel in this crate writes whole output rows and reads only
//! its inputs, so splitting the output by rows can't change any value. With
//! the `rayon` feature and more than one thread, rows run on a dedicated pool
//! sized to the context's thread count; otherwise they run in order on the
//! calling thread.

use crate::error::Result;
#[cfg(feature = "rayon")]
use crate::error::Error;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// Minimum rows per rayon task
#[cfg(feature = "rayon")]
const MIN_ROWS_PER_TASK: usize = 4;

/// Worker pool handle owned by a client
#[derive(Debug, Clone)]
pub struct Parallelism {
    threads: usize,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl Parallelism {
    /// Set up execution for `threads` workers.
    ///
    /// One thread never builds a pool.
    pub fn new(threads: usize) -> Result<Self> {
        #[cfg(feature = "rayon")]
        {
            let pool = if threads > 1 {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("wrapmat-worker-{i}"))
                    .build()
                    .map_err(|e| Error::Backend(format!("failed to build thread pool: {e}")))?;
                tracing::debug!(threads, "built worker pool");
                Some(Arc::new(pool))
            } else {
                None
            };
            Ok(Self { threads, pool })
        }

        #[cfg(not(feature = "rayon"))]
        {
            Ok(Self { threads })
        }
    }

    /// Configured worker count
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Run `f(row_index, row)` for every `width`-sized row of `out`.
    pub fn for_each_row<F>(&self, out: &mut [u32], width: usize, f: F)
    where
        F: Fn(usize, &mut [u32]) + Send + Sync,
    {
        if width == 0 {
            return;
        }

        #[cfg(feature = "rayon")]
        {
            if let Some(pool) = &self.pool {
                if out.len() / width > 1 {
                    pool.install(|| {
                        out.par_chunks_mut(width)
                            .with_min_len(MIN_ROWS_PER_TASK)
                            .enumerate()
                            .for_each(|(row, chunk)| f(row, chunk));
                    });
                    return;
                }
            }
        }

        for (row, chunk) in out.chunks_mut(width).enumerate() {
            f(row, chunk);
        }
    }
}
