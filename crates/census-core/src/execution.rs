//! Execution strategy for independent units of work
//!
//! Simulation replicates share no data, so a batch of them can run either in
//! the current thread or across the rayon pool. Results are always returned
//! in index order, whichever strategy is used.

use serde::{Deserialize, Serialize};

/// How a batch of independent computations is executed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExecutionStrategy {
    /// Process items sequentially in the calling thread
    #[default]
    Sequential,
    /// Process items on the rayon thread pool (requires the `parallel` feature,
    /// falls back to sequential execution otherwise)
    Parallel,
}

impl ExecutionStrategy {
    /// Run `f` for every index in `0..count`, collecting results in index order
    pub fn execute_batch<F, R>(self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "parallel")]
        {
            if self == ExecutionStrategy::Parallel {
                use rayon::prelude::*;
                (0..count).into_par_iter().map(f).collect()
            } else {
                (0..count).map(f).collect()
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..count).map(f).collect()
        }
    }

    /// Check if this strategy actually runs in parallel in this build
    pub fn is_parallel(self) -> bool {
        cfg!(feature = "parallel") && self == ExecutionStrategy::Parallel
    }

    /// Number of threads work is spread across
    pub fn num_threads(self) -> usize {
        #[cfg(feature = "parallel")]
        {
            if self == ExecutionStrategy::Parallel {
                return rayon::current_num_threads();
            }
        }
        1
    }
}
