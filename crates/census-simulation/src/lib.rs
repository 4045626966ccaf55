//! Monte-Carlo estimation for binned counts with per-bin margins of error
//!
//! When every bin of a table carries a margin of error on its count, the
//! uncertainty of a derived median or mean can be estimated by simulation:
//! each replicate redraws the counts from their sampling distributions,
//! recomputes the statistic, and the replicate values are summarized by
//! their mean and a percentile interval.
//!
//! Replicates are seeded independently from a base seed, so a run is
//! reproducible for a given [`SimulationConfig::seed`] whichever
//! [`ExecutionStrategy`](census_core::ExecutionStrategy) executes it.
//!
//! # Example
//!
//! ```rust
//! use census_bins::BinPartition;
//! use census_simulation::{SimulatedMean, SimulationConfig};
//!
//! let partition: BinPartition = serde_json::from_str(r#"[
//!     {"min": 0, "max": 9999, "n": 120, "moe": 20},
//!     {"min": 10000, "max": 19999, "n": 80, "moe": 15}
//! ]"#).unwrap();
//!
//! let config = SimulationConfig::new().with_seed(42);
//! let a = SimulatedMean::new(config).estimate(&partition).unwrap();
//! let b = SimulatedMean::new(config).estimate(&partition).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod aggregate;
pub mod config;
pub mod mean;
pub mod median;
pub mod perturb;
pub mod replicate;

pub use aggregate::{linear_quantile, SimulationSummary};
pub use config::{replicate_rng, SimulationConfig, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_SIMULATIONS};
pub use mean::{pareto_shape, SimulatedMean};
pub use median::{interpolated_values, SimulatedMedian};
pub use perturb::{CountPerturbation, CountPerturber};
pub use replicate::{ReplicateOutcome, UndefinedReason};

pub use census_core::{Diagnostic, Error, Estimate, Estimation, Result};
