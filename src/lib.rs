//! Combine published survey estimates and propagate their margins of error
//!
//! Survey tables publish each estimate with a 90% margin of error. This
//! crate derives new estimates from published ones without microdata:
//!
//! - **Propagation**: sums, proportions, ratios, products and percent
//!   changes of `(estimate, margin_of_error)` pairs
//! - **Medians**: from binned counts, by Census quantile interpolation or,
//!   when every bin carries a count margin of error, by simulation
//! - **Means**: from binned counts with count margins of error, by
//!   simulation with uniform or Pareto-tailed within-bin values
//!
//! The work is split across the workspace crates re-exported here:
//! [`census_core`], [`census_propagation`], [`census_bins`],
//! [`census_median`] and [`census_simulation`].
//!
//! # Example
//!
//! ```rust
//! use census_aggregator::prelude::*;
//!
//! // Never-married women aged 15 and older
//! let total = approximate_sum([(135173.0, 3860.0), (43104.0, 2642.0), (24842.0, 1957.0)]);
//! assert_eq!(total.value, 203119.0);
//!
//! let partition: BinPartition = serde_json::from_str(r#"[
//!     {"min": 0, "max": 9999, "n": 40},
//!     {"min": 10000, "max": 19999, "n": 60},
//!     {"min": 20000, "max": null, "n": 50}
//! ]"#).unwrap();
//! let options = MedianOptions::new()
//!     .with_design_factor(ACS_DESIGN_FACTOR)
//!     .with_sampling_percentage(SamplingPercentage::FiveYearAcs);
//! let median = approximate_median(&partition, &options).unwrap();
//! assert!(median.is_determined());
//! ```

pub mod api;

pub use census_bins;
pub use census_core;
pub use census_median;
pub use census_propagation;
pub use census_simulation;

pub use api::{
    approximate_mean, approximate_median, approximate_percent_change, approximate_product,
    approximate_proportion, approximate_ratio, approximate_sum, MeanOptions, MedianOptions,
};
pub use census_bins::{Bin, BinPartition};
pub use census_core::{
    Diagnostic, Error, Estimate, Estimation, ExecutionStrategy, Result, SamplingPercentage,
    ACS_DESIGN_FACTOR, Z_90,
};
pub use census_median::JamValues;
pub use census_simulation::{SimulationConfig, SimulationSummary};

/// Everything needed for typical use
pub mod prelude {
    pub use crate::api::{
        approximate_mean, approximate_median, approximate_percent_change, approximate_product,
        approximate_proportion, approximate_ratio, approximate_sum, MeanOptions, MedianOptions,
    };
    pub use census_bins::{Bin, BinPartition};
    pub use census_core::{
        Diagnostic, Error, Estimate, Estimation, ExecutionStrategy, Result, SamplingPercentage,
        ACS_DESIGN_FACTOR,
    };
    pub use census_median::JamValues;
    pub use census_simulation::SimulationConfig;
}
