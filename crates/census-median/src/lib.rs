//! Median estimation from binned counts
//!
//! [`AnalyticalMedian`] locates the median by linear interpolation within
//! its bin and derives a 90% margin of error from the standard error of a
//! 50% proportion, as described in the Census Bureau's PUMS accuracy
//! statements. When the median falls in an open-ended bin, [`JamValues`]
//! decide what is reported.
//!
//! # Example
//!
//! ```rust
//! use census_bins::{Bin, BinPartition};
//! use census_median::AnalyticalMedian;
//!
//! let partition = BinPartition::new(vec![
//!     Bin::bounded(0.0, 9999.0, 40).unwrap(),
//!     Bin::bounded(10000.0, 19999.0, 60).unwrap(),
//!     Bin::bounded(20000.0, 29999.0, 50).unwrap(),
//! ])
//! .unwrap();
//!
//! let result = AnalyticalMedian::new()
//!     .with_design_factor(1.0)
//!     .with_sampling_percentage(12.5)
//!     .estimate(&partition)
//!     .unwrap();
//! assert!(result.estimate.unwrap() > 10000.0);
//! assert!(result.margin_of_error.is_some());
//! ```

pub mod analytical;
pub mod jam;

pub use analytical::AnalyticalMedian;
pub use jam::{apply_jam_policy, JamValues, MedianPlacement};

pub use census_core::{Diagnostic, Error, Estimation, Result};
