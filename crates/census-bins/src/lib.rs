//! Binned count distributions for survey tabulations
//!
//! Survey tables often report a distribution only as counts within value
//! ranges, e.g. households by income bracket. This crate models such a table
//! as a [`BinPartition`] of [`Bin`]s and maps points on the cumulative count
//! scale back to the bin that contains them.
//!
//! # Example
//!
//! ```rust
//! use census_bins::{Bin, BinPartition};
//!
//! let partition = BinPartition::new(vec![
//!     Bin::bounded(10000.0, 14999.0, 78).unwrap(),
//!     Bin::open_below(9999.0, 186).unwrap(),
//!     Bin::open_above(15000.0, 98).unwrap(),
//! ])
//! .unwrap();
//!
//! let ranges = partition.cumulative();
//! let midpoint = ranges.total() / 2.0;
//! assert_eq!(ranges.find(midpoint), Some(0));
//! ```
//!
//! Tables can also be read from JSON using the published field names:
//!
//! ```rust
//! use census_bins::BinPartition;
//!
//! let partition: BinPartition = serde_json::from_str(r#"[
//!     {"min": null, "max": 9999, "n": 6, "moe": 1},
//!     {"min": 10000, "max": null, "n": 9, "moe": 2}
//! ]"#).unwrap();
//! assert_eq!(partition.total_count(), 15);
//! ```

pub mod cumulative;
pub mod partition;
pub mod types;

// Re-export main types
pub use cumulative::{CumulativeBin, CumulativeRanges};
pub use partition::BinPartition;
pub use types::Bin;

pub use census_core::{Error, Result};
