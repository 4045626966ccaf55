//! Core types for census margin-of-error estimation
//!
//! This crate provides the pieces shared by every estimator in the
//! workspace:
//!
//! - [`Estimate`]: a published value and its 90% margin of error
//! - [`Error`]: the fatal error taxonomy (data errors, input errors)
//! - [`Diagnostic`] and [`Estimation`]: non-fatal conditions returned
//!   alongside a degraded result
//! - [`ExecutionStrategy`]: sequential or rayon-parallel batch execution
//! - [`survey`]: the 90% z-factor and sampling-percentage presets
//!
//! # Example
//!
//! ```rust
//! use census_core::{Estimate, survey};
//!
//! let males_under_5 = Estimate::new(10154024.0, 3778.0);
//! let se = survey::standard_error(males_under_5.margin_of_error);
//! assert!((se - 3778.0 / 1.645).abs() < 1e-9);
//! ```

pub mod diagnostics;
pub mod error;
pub mod estimate;
pub mod execution;
pub mod survey;

// Re-export core types
pub use diagnostics::{Diagnostic, Estimation};
pub use error::{Error, Result};
pub use estimate::Estimate;
pub use execution::ExecutionStrategy;
pub use survey::{SamplingPercentage, ACS_DESIGN_FACTOR, Z_90};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
