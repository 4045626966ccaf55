//! Margin-of-error propagation for derived estimates
//!
//! Closed-form approximations from the Census Bureau's guidance for
//! combining published estimates without access to microdata:
//!
//! - [`approximate_sum`]: totals across categories or geographies
//! - [`approximate_proportion`]: a subset's share of a total
//! - [`approximate_ratio`]: one estimate relative to another
//! - [`approximate_product`]: an estimate scaled by another
//! - [`approximate_percent_change`]: change between two periods
//!
//! Every function takes anything convertible into an
//! [`Estimate`](census_core::Estimate), including `(value, moe)` tuples.
//! Arithmetic faults such as a zero denominator are not trapped and surface
//! as infinities or NaN.
//!
//! # Example
//!
//! ```rust
//! use census_propagation::{approximate_sum, approximate_proportion};
//!
//! let single_women = approximate_sum([(135173.0, 3860.0), (43104.0, 2642.0), (24842.0, 1957.0)]);
//! let women_15_plus = approximate_sum([(466037.0, 391.0), (97360.0, 572.0), (67101.0, 459.0)]);
//!
//! let share = approximate_proportion(single_women, women_15_plus).unwrap();
//! assert!((share.value - 0.322).abs() < 1e-3);
//! ```

mod change;
mod product;
mod quotient;
mod sum;

pub use change::approximate_percent_change;
pub use product::approximate_product;
pub use quotient::{approximate_proportion, approximate_ratio};
pub use sum::approximate_sum;

pub use census_core::{Error, Estimate, Result};
