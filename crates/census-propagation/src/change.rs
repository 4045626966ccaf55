//! Percent change between two estimates

use crate::quotient::approximate_ratio;
use census_core::Estimate;

/// Calculate the percent change from `old` to `new`
///
/// Both the change and its margin of error are expressed in percent. The
/// margin reuses the ratio rule for `new / old`.
///
/// # Example
///
/// ```rust
/// use census_propagation::approximate_percent_change;
///
/// let change = approximate_percent_change((135173.0, 3860.0), (139301.0, 4047.0));
/// assert!((change.value - 3.0538643072211165).abs() < 1e-12);
/// assert!((change.margin_of_error - 4.198069852261231).abs() < 1e-12);
/// ```
pub fn approximate_percent_change(old: impl Into<Estimate>, new: impl Into<Estimate>) -> Estimate {
    let old = old.into();
    let new = new.into();

    let change = ((new.value - old.value) / old.value) * 100.0;
    let as_ratio = approximate_ratio(new, old);

    Estimate::new(change, 100.0 * as_ratio.margin_of_error)
}
