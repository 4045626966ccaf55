//! Proportions and ratios of two estimates

use census_core::{Error, Estimate, Result};
use tracing::debug;

/// Calculate an estimate's proportion of another estimate
///
/// Intended for a numerator that is a subset of the denominator. When it is
/// not, the squared margin goes negative and a [`Error::Data`] is returned;
/// use [`approximate_ratio`] instead.
///
/// # Example
///
/// ```rust
/// use census_propagation::approximate_proportion;
///
/// let p = approximate_proportion((203119.0, 5070.0), (630498.0, 831.1113042186347)).unwrap();
/// assert!((p.value - 0.322).abs() < 1e-3);
/// assert!((p.margin_of_error - 0.008).abs() < 1e-3);
/// ```
pub fn approximate_proportion(
    numerator: impl Into<Estimate>,
    denominator: impl Into<Estimate>,
) -> Result<Estimate> {
    let numerator = numerator.into();
    let denominator = denominator.into();

    let proportion = numerator.value / denominator.value;

    let squared_moe = numerator.margin_of_error.powi(2)
        - proportion.powi(2) * denominator.margin_of_error.powi(2);
    if squared_moe < 0.0 {
        debug!(squared_moe, "proportion radicand is negative");
        return Err(Error::negative_radicand());
    }
    let margin_of_error = (1.0 / denominator.value) * squared_moe.sqrt();

    Ok(Estimate::new(proportion, margin_of_error))
}

/// Calculate the ratio between two estimates
///
/// Unlike [`approximate_proportion`] the squared margin is a sum of squares,
/// so this never fails on sign.
pub fn approximate_ratio(
    numerator: impl Into<Estimate>,
    denominator: impl Into<Estimate>,
) -> Estimate {
    let numerator = numerator.into();
    let denominator = denominator.into();

    let ratio = numerator.value / denominator.value;

    let squared_moe =
        numerator.margin_of_error.powi(2) + ratio.powi(2) * denominator.margin_of_error.powi(2);
    let margin_of_error = (1.0 / denominator.value) * squared_moe.sqrt();

    Estimate::new(ratio, margin_of_error)
}
