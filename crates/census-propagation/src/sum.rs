//! Aggregating estimates by summation

use census_core::Estimate;
use std::iter;
use tracing::trace;

/// Sum estimates and approximate the combined margin of error
///
/// The margin of error is the root of the summed squared margins. When more
/// than one input reports a value of exactly zero, only the largest of those
/// zero-estimate margins contributes, once.
///
/// # Example
///
/// ```rust
/// use census_propagation::approximate_sum;
///
/// let total = approximate_sum([(10154024.0, 3778.0), (9712936.0, 3911.0)]);
/// assert_eq!(total.value, 19866960.0);
/// assert_eq!(total.margin_of_error, 5437.757350231803);
/// ```
pub fn approximate_sum<I>(pairs: I) -> Estimate
where
    I: IntoIterator,
    I::Item: Into<Estimate>,
{
    let pairs: Vec<Estimate> = pairs.into_iter().map(Into::into).collect();

    let zero_margins: Vec<f64> = pairs
        .iter()
        .filter(|p| p.is_zero())
        .map(|p| p.margin_of_error)
        .collect();

    let margins: Vec<f64> = if zero_margins.len() > 1 {
        let max_zero_margin = zero_margins.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        trace!(
            zeros = zero_margins.len(),
            max_zero_margin,
            "collapsing zero-estimate margins"
        );
        iter::once(max_zero_margin)
            .chain(pairs.iter().filter(|p| !p.is_zero()).map(|p| p.margin_of_error))
            .collect()
    } else {
        pairs.iter().map(|p| p.margin_of_error).collect()
    };

    let margin_of_error = margins.iter().map(|m| m * m).sum::<f64>().sqrt();
    let total = pairs.iter().map(|p| p.value).sum::<f64>();

    Estimate::new(total, margin_of_error)
}
