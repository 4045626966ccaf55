//! Products of two estimates

use census_core::Estimate;

/// Calculate the product of two estimates and approximate its margin of error
///
/// # Example
///
/// ```rust
/// use census_propagation::approximate_product;
///
/// // Owner-occupied units times the share that are single-unit detached
/// let units = approximate_product((74506512.0, 228238.0), (0.824, 0.001));
/// assert_eq!(units.value.round(), 61393366.0);
/// assert_eq!(units.margin_of_error.round(), 202289.0);
/// ```
pub fn approximate_product(a: impl Into<Estimate>, b: impl Into<Estimate>) -> Estimate {
    let a = a.into();
    let b = b.into();

    let product = a.value * b.value;
    let squared_moe =
        a.value.powi(2) * b.margin_of_error.powi(2) + b.value.powi(2) * a.margin_of_error.powi(2);

    Estimate::new(product, squared_moe.sqrt())
}
