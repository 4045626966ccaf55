//! Worked examples from the ACS general handbook, chapter 8, plus
//! invariants of the propagation rules

use approx::assert_relative_eq;
use census_propagation::*;
use proptest::prelude::*;

// Never-married female population, Table 8.1
const NMF_FAIRFAX: (f64, f64) = (135173.0, 3860.0);
const NMF_ARLINGTON: (f64, f64) = (43104.0, 2642.0);
const NMF_ALEXANDRIA: (f64, f64) = (24842.0, 1957.0);

#[test]
fn test_sum_table_8_1() {
    let total = approximate_sum([NMF_FAIRFAX, NMF_ARLINGTON, NMF_ALEXANDRIA]);
    assert_eq!(total.value, 203119.0);
    assert_eq!(total.margin_of_error, 5070.4647715963865);
}

#[test]
fn test_proportion_table_8_4() {
    // Total females aged 15 and older
    let denominator = approximate_sum([(466037.0, 391.0), (97360.0, 572.0), (67101.0, 459.0)]);
    let numerator = Estimate::new(203119.0, 5070.0);

    let proportion = approximate_proportion(numerator, denominator).unwrap();
    assert_relative_eq!(proportion.value, 0.322, epsilon = 5e-4);
    assert_relative_eq!(proportion.margin_of_error, 0.008, epsilon = 5e-4);

    // Swapping the arguments makes the numerator a superset
    assert!(matches!(
        approximate_proportion(denominator, numerator),
        Err(Error::Data(_))
    ));
}

#[test]
fn test_ratio_table_8_5() {
    // Never-married males
    let numerator = approximate_sum([(156720.0, 4222.0), (44613.0, 2819.0), (25507.0, 2259.0)]);
    let ratio = approximate_ratio(numerator, (203119.0, 5070.0));
    assert_relative_eq!(ratio.value, 1.117, epsilon = 5e-4);
    assert_relative_eq!(ratio.margin_of_error, 0.039, epsilon = 5e-4);
}

#[test]
fn test_product_owner_occupied_units() {
    let product = approximate_product((74506512.0, 228238.0), (0.824, 0.001));
    assert_relative_eq!(product.value, 61393366.0, epsilon = 0.5);
    assert_relative_eq!(product.margin_of_error, 202289.0, epsilon = 0.5);
}

#[test]
fn test_percent_change_fairfax() {
    let change = approximate_percent_change((135173.0, 3860.0), (139301.0, 4047.0));
    assert_relative_eq!(change.value, 3.0538643072211165, epsilon = 1e-12);
    assert_relative_eq!(change.margin_of_error, 4.198069852261231, epsilon = 1e-12);

    let ratio = approximate_ratio((139301.0, 4047.0), (135173.0, 3860.0));
    assert_eq!(change.margin_of_error, 100.0 * ratio.margin_of_error);
}

proptest! {
    #[test]
    fn prop_sum_margin_at_least_largest_nonzero_margin(
        pairs in prop::collection::vec((1.0f64..1e6, 0.0f64..1e4), 1..20)
    ) {
        let total = approximate_sum(pairs.clone());
        let largest = pairs.iter().map(|p| p.1).fold(0.0, f64::max);
        prop_assert!(total.margin_of_error >= largest - 1e-9);
        let naive: f64 = pairs.iter().map(|p| p.1).sum();
        prop_assert!(total.margin_of_error <= naive + 1e-9);
    }

    #[test]
    fn prop_ratio_is_always_finite(
        num in (1.0f64..1e6, 0.0f64..1e5),
        den in (1.0f64..1e6, 0.0f64..1e5),
    ) {
        let ratio = approximate_ratio(num, den);
        prop_assert!(ratio.value.is_finite());
        prop_assert!(ratio.margin_of_error.is_finite());
        prop_assert!(ratio.margin_of_error >= 0.0);
    }

    #[test]
    fn prop_proportion_failure_implies_finite_ratio(
        num in (1.0f64..1e6, 0.0f64..1e5),
        den in (1.0f64..1e6, 0.0f64..1e5),
    ) {
        if approximate_proportion(num, den).is_err() {
            let ratio = approximate_ratio(num, den);
            prop_assert!(ratio.margin_of_error.is_finite());
        }
    }
}
