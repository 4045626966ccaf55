//! Property-based tests for partitions and cumulative ranges

use census_bins::{Bin, BinPartition};
use proptest::prelude::*;

/// Contiguous bins of width 10 with the given counts, supplied in reverse
fn reversed_partition(counts: &[u64]) -> BinPartition {
    let bins = counts
        .iter()
        .enumerate()
        .rev()
        .map(|(i, &n)| Bin::bounded(i as f64 * 10.0, i as f64 * 10.0 + 9.0, n).unwrap())
        .collect();
    BinPartition::new(bins).unwrap()
}

proptest! {
    #[test]
    fn prop_bins_sorted_and_total_preserved(
        counts in prop::collection::vec(0u64..1000, 1..30)
            .prop_filter("positive total", |c| c.iter().sum::<u64>() > 0)
    ) {
        let partition = reversed_partition(&counts);
        prop_assert_eq!(partition.total_count(), counts.iter().sum::<u64>());
        for pair in partition.bins().windows(2) {
            prop_assert!(pair[0].lower() < pair[1].lower());
        }
    }

    #[test]
    fn prop_ranges_are_contiguous_and_cover_total(
        counts in prop::collection::vec(0u64..1000, 1..30)
            .prop_filter("positive total", |c| c.iter().sum::<u64>() > 0)
    ) {
        let partition = reversed_partition(&counts);
        let ranges = partition.cumulative();
        prop_assert_eq!(ranges.ranges()[0].floor, 0.0);
        for pair in ranges.ranges().windows(2) {
            prop_assert_eq!(pair[0].ceiling, pair[1].floor);
        }
        prop_assert_eq!(ranges.ranges().last().unwrap().ceiling, ranges.total());
    }

    #[test]
    fn prop_every_point_in_range_is_located(
        counts in prop::collection::vec(0u64..1000, 1..30)
            .prop_filter("positive total", |c| c.iter().sum::<u64>() > 0),
        fraction in 0.0f64..=1.0,
    ) {
        let partition = reversed_partition(&counts);
        let ranges = partition.cumulative();
        let point = fraction * ranges.total();
        let index = ranges.locate(point, "probe").unwrap();
        prop_assert!(ranges.ranges()[index].contains(point));
        prop_assert!(ranges.find(ranges.total() + 1.0).is_none());
    }
}
