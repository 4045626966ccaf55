//! Shared utilities for integration tests

#![allow(dead_code)]

use census_aggregator::{Bin, BinPartition};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub use approx::assert_relative_eq;

static TRACING: Once = Once::new();

/// Install a test subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Household income table used throughout the handbook examples
pub const HOUSEHOLD_INCOME: [(f64, f64, u64); 16] = [
    (2499.0, 9999.0, 186),
    (10000.0, 14999.0, 78),
    (15000.0, 19999.0, 98),
    (20000.0, 24999.0, 287),
    (25000.0, 29999.0, 142),
    (30000.0, 34999.0, 90),
    (35000.0, 39999.0, 107),
    (40000.0, 44999.0, 104),
    (45000.0, 49999.0, 178),
    (50000.0, 59999.0, 106),
    (60000.0, 74999.0, 177),
    (75000.0, 99999.0, 262),
    (100000.0, 124999.0, 77),
    (125000.0, 149999.0, 100),
    (150000.0, 199999.0, 58),
    (200000.0, 250001.0, 18),
];

/// The household income table without count margins of error
pub fn household_income() -> anyhow::Result<BinPartition> {
    let bins = HOUSEHOLD_INCOME
        .iter()
        .map(|&(lower, upper, count)| Bin::bounded(lower, upper, count))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BinPartition::new(bins)?)
}

/// The household income table with a margin of error on every count
pub fn household_income_with_margins() -> anyhow::Result<BinPartition> {
    let bins = HOUSEHOLD_INCOME
        .iter()
        .map(|&(lower, upper, count)| {
            Bin::bounded(lower, upper, count)?.with_margin_of_error((count as f64).sqrt() * 3.0)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BinPartition::new(bins)?)
}
