//! Ordered, gapless partitions of a value range into bins

use crate::cumulative::CumulativeRanges;
use crate::types::Bin;
use census_core::{Error, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// A validated set of bins sorted by lower bound
///
/// Callers may supply bins in any order. Construction sorts them, then
/// checks that only the first bin is open below, only the last bin is open
/// above, neighbouring bins do not overlap and the total count is positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bin>", into = "Vec<Bin>")]
pub struct BinPartition {
    bins: Vec<Bin>,
    total_count: u64,
}

impl BinPartition {
    /// Create a partition from bins in any order
    pub fn new(mut bins: Vec<Bin>) -> Result<Self> {
        if bins.is_empty() {
            return Err(Error::empty_partition());
        }

        bins.sort_by_key(|b| OrderedFloat(b.lower().unwrap_or(f64::NEG_INFINITY)));

        let last = bins.len() - 1;
        for (i, bin) in bins.iter().enumerate() {
            if bin.is_open_below() && i != 0 {
                return Err(Error::Input(format!(
                    "Only the first bin may have an open lower bound, found {bin}"
                )));
            }
            if bin.is_open_above() && i != last {
                return Err(Error::Input(format!(
                    "Only the last bin may have an open upper bound, found {bin}"
                )));
            }
        }

        for pair in bins.windows(2) {
            if let (Some(upper), Some(next_lower)) = (pair[0].upper(), pair[1].lower()) {
                if upper > next_lower {
                    return Err(Error::Input(format!(
                        "Bins overlap: {} and {}",
                        pair[0], pair[1]
                    )));
                }
            }
        }

        let total_count: u64 = bins.iter().map(Bin::count).sum();
        if total_count == 0 {
            return Err(Error::Data("The total count of all bins must be positive".to_string()));
        }

        trace!(bins = bins.len(), total_count, "built bin partition");
        Ok(Self { bins, total_count })
    }

    /// The bins in ascending order
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Always false, a partition has at least one bin
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Universe size: the sum of all bin counts
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Reported counts as floats, in bin order
    pub fn counts(&self) -> Vec<f64> {
        self.bins.iter().map(|b| b.count() as f64).collect()
    }

    /// Whether the first bin has no lower bound
    pub fn first_is_open(&self) -> bool {
        self.bins.first().is_some_and(Bin::is_open_below)
    }

    /// Whether the last bin has no upper bound
    pub fn last_is_open(&self) -> bool {
        self.bins.last().is_some_and(Bin::is_open_above)
    }

    /// Per-bin count margins of error
    ///
    /// Returns `None` when no bin carries one. A partition where only some
    /// bins carry a margin is an input error.
    pub fn count_margins(&self) -> Result<Option<Vec<f64>>> {
        let margins: Vec<Option<f64>> = self.bins.iter().map(Bin::margin_of_error).collect();
        let present = margins.iter().filter(|m| m.is_some()).count();
        match present {
            0 => Ok(None),
            n if n == margins.len() => Ok(Some(margins.into_iter().flatten().collect())),
            n => Err(Error::Input(format!(
                "Either every bin or no bin must carry a margin of error, {n} of {} do",
                margins.len()
            ))),
        }
    }

    /// Cumulative ranges using the reported counts
    pub fn cumulative(&self) -> CumulativeRanges<'_> {
        CumulativeRanges::build(&self.bins, self.counts())
    }

    /// Cumulative ranges using substitute counts, one per bin
    pub fn cumulative_with_counts(&self, counts: Vec<f64>) -> Result<CumulativeRanges<'_>> {
        if counts.len() != self.bins.len() {
            return Err(Error::InvalidParameter(format!(
                "Expected {} counts, got {}",
                self.bins.len(),
                counts.len()
            )));
        }
        Ok(CumulativeRanges::build(&self.bins, counts))
    }
}

impl TryFrom<Vec<Bin>> for BinPartition {
    type Error = Error;

    fn try_from(bins: Vec<Bin>) -> Result<Self> {
        Self::new(bins)
    }
}

impl From<BinPartition> for Vec<Bin> {
    fn from(partition: BinPartition) -> Self {
        partition.bins
    }
}

impl fmt::Display for BinPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinPartition({} bins, n={})",
            self.bins.len(),
            self.total_count
        )
    }
}
