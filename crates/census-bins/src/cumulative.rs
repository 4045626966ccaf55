//! Cumulative count ranges over a partition
//!
//! Walking the bins in ascending order and accumulating their counts assigns
//! each bin a closed range `[floor, ceiling]` on the count scale. A point on
//! that scale (a midpoint, or a probability times the total) is located by
//! finding the first bin whose range contains it.
//!
//! Ranges are rebuilt for every estimation call and never written back into
//! the caller's bins. Simulation replicates build them from perturbed counts,
//! which may be negative; a bin whose ceiling falls below its floor then
//! contains no point.

use crate::types::Bin;
use census_core::{Error, Result};
use tracing::trace;

/// A bin together with its range on the cumulative count scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeBin<'a> {
    /// The underlying bin
    pub bin: &'a Bin,
    /// Cumulative count before this bin
    pub floor: f64,
    /// Cumulative count including this bin
    pub ceiling: f64,
    /// Count used for this bin (reported or perturbed)
    pub count: f64,
}

impl CumulativeBin<'_> {
    /// Check if a point on the count scale falls within this bin's range
    pub fn contains(&self, point: f64) -> bool {
        point >= self.floor && point <= self.ceiling
    }

    /// Linear position of `point` within the bin's values
    ///
    /// `lower + (point - floor) / count * (upper - lower)`. Open bounds read
    /// as NaN, so the result is NaN for open bins.
    pub fn interpolate(&self, point: f64) -> f64 {
        let gap_percent = (point - self.floor) / self.count;
        let lower = self.bin.lower_or_nan();
        lower + (self.bin.upper_or_nan() - lower) * gap_percent
    }
}

/// Cumulative ranges for every bin of a partition
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeRanges<'a> {
    ranges: Vec<CumulativeBin<'a>>,
    total: f64,
}

impl<'a> CumulativeRanges<'a> {
    pub(crate) fn build(bins: &'a [Bin], counts: Vec<f64>) -> Self {
        let mut cumulative = 0.0;
        let ranges = bins
            .iter()
            .zip(counts)
            .map(|(bin, count)| {
                let floor = cumulative;
                cumulative += count;
                CumulativeBin {
                    bin,
                    floor,
                    ceiling: cumulative,
                    count,
                }
            })
            .collect();
        Self {
            ranges,
            total: cumulative,
        }
    }

    /// Sum of all counts
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if there are no bins
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// All bins with their ranges, in ascending order
    pub fn ranges(&self) -> &[CumulativeBin<'a>] {
        &self.ranges
    }

    /// The bin at `index`
    pub fn get(&self, index: usize) -> Option<&CumulativeBin<'a>> {
        self.ranges.get(index)
    }

    /// Index of the first bin whose range contains `point`
    pub fn find(&self, point: f64) -> Option<usize> {
        self.ranges.iter().position(|r| r.contains(point))
    }

    /// Index of the bin containing `point`, or a data error naming `label`
    pub fn locate(&self, point: f64, label: &str) -> Result<usize> {
        let index = self
            .find(point)
            .ok_or_else(|| Error::point_outside_ranges(label, point))?;
        trace!(label, point, index, "located point");
        Ok(index)
    }
}
