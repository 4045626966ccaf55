//! Median and margin of error by Census quantile interpolation
//!
//! The median is interpolated linearly within the bin that holds the
//! midpoint of the cumulative counts. Its margin of error follows the Census
//! Bureau's PUMS accuracy guidance:
//!
//! 1. `SE(50%) = design_factor * sqrt((100 - pct) / (n * pct) * 50²) / 100`
//! 2. Interpolate values at the probabilities `0.5 ± SE(50%)`
//! 3. `SE(median) = (upper - lower) / 2`, `MOE = 1.645 * SE(median)`

use crate::jam::{apply_jam_policy, JamValues, MedianPlacement};
use census_bins::{BinPartition, CumulativeRanges};
use census_core::{Diagnostic, Error, Estimation, Result, SamplingPercentage, Z_90};
use tracing::{debug, instrument};

/// Closed-form median estimator for binned counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticalMedian {
    design_factor: Option<f64>,
    sampling_percentage: Option<f64>,
    jam_values: Option<JamValues>,
}

impl AnalyticalMedian {
    /// Create an estimator with no design factor, sampling percentage or jam values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the design factor tailoring the standard error to the survey design
    pub fn with_design_factor(mut self, design_factor: f64) -> Self {
        self.design_factor = Some(design_factor);
        self
    }

    /// Set the sampling percentage of the survey
    pub fn with_sampling_percentage(mut self, sampling_percentage: impl Into<f64>) -> Self {
        self.sampling_percentage = Some(sampling_percentage.into());
        self
    }

    /// Set the jam values reported when the median falls in an open bin
    pub fn with_jam_values(mut self, jam_values: impl Into<JamValues>) -> Self {
        self.jam_values = Some(jam_values.into());
        self
    }

    /// Set the design factor from an optional value
    pub fn design_factor(mut self, design_factor: Option<f64>) -> Self {
        self.design_factor = design_factor;
        self
    }

    /// Set the sampling percentage from an optional value
    pub fn sampling_percentage(mut self, sampling_percentage: Option<f64>) -> Self {
        self.sampling_percentage = sampling_percentage;
        self
    }

    /// Set the jam values from an optional value
    pub fn jam_values(mut self, jam_values: Option<JamValues>) -> Self {
        self.jam_values = jam_values;
        self
    }

    fn check_parameters(&self) -> Result<()> {
        if let Some(design_factor) = self.design_factor {
            if !design_factor.is_finite() || design_factor < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "Design factor {design_factor} must not be negative"
                )));
            }
        }
        if let Some(sampling_percentage) = self.sampling_percentage {
            SamplingPercentage::check(sampling_percentage)?;
        }
        Ok(())
    }

    /// Estimate the median of `partition` and, when possible, its margin of error
    #[instrument(
        skip(self, partition),
        fields(bins = partition.len(), n = partition.total_count())
    )]
    pub fn estimate(&self, partition: &BinPartition) -> Result<Estimation> {
        self.check_parameters()?;

        let ranges = partition.cumulative();
        let n = ranges.total();
        let midpoint = n / 2.0;
        let index = ranges.locate(midpoint, "midpoint")?;
        debug!(midpoint, index, "located median bin");

        let placement =
            apply_jam_policy(&ranges.ranges()[index], midpoint, self.jam_values.as_ref())?;
        let mut estimation = match placement {
            MedianPlacement::Interpolated(median) => Estimation::estimate_only(median),
            MedianPlacement::JamSubstituted(jam) => {
                Estimation::estimate_only(jam).with_diagnostic(Diagnostic::JamValueResult)
            }
            MedianPlacement::Undetermined => {
                return Ok(Estimation::undetermined(Diagnostic::JamValueMissing));
            }
        };

        let inputs = (self.design_factor, self.sampling_percentage);
        let (design_factor, sampling_percentage) = match inputs {
            (Some(df), Some(pct)) => (df, pct),
            (df, pct) => {
                if df.is_none() {
                    estimation.push_diagnostic(Diagnostic::DesignFactorMissing);
                }
                if pct.is_none() {
                    estimation.push_diagnostic(Diagnostic::SamplingPercentageMissing);
                }
                return Ok(estimation);
            }
        };

        let standard_error = (design_factor
            * (((100.0 - sampling_percentage) / (n * sampling_percentage)) * 2500.0).sqrt())
            / 100.0;
        let p_lower = 0.5 - standard_error;
        let p_upper = 0.5 + standard_error;
        debug!(standard_error, p_lower, p_upper, "standard error of a 50% proportion");

        let lower_bound = probability_bound(&ranges, p_lower, "lower p")?;
        let upper_bound = probability_bound(&ranges, p_upper, "upper p")?;

        let standard_error_median = 0.5 * (upper_bound - lower_bound);
        let margin_of_error = Z_90 * standard_error_median;

        estimation.margin_of_error = (!margin_of_error.is_nan()).then_some(margin_of_error);
        Ok(estimation)
    }
}

/// Value at probability `p`, interpolated between the floor of the bin
/// containing `p * n` and the floor of the following bin
fn probability_bound(ranges: &CumulativeRanges<'_>, p: f64, label: &str) -> Result<f64> {
    let n = ranges.total();
    let index = ranges.locate(n * p, label)?;
    let range = &ranges.ranges()[index];
    let next = ranges.get(index + 1);

    let a1 = range.bin.lower_or_nan();
    let a2 = next.map_or_else(|| range.bin.upper_or_nan(), |next| next.bin.lower_or_nan());
    let c1 = range.floor / n;
    let c2 = next.map_or(range.ceiling / n, |next| next.floor / n);

    Ok(((p - c1) / (c2 - c1)) * (a2 - a1) + a1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_bins::Bin;

    fn household_income() -> BinPartition {
        let rows = [
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
        BinPartition::new(
            rows.iter()
                .map(|&(lo, hi, n)| Bin::bounded(lo, hi, n).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_household_income_median() {
        let result = AnalyticalMedian::new()
            .with_design_factor(1.5)
            .with_sampling_percentage(1.0)
            .estimate(&household_income())
            .unwrap();
        assert_eq!(result.pair(), (Some(42211.096153846156), Some(27260.315546093672)));
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_higher_sampling_percentage_narrows_margin() {
        let result = AnalyticalMedian::new()
            .with_design_factor(1.5)
            .with_sampling_percentage(5.0)
            .estimate(&household_income())
            .unwrap();
        assert_eq!(result.estimate, Some(42211.096153846156));
        let moe = result.margin_of_error.unwrap();
        assert!((moe - 10153.200960954948).abs() < 1e-6);
    }

    #[test]
    fn test_missing_inputs_degrade() {
        let partition = household_income();

        let none = AnalyticalMedian::new().estimate(&partition).unwrap();
        assert_eq!(none.margin_of_error, None);
        assert!(none.has_diagnostic(Diagnostic::DesignFactorMissing));
        assert!(none.has_diagnostic(Diagnostic::SamplingPercentageMissing));

        let pct_only = AnalyticalMedian::new()
            .with_sampling_percentage(1.0)
            .estimate(&partition)
            .unwrap();
        assert_eq!(pct_only.margin_of_error, None);
        assert_eq!(pct_only.diagnostics, vec![Diagnostic::DesignFactorMissing]);

        let df_only = AnalyticalMedian::new()
            .with_design_factor(1.5)
            .estimate(&partition)
            .unwrap();
        assert_eq!(df_only.estimate, Some(42211.096153846156));
        assert_eq!(df_only.margin_of_error, None);
        assert_eq!(df_only.diagnostics, vec![Diagnostic::SamplingPercentageMissing]);
    }

    #[test]
    fn test_too_few_observations() {
        let partition = BinPartition::new(vec![
            Bin::bounded(0.0, 49999.0, 5).unwrap(),
            Bin::bounded(50000.0, 99999.0, 5).unwrap(),
            Bin::bounded(100000.0, 199999.0, 5).unwrap(),
            Bin::bounded(200000.0, 250001.0, 5).unwrap(),
        ])
        .unwrap();
        let result = AnalyticalMedian::new()
            .with_design_factor(1.5)
            .with_sampling_percentage(1.0)
            .estimate(&partition);
        assert!(matches!(result, Err(Error::Data(_))));
    }

    #[test]
    fn test_median_in_top_bin() {
        let partition = BinPartition::new(vec![
            Bin::bounded(0.0, 49999.0, 50).unwrap(),
            Bin::bounded(50000.0, 99999.0, 50).unwrap(),
            Bin::bounded(100000.0, 199999.0, 50).unwrap(),
            Bin::bounded(200000.0, 250001.0, 5000).unwrap(),
        ])
        .unwrap();
        let result = AnalyticalMedian::new()
            .with_design_factor(1.5)
            .with_sampling_percentage(1.0)
            .estimate(&partition)
            .unwrap();
        assert!((result.estimate.unwrap() - 224250.485).abs() < 1e-6);
        assert!((result.margin_of_error.unwrap() - 8809.617720594311).abs() < 1e-6);
    }

    #[test]
    fn test_open_top_bin_with_and_without_jam_values() {
        let partition = BinPartition::new(vec![
            Bin::bounded(0.0, 49999.0, 5).unwrap(),
            Bin::open_above(50000.0, 50).unwrap(),
        ])
        .unwrap();

        let result = AnalyticalMedian::new().estimate(&partition).unwrap();
        assert_eq!(result.pair(), (None, None));
        assert_eq!(result.diagnostics, vec![Diagnostic::JamValueMissing]);

        let result = AnalyticalMedian::new()
            .with_jam_values((0.0, 250001.0))
            .with_design_factor(1.0)
            .with_sampling_percentage(12.5)
            .estimate(&partition)
            .unwrap();
        assert_eq!(result.estimate, Some(250001.0));
        assert!(result.has_diagnostic(Diagnostic::JamValueResult));
        // The probability bounds reach into the open bin, so no margin
        assert_eq!(result.margin_of_error, None);

        let result = AnalyticalMedian::new()
            .with_jam_values(JamValues::low(0.0))
            .estimate(&partition);
        assert!(matches!(result, Err(Error::Input(_))));
    }

    #[test]
    fn test_invalid_parameters() {
        let partition = household_income();
        assert!(AnalyticalMedian::new()
            .with_design_factor(-1.0)
            .estimate(&partition)
            .is_err());
        assert!(AnalyticalMedian::new()
            .with_sampling_percentage(0.0)
            .estimate(&partition)
            .is_err());
    }

    #[test]
    fn test_zero_design_factor_gives_zero_margin() {
        let result = AnalyticalMedian::new()
            .with_design_factor(0.0)
            .with_sampling_percentage(1.0)
            .estimate(&household_income())
            .unwrap();
        assert_eq!(result.pair(), (Some(42211.096153846156), Some(0.0)));
        assert!(result.diagnostics.is_empty());
    }
}
