//! Caller-facing estimation functions
//!
//! These functions pick the estimator a table calls for. A median is
//! simulated when every bin carries a count margin of error and computed in
//! closed form when none does. A mean always needs the margins and is
//! always simulated.

use census_bins::BinPartition;
use census_core::{Estimate, Estimation, Result};
use census_median::{AnalyticalMedian, JamValues};
use census_simulation::{SimulatedMean, SimulatedMedian, SimulationConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub use census_propagation::{
    approximate_percent_change, approximate_product, approximate_proportion, approximate_ratio,
    approximate_sum,
};

/// Options for [`approximate_median`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MedianOptions {
    /// Design factor of the survey; closed-form path only
    pub design_factor: Option<f64>,
    /// Sampling percentage of the survey; closed-form path only
    pub sampling_percentage: Option<f64>,
    /// Values reported when the median falls in an open bin
    pub jam_values: Option<JamValues>,
    /// Replicate settings; simulation path only
    pub simulation: SimulationConfig,
}

impl MedianOptions {
    /// Options with nothing supplied
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the design factor
    pub fn with_design_factor(mut self, design_factor: f64) -> Self {
        self.design_factor = Some(design_factor);
        self
    }

    /// Set the sampling percentage
    pub fn with_sampling_percentage(mut self, sampling_percentage: impl Into<f64>) -> Self {
        self.sampling_percentage = Some(sampling_percentage.into());
        self
    }

    /// Set the jam values
    pub fn with_jam_values(mut self, jam_values: impl Into<JamValues>) -> Self {
        self.jam_values = Some(jam_values.into());
        self
    }

    /// Set the number of simulation replicates
    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulation.simulations = simulations;
        self
    }

    /// Set the simulation seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.simulation.seed = Some(seed);
        self
    }

    /// Replace the simulation settings
    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }
}

/// Options for [`approximate_mean`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeanOptions {
    /// Draw the last bin from a Pareto tail
    pub pareto: bool,
    /// Replicate settings
    pub simulation: SimulationConfig,
}

impl MeanOptions {
    /// Uniform draws with the default replicate settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the last bin from a Pareto tail
    ///
    /// A heavy tail (shape at most 2) is drawn value by value, so its cost
    /// grows with the last bin's count.
    pub fn with_pareto(mut self, pareto: bool) -> Self {
        self.pareto = pareto;
        self
    }

    /// Set the number of simulation replicates
    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulation.simulations = simulations;
        self
    }

    /// Set the simulation seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.simulation.seed = Some(seed);
        self
    }

    /// Replace the simulation settings
    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }
}

/// Approximate the median of a binned distribution and its margin of error
///
/// Returns an [`Estimation`] whose estimate or margin of error may be absent,
/// with the diagnostics explaining why. Fails on a partition where only some
/// bins carry a count margin of error, or when a needed point falls outside
/// the cumulative ranges.
///
/// # Example
/// ```rust
/// use census_aggregator::{approximate_median, Bin, BinPartition, MedianOptions};
///
/// let partition = BinPartition::new(vec![
///     Bin::bounded(0.0, 9999.0, 40).unwrap(),
///     Bin::bounded(10000.0, 19999.0, 60).unwrap(),
/// ])
/// .unwrap();
///
/// let median = approximate_median(&partition, &MedianOptions::new()).unwrap();
/// assert!(median.estimate.is_some());
/// assert!(median.margin_of_error.is_none());
/// ```
#[instrument(skip(partition, options), fields(bins = partition.len()))]
pub fn approximate_median(partition: &BinPartition, options: &MedianOptions) -> Result<Estimation> {
    if partition.count_margins()?.is_some() {
        debug!("every bin carries a count margin of error, simulating");
        SimulatedMedian::new(options.simulation)
            .jam_values(options.jam_values)
            .estimate(partition)
    } else {
        AnalyticalMedian::new()
            .design_factor(options.design_factor)
            .sampling_percentage(options.sampling_percentage)
            .jam_values(options.jam_values)
            .estimate(partition)
    }
}

/// Approximate the mean of a binned distribution and its margin of error
///
/// Every bin needs a count margin of error and finite bounds, except that
/// the last bin may be open above when `pareto` is set.
#[instrument(skip(partition, options), fields(bins = partition.len(), pareto = options.pareto))]
pub fn approximate_mean(partition: &BinPartition, options: &MeanOptions) -> Result<Estimate> {
    SimulatedMean::new(options.simulation)
        .with_pareto(options.pareto)
        .estimate(partition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_bins::Bin;
    use census_core::{Diagnostic, Error};

    #[test]
    fn test_median_options_builder() {
        let options = MedianOptions::new()
            .with_design_factor(1.5)
            .with_sampling_percentage(census_core::SamplingPercentage::FiveYearAcs)
            .with_jam_values((2499.0, 250001.0))
            .with_simulations(10)
            .with_seed(3);
        assert_eq!(options.design_factor, Some(1.5));
        assert_eq!(options.sampling_percentage, Some(12.5));
        assert_eq!(options.jam_values, Some(JamValues::new(2499.0, 250001.0)));
        assert_eq!(options.simulation.simulations, 10);
        assert_eq!(options.simulation.seed, Some(3));
    }

    #[test]
    fn test_median_dispatch() {
        let bare = BinPartition::new(vec![
            Bin::bounded(0.0, 9.0, 10).unwrap(),
            Bin::bounded(10.0, 19.0, 10).unwrap(),
        ])
        .unwrap();
        let result = approximate_median(&bare, &MedianOptions::new()).unwrap();
        assert!(result.has_diagnostic(Diagnostic::DesignFactorMissing));

        let with_margins = BinPartition::new(
            bare.bins()
                .iter()
                .map(|bin| bin.clone().with_margin_of_error(0.0).unwrap())
                .collect(),
        )
        .unwrap();
        let result = approximate_median(&with_margins, &MedianOptions::new().with_seed(1)).unwrap();
        assert_eq!(result.margin_of_error, Some(0.0));
        assert!(result.diagnostics.is_empty());

        let mixed = BinPartition::new(vec![
            Bin::bounded(0.0, 9.0, 10).unwrap().with_margin_of_error(1.0).unwrap(),
            Bin::bounded(10.0, 19.0, 10).unwrap(),
        ])
        .unwrap();
        assert!(matches!(
            approximate_median(&mixed, &MedianOptions::new()),
            Err(Error::Input(_))
        ));
    }

    #[test]
    fn test_mean_requires_margins() {
        let bare = BinPartition::new(vec![Bin::bounded(0.0, 9.0, 10).unwrap()]).unwrap();
        assert!(matches!(
            approximate_mean(&bare, &MeanOptions::new()),
            Err(Error::Input(_))
        ));
    }
}
