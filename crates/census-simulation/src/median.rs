//! Simulated median for bins carrying count margins of error
//!
//! Every replicate perturbs the counts, rebuilds the cumulative ranges from
//! the perturbed counts and locates the median exactly as the analytical
//! estimator does. Replicates are then reduced to a mean and an asymmetric
//! margin of error, unless any replicate could not produce an ordinary
//! interpolated value.

use crate::{
    aggregate::SimulationSummary,
    config::{replicate_rng, SimulationConfig},
    perturb::{CountPerturbation, CountPerturber},
    replicate::{ReplicateOutcome, UndefinedReason},
};
use census_bins::BinPartition;
use census_core::{Diagnostic, Error, Estimation, Result};
use census_median::{apply_jam_policy, JamValues};
use tracing::{debug, instrument};

/// Monte-Carlo median estimator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulatedMedian {
    jam_values: Option<JamValues>,
    config: SimulationConfig,
}

impl SimulatedMedian {
    /// Create an estimator with the given simulation settings
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            jam_values: None,
            config,
        }
    }

    /// Set the jam values applied per replicate
    pub fn with_jam_values(mut self, jam_values: impl Into<JamValues>) -> Self {
        self.jam_values = Some(jam_values.into());
        self
    }

    /// Set the jam values from an optional value
    pub fn jam_values(mut self, jam_values: Option<JamValues>) -> Self {
        self.jam_values = jam_values;
        self
    }

    /// The simulation settings
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every replicate and return its outcome, in replicate order
    pub fn replicates(&self, partition: &BinPartition) -> Result<Vec<ReplicateOutcome>> {
        self.config.validate()?;
        let margins = partition.count_margins()?.ok_or_else(|| {
            Error::Input(
                "Simulating a median requires a count margin of error on every bin".to_string(),
            )
        })?;
        let perturber =
            CountPerturber::new(&partition.counts(), &margins, CountPerturbation::Unclamped)?;

        let base_seed = self.config.base_seed();
        debug!(base_seed, simulations = self.config.simulations, "running median replicates");

        self.config
            .strategy
            .execute_batch(self.config.simulations, |i| {
                let mut rng = replicate_rng(base_seed, i);
                let counts = perturber.sample(&mut rng);
                self.replicate(partition, counts)
            })
            .into_iter()
            .collect()
    }

    fn replicate(&self, partition: &BinPartition, counts: Vec<f64>) -> Result<ReplicateOutcome> {
        let ranges = partition.cumulative_with_counts(counts)?;
        let total = ranges.total();
        if total <= 0.0 {
            return Ok(ReplicateOutcome::Undefined(UndefinedReason::Unlocated));
        }
        let midpoint = total / 2.0;
        match ranges.find(midpoint) {
            Some(index) => {
                let placement =
                    apply_jam_policy(&ranges.ranges()[index], midpoint, self.jam_values.as_ref())?;
                Ok(placement.into())
            }
            None => Ok(ReplicateOutcome::Undefined(UndefinedReason::Unlocated)),
        }
    }

    /// Estimate the median and its margin of error
    #[instrument(
        skip(self, partition),
        fields(bins = partition.len(), simulations = self.config.simulations)
    )]
    pub fn estimate(&self, partition: &BinPartition) -> Result<Estimation> {
        match self.summarize(partition)? {
            Ok(summary) => Ok(summary.to_estimation()),
            Err(diagnostic) => Ok(Estimation::undetermined(diagnostic)),
        }
    }

    /// Summarize the replicates, or name the condition that prevents it
    pub fn summarize(
        &self,
        partition: &BinPartition,
    ) -> Result<std::result::Result<SimulationSummary, Diagnostic>> {
        let outcomes = self.replicates(partition)?;
        match interpolated_values(&outcomes) {
            Ok(values) => {
                SimulationSummary::from_replicates(&values, self.config.confidence_level).map(Ok)
            }
            Err(diagnostic) => Ok(Err(diagnostic)),
        }
    }
}

/// Replicate values when every replicate was interpolated
///
/// An undefined replicate takes precedence over a jam substitution.
pub fn interpolated_values(
    outcomes: &[ReplicateOutcome],
) -> std::result::Result<Vec<f64>, Diagnostic> {
    let mut jammed = 0usize;
    let mut unlocated = 0usize;
    let mut open = 0usize;
    let mut values = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            ReplicateOutcome::Interpolated(v) => values.push(*v),
            ReplicateOutcome::JamSubstituted(_) => jammed += 1,
            ReplicateOutcome::Undefined(UndefinedReason::OpenBin) => open += 1,
            ReplicateOutcome::Undefined(UndefinedReason::Unlocated) => unlocated += 1,
        }
    }
    debug!(interpolated = values.len(), jammed, open, unlocated, "classified replicates");

    if open > 0 {
        Err(Diagnostic::JamValueMissing)
    } else if unlocated > 0 {
        Err(Diagnostic::ReplicateUnlocated)
    } else if jammed > 0 {
        Err(Diagnostic::JamValueResultInvalid)
    } else {
        Ok(values)
    }
}
