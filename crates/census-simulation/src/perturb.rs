//! Gaussian perturbation of bin counts
//!
//! Each replicate redraws every bin's count from `N(count, (moe / 1.645)²)`
//! and rounds to the nearest integer, ties to even.

use census_core::{survey, Error, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Treatment of negative perturbed counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountPerturbation {
    /// Negative draws flow through to the cumulative ranges
    #[default]
    Unclamped,
    /// Negative draws become zero
    ClampAtZero,
}

/// Per-bin count distributions for one estimation call
#[derive(Debug, Clone)]
pub struct CountPerturber {
    distributions: Vec<Normal<f64>>,
    mode: CountPerturbation,
}

impl CountPerturber {
    /// Build the count distributions from reported counts and their margins of error
    pub fn new(counts: &[f64], margins: &[f64], mode: CountPerturbation) -> Result<Self> {
        if counts.len() != margins.len() {
            return Err(Error::InvalidParameter(format!(
                "Expected {} count margins of error, got {}",
                counts.len(),
                margins.len()
            )));
        }
        let distributions = counts
            .iter()
            .zip(margins)
            .map(|(&count, &moe)| {
                Normal::new(count, survey::standard_error(moe)).map_err(|e| {
                    Error::Computation(format!("Count distribution for n={count}: {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            distributions,
            mode,
        })
    }

    /// Number of bins perturbed
    pub fn len(&self) -> usize {
        self.distributions.len()
    }

    /// Check if there are no bins
    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }

    /// Draw one perturbed count per bin
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.distributions
            .iter()
            .map(|normal| {
                let count = normal.sample(rng).round_ties_even();
                match self.mode {
                    CountPerturbation::Unclamped => count,
                    CountPerturbation::ClampAtZero => count.max(0.0),
                }
            })
            .collect()
    }
}
