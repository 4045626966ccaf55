//! Simulated mean for bins carrying count margins of error
//!
//! A replicate perturbs every count (clamped at zero), draws that many
//! values within each bin and divides their sum by the drawn count. Values
//! are uniform within a bin. With `pareto` set, the last bin is instead
//! treated as a Pareto tail anchored at its lower bound, whose shape is
//! estimated from the last two bins:
//!
//! ```text
//! α = (ln(n[k-1] + n[k]) - ln(n[k])) / (ln(lower[k]) - ln(lower[k-1]))
//! ```

use crate::{
    aggregate::SimulationSummary,
    config::{replicate_rng, SimulationConfig},
    perturb::{CountPerturbation, CountPerturber},
};
use census_bins::{Bin, BinPartition};
use census_core::{Error, Estimate, Result};
use rand::Rng;
use rand_distr::{Distribution, Pareto, StandardNormal, Uniform};
use tracing::{debug, instrument};

/// Above this many draws a bin's sum comes from the normal approximation
///
/// Applies to uniform bins, and to Pareto tails whose shape exceeds 2 so
/// that the tail has a finite variance.
pub const EXACT_DRAW_LIMIT: u64 = 100_000;

/// Draws values within one bin
#[derive(Debug, Clone, Copy)]
enum BinSampler {
    Uniform {
        lower: f64,
        upper: f64,
        distribution: Uniform<f64>,
    },
    Pareto {
        scale: f64,
        shape: f64,
        distribution: Pareto<f64>,
    },
}

impl BinSampler {
    fn uniform(lower: f64, upper: f64) -> Self {
        Self::Uniform {
            lower,
            upper,
            distribution: Uniform::new_inclusive(lower, upper),
        }
    }

    fn pareto(scale: f64, shape: f64) -> Result<Self> {
        let distribution = Pareto::new(scale, shape).map_err(|e| {
            Error::Computation(format!(
                "Pareto tail with scale {scale}, shape {shape}: {e}"
            ))
        })?;
        Ok(Self::Pareto {
            scale,
            shape,
            distribution,
        })
    }

    /// Sum of `count` values drawn from this bin
    fn draw_sum<R: Rng + ?Sized>(&self, count: u64, rng: &mut R) -> f64 {
        let k = count as f64;
        match *self {
            Self::Uniform { lower, upper, .. } if count > EXACT_DRAW_LIMIT => {
                // Irwin-Hall: sum of k uniforms on [a, b] ~ N(k(a+b)/2, k(b-a)²/12)
                let mean = k * (lower + upper) / 2.0;
                let sd = (k * (upper - lower).powi(2) / 12.0).sqrt();
                normal_sum(mean, sd, rng)
            }
            Self::Pareto { scale, shape, .. } if count > EXACT_DRAW_LIMIT && shape > 2.0 => {
                // Pareto(s, α) has mean αs/(α-1) and variance s²α/((α-1)²(α-2))
                let mean = k * shape * scale / (shape - 1.0);
                let variance = scale.powi(2) * shape / ((shape - 1.0).powi(2) * (shape - 2.0));
                normal_sum(mean, (k * variance).sqrt(), rng)
            }
            Self::Uniform { distribution, .. } => {
                (0..count).map(|_| distribution.sample(rng)).sum()
            }
            Self::Pareto { distribution, .. } => {
                (0..count).map(|_| distribution.sample(rng)).sum()
            }
        }
    }
}

fn normal_sum<R: Rng + ?Sized>(mean: f64, sd: f64, rng: &mut R) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mean + sd * z
}

/// Monte-Carlo mean estimator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulatedMean {
    pareto: bool,
    config: SimulationConfig,
}

impl SimulatedMean {
    /// Create an estimator with the given simulation settings
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            pareto: false,
            config,
        }
    }

    /// Draw the last bin from a Pareto tail instead of uniformly
    ///
    /// A tail with shape above 2 and more than [`EXACT_DRAW_LIMIT`] values is
    /// summed by its normal approximation. Otherwise every value is drawn,
    /// so the cost of a replicate grows with the last bin's count.
    pub fn with_pareto(mut self, pareto: bool) -> Self {
        self.pareto = pareto;
        self
    }

    /// The simulation settings
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    fn samplers(&self, partition: &BinPartition) -> Result<Vec<BinSampler>> {
        let bins = partition.bins();
        let last = bins.len() - 1;
        bins.iter()
            .enumerate()
            .map(|(i, bin)| {
                if self.pareto && i == last {
                    let shape = pareto_shape(partition)?;
                    let scale = finite_lower(bin, i)?;
                    debug!(scale, shape, "pareto tail for last bin");
                    return BinSampler::pareto(scale, shape);
                }
                let lower = finite_lower(bin, i)?;
                let upper = bin.upper().ok_or_else(|| {
                    Error::Input(format!(
                        "Bin {i} is open above; \
                         drawing values requires finite bounds or a Pareto tail"
                    ))
                })?;
                Ok(BinSampler::uniform(lower, upper))
            })
            .collect()
    }

    /// Run the replicates and summarize their means
    #[instrument(
        skip(self, partition),
        fields(
            bins = partition.len(),
            pareto = self.pareto,
            simulations = self.config.simulations
        )
    )]
    pub fn summarize(&self, partition: &BinPartition) -> Result<SimulationSummary> {
        self.config.validate()?;
        let margins = partition.count_margins()?.ok_or_else(|| {
            Error::Input(
                "Simulating a mean requires a count margin of error on every bin".to_string(),
            )
        })?;
        let samplers = self.samplers(partition)?;
        let perturber =
            CountPerturber::new(&partition.counts(), &margins, CountPerturbation::ClampAtZero)?;

        let base_seed = self.config.base_seed();
        debug!(base_seed, "running mean replicates");

        let means: Vec<f64> = self
            .config
            .strategy
            .execute_batch(self.config.simulations, |i| {
                let mut rng = replicate_rng(base_seed, i);
                let counts = perturber.sample(&mut rng);
                let drawn: f64 = counts.iter().sum();
                if drawn <= 0.0 {
                    return None;
                }
                let total: f64 = samplers
                    .iter()
                    .zip(&counts)
                    .map(|(sampler, &count)| sampler.draw_sum(count as u64, &mut rng))
                    .sum();
                Some(total / drawn)
            })
            .into_iter()
            .flatten()
            .collect();

        let skipped = self.config.simulations - means.len();
        if skipped > 0 {
            debug!(skipped, "replicates with no drawn values were skipped");
        }
        SimulationSummary::from_replicates(&means, self.config.confidence_level)
    }

    /// Estimate the mean and its margin of error
    pub fn estimate(&self, partition: &BinPartition) -> Result<Estimate> {
        self.summarize(partition).map(|summary| summary.to_estimate())
    }
}

fn finite_lower(bin: &Bin, index: usize) -> Result<f64> {
    bin.lower().ok_or_else(|| {
        Error::Input(format!(
            "Bin {index} is open below; drawing values requires finite bounds"
        ))
    })
}

/// Shape of the Pareto tail fitted to the last two bins
pub fn pareto_shape(partition: &BinPartition) -> Result<f64> {
    let bins = partition.bins();
    if bins.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: bins.len(),
        });
    }
    let (previous, last) = (&bins[bins.len() - 2], &bins[bins.len() - 1]);
    let (lower_prev, lower_last) = match (previous.lower(), last.lower()) {
        (Some(a), Some(b)) if a > 0.0 && b > a => (a, b),
        _ => {
            return Err(Error::Input(
                "A Pareto tail needs positive, increasing lower bounds on the last two bins"
                    .to_string(),
            ))
        }
    };
    let (n_prev, n_last) = (previous.count() as f64, last.count() as f64);
    let shape = ((n_prev + n_last).ln() - n_last.ln()) / (lower_last.ln() - lower_prev.ln());
    if !shape.is_finite() || shape <= 0.0 {
        return Err(Error::Computation(format!(
            "Pareto shape {shape} from counts {n_prev} and {n_last} is not positive"
        )));
    }
    Ok(shape)
}
