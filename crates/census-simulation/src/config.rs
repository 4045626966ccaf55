//! Simulation settings shared by the median and mean estimators

use census_core::{Error, ExecutionStrategy, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Default number of replicates per estimation call
pub const DEFAULT_SIMULATIONS: usize = 50;

/// Default confidence level of the reported margin of error
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.90;

/// Settings for a Monte-Carlo estimation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of independent replicates
    pub simulations: usize,
    /// Base seed; replicate `i` is seeded with `seed + i`
    pub seed: Option<u64>,
    /// Two-sided confidence level of the replicate interval
    pub confidence_level: f64,
    /// Sequential or parallel replicate execution
    pub strategy: ExecutionStrategy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
            seed: None,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            strategy: ExecutionStrategy::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of replicates
    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulations = simulations;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Set the execution strategy
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check that the settings describe a runnable simulation
    pub fn validate(&self) -> Result<()> {
        if self.simulations == 0 {
            return Err(Error::InvalidParameter(
                "Number of simulations must be positive".to_string(),
            ));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Confidence level {} must be in (0, 1)",
                self.confidence_level
            )));
        }
        Ok(())
    }

    /// The configured seed, or a fresh one from the thread RNG
    pub fn base_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| thread_rng().gen())
    }

    /// Lower and upper tail probabilities of the interval
    pub fn tails(&self) -> (f64, f64) {
        let alpha = (1.0 - self.confidence_level) / 2.0;
        (alpha, 1.0 - alpha)
    }
}

/// RNG owned by replicate `index` of a run seeded with `base_seed`
pub fn replicate_rng(base_seed: u64, index: usize) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(index as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.simulations, 50);
        assert_eq!(config.seed, None);
        assert_eq!(config.strategy, ExecutionStrategy::Sequential);
        let (lo, hi) = config.tails();
        assert_relative_eq!(lo, 0.05, epsilon = 1e-12);
        assert_relative_eq!(hi, 0.95, epsilon = 1e-12);
    }

    #[test]
    fn test_validate() {
        assert!(SimulationConfig::new().validate().is_ok());
        assert!(SimulationConfig::new().with_simulations(0).validate().is_err());
        assert!(SimulationConfig::new().with_confidence_level(1.0).validate().is_err());
        assert!(SimulationConfig::new().with_confidence_level(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_seeded_base_and_replicate_streams() {
        let config = SimulationConfig::new().with_seed(7);
        assert_eq!(config.base_seed(), 7);

        let a: f64 = replicate_rng(7, 3).gen();
        let b: f64 = replicate_rng(7, 3).gen();
        let c: f64 = replicate_rng(7, 4).gen();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(replicate_rng(u64::MAX, 1).gen::<u64>(), replicate_rng(0, 0).gen::<u64>());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"simulations": 200, "seed": 1}"#).unwrap();
        assert_eq!(config.simulations, 200);
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.confidence_level, DEFAULT_CONFIDENCE_LEVEL);
    }
}
