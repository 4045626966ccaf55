//! Reduction of replicate values to an estimate and margin of error
//!
//! The estimate is the mean of the replicate values. The margin of error is
//! the larger one-sided distance from the estimate to the empirical interval
//! bounds, so an asymmetric replicate distribution is reported conservatively.

use census_core::{Error, Estimate, Estimation, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Quantile of sorted values by linear interpolation between order statistics
///
/// Position `(m - 1) * p`, the default of most array libraries.
pub fn linear_quantile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        m => {
            let position = (m - 1) as f64 * p.clamp(0.0, 1.0);
            let below = position.floor() as usize;
            let above = (below + 1).min(m - 1);
            let weight = position - below as f64;
            sorted[below] + (sorted[above] - sorted[below]) * weight
        }
    }
}

/// Aggregate of a set of replicate values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Mean of the replicate values
    pub estimate: f64,
    /// Larger one-sided spread around the interval
    pub margin_of_error: f64,
    /// Lower interval bound
    pub lower: f64,
    /// Upper interval bound
    pub upper: f64,
    /// Number of replicate values aggregated
    pub replicates: usize,
}

impl SimulationSummary {
    /// Summarize replicate values at the given confidence level
    pub fn from_replicates(values: &[f64], confidence_level: f64) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::Data(
                "No simulation replicate produced a value".to_string(),
            ));
        }
        let estimate = values.iter().mean();

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let alpha = (1.0 - confidence_level) / 2.0;
        let lower = linear_quantile(&sorted, alpha);
        let upper = linear_quantile(&sorted, 1.0 - alpha);

        Ok(Self {
            estimate,
            margin_of_error: (upper - estimate).max(estimate - lower),
            lower,
            upper,
            replicates: values.len(),
        })
    }

    /// Interval width
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// The estimate with its margin of error
    pub fn to_estimate(&self) -> Estimate {
        Estimate::new(self.estimate, self.margin_of_error)
    }

    /// A complete [`Estimation`] without diagnostics
    pub fn to_estimation(&self) -> Estimation {
        Estimation::complete(self.estimate, self.margin_of_error)
    }
}
