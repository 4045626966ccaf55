//! The estimate-with-error pair

use serde::{Deserialize, Serialize};
use std::fmt;

/// A published point estimate together with its margin of error
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// The point estimate
    pub value: f64,
    /// Half-width of the 90% confidence interval around `value`
    pub margin_of_error: f64,
}

impl Estimate {
    /// Create a new estimate
    pub fn new(value: f64, margin_of_error: f64) -> Self {
        Self {
            value,
            margin_of_error,
        }
    }

    /// Whether the reported value is exactly zero
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Lower end of the 90% interval
    pub fn lower(&self) -> f64 {
        self.value - self.margin_of_error
    }

    /// Upper end of the 90% interval
    pub fn upper(&self) -> f64 {
        self.value + self.margin_of_error
    }

    /// Split into a `(value, margin_of_error)` tuple
    pub fn into_tuple(self) -> (f64, f64) {
        (self.value, self.margin_of_error)
    }
}

impl From<(f64, f64)> for Estimate {
    fn from((value, margin_of_error): (f64, f64)) -> Self {
        Self::new(value, margin_of_error)
    }
}

impl From<[f64; 2]> for Estimate {
    fn from([value, margin_of_error]: [f64; 2]) -> Self {
        Self::new(value, margin_of_error)
    }
}

impl From<Estimate> for (f64, f64) {
    fn from(estimate: Estimate) -> Self {
        estimate.into_tuple()
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {}", self.value, self.margin_of_error)
    }
}
