//! Survey constants
//!
//! Margins of error published with American Community Survey tables are
//! half-widths of 90% confidence intervals.

use crate::{Error, Result};

/// Two-sided 90% confidence z-factor used by the Census Bureau
pub const Z_90: f64 = 1.645;

/// Design factor for published ACS tables
pub const ACS_DESIGN_FACTOR: f64 = 1.0;

/// Convert a 90% margin of error to a standard error
pub fn standard_error(margin_of_error: f64) -> f64 {
    margin_of_error / Z_90
}

/// Convert a standard error to a 90% margin of error
pub fn margin_of_error(standard_error: f64) -> f64 {
    Z_90 * standard_error
}

/// Share of the population sampled by common survey products
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingPercentage {
    /// One-year public use microdata sample
    OneYearPums,
    /// One-year ACS
    OneYearAcs,
    /// Three-year ACS
    ThreeYearAcs,
    /// Five-year ACS
    FiveYearAcs,
}

impl SamplingPercentage {
    /// The sampling percentage, in percent
    pub fn value(&self) -> f64 {
        match self {
            Self::OneYearPums => 1.0,
            Self::OneYearAcs => 2.5,
            Self::ThreeYearAcs => 7.5,
            Self::FiveYearAcs => 12.5,
        }
    }

    /// Validate a caller-supplied sampling percentage
    pub fn check(percentage: f64) -> Result<f64> {
        if !percentage.is_finite() || percentage <= 0.0 || percentage > 100.0 {
            return Err(Error::InvalidParameter(format!(
                "Sampling percentage {percentage} must be in (0, 100]"
            )));
        }
        Ok(percentage)
    }
}

impl From<SamplingPercentage> for f64 {
    fn from(p: SamplingPercentage) -> Self {
        p.value()
    }
}
