//! Core types for binned count data

use census_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One category of a binned distribution
///
/// A bound of `None` is open: the first bin may have no lower bound and the
/// last bin may have no upper bound. Interior bounds are always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BinRecord", into = "BinRecord")]
pub struct Bin {
    lower: Option<f64>,
    upper: Option<f64>,
    count: u64,
    margin_of_error: Option<f64>,
}

impl Bin {
    /// Create a new bin, validating its bounds
    pub fn new(lower: Option<f64>, upper: Option<f64>, count: u64) -> Result<Self> {
        if lower.is_some_and(|l| !l.is_finite()) || upper.is_some_and(|u| !u.is_finite()) {
            return Err(Error::non_finite("bin bounds"));
        }
        if let (Some(l), Some(u)) = (lower, upper) {
            if l > u {
                return Err(Error::Input(format!(
                    "Bin lower bound {l} exceeds its upper bound {u}"
                )));
            }
        }
        Ok(Self {
            lower,
            upper,
            count,
            margin_of_error: None,
        })
    }

    /// A bin with both bounds known
    pub fn bounded(lower: f64, upper: f64, count: u64) -> Result<Self> {
        Self::new(Some(lower), Some(upper), count)
    }

    /// A first bin with no lower bound
    pub fn open_below(upper: f64, count: u64) -> Result<Self> {
        Self::new(None, Some(upper), count)
    }

    /// A last bin with no upper bound
    pub fn open_above(lower: f64, count: u64) -> Result<Self> {
        Self::new(Some(lower), None, count)
    }

    /// Attach the margin of error published for this bin's count
    pub fn with_margin_of_error(mut self, margin_of_error: f64) -> Result<Self> {
        if !margin_of_error.is_finite() || margin_of_error < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Count margin of error {margin_of_error} must be finite and non-negative"
            )));
        }
        self.margin_of_error = Some(margin_of_error);
        Ok(self)
    }

    /// Lower bound, `None` when open
    pub fn lower(&self) -> Option<f64> {
        self.lower
    }

    /// Upper bound, `None` when open
    pub fn upper(&self) -> Option<f64> {
        self.upper
    }

    /// Lower bound with an open bound read as NaN
    pub fn lower_or_nan(&self) -> f64 {
        self.lower.unwrap_or(f64::NAN)
    }

    /// Upper bound with an open bound read as NaN
    pub fn upper_or_nan(&self) -> f64 {
        self.upper.unwrap_or(f64::NAN)
    }

    /// Number of units reported in this bin
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Margin of error of the count, if published
    pub fn margin_of_error(&self) -> Option<f64> {
        self.margin_of_error
    }

    /// Whether the lower bound is open
    pub fn is_open_below(&self) -> bool {
        self.lower.is_none()
    }

    /// Whether the upper bound is open
    pub fn is_open_above(&self) -> bool {
        self.upper.is_none()
    }

    /// Whether either bound is open
    pub fn is_open(&self) -> bool {
        self.is_open_below() || self.is_open_above()
    }

    /// Width of the bin, `None` for open bins
    pub fn width(&self) -> Option<f64> {
        Some(self.upper? - self.lower?)
    }

    /// Check if a value falls within this bin (both ends inclusive)
    pub fn contains(&self, value: f64) -> bool {
        self.lower.map_or(true, |l| value >= l) && self.upper.map_or(true, |u| value <= u)
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower = self.lower.map_or_else(|| "-inf".to_string(), |l| l.to_string());
        let upper = self.upper.map_or_else(|| "+inf".to_string(), |u| u.to_string());
        write!(f, "[{lower}, {upper}]: n={}", self.count)?;
        if let Some(moe) = self.margin_of_error {
            write!(f, " ± {moe}")?;
        }
        Ok(())
    }
}

/// Serialized form of a bin, using the field names of published tables
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BinRecord {
    min: Option<f64>,
    max: Option<f64>,
    n: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    moe: Option<f64>,
}

impl TryFrom<BinRecord> for Bin {
    type Error = Error;

    fn try_from(record: BinRecord) -> Result<Self> {
        let bin = Bin::new(record.min, record.max, record.n)?;
        match record.moe {
            Some(moe) => bin.with_margin_of_error(moe),
            None => Ok(bin),
        }
    }
}

impl From<Bin> for BinRecord {
    fn from(bin: Bin) -> Self {
        Self {
            min: bin.lower,
            max: bin.upper,
            n: bin.count,
            moe: bin.margin_of_error,
        }
    }
}
