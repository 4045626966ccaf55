//! Jam values for medians that fall in an open-ended bin
//!
//! When the median lands in a bin with no lower or no upper bound it cannot
//! be interpolated. Survey documentation publishes "jam values" for such
//! tables, which are reported in place of the median.

use census_bins::CumulativeBin;
use census_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Substitute values for the open first and last bins
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JamValues {
    /// Reported when the median falls in the open first bin
    pub low: Option<f64>,
    /// Reported when the median falls in the open last bin
    pub high: Option<f64>,
}

impl JamValues {
    /// Jam values for both ends
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    /// Only a lower jam value
    pub fn low(low: f64) -> Self {
        Self {
            low: Some(low),
            high: None,
        }
    }

    /// Only an upper jam value
    pub fn high(high: f64) -> Self {
        Self {
            low: None,
            high: Some(high),
        }
    }

    /// Whether no value at all was supplied
    pub fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }

    /// Check whether `value` is one of the jam values
    pub fn contains(&self, value: f64) -> bool {
        self.low == Some(value) || self.high == Some(value)
    }
}

impl From<(f64, f64)> for JamValues {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

/// Outcome of placing the median within its bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MedianPlacement {
    /// Linearly interpolated within a bounded bin
    Interpolated(f64),
    /// The bin is open and a jam value stands in for the median
    JamSubstituted(f64),
    /// The bin is open and no jam values were supplied
    Undetermined,
}

impl MedianPlacement {
    /// The reported value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Interpolated(v) | Self::JamSubstituted(v) => Some(*v),
            Self::Undetermined => None,
        }
    }
}

/// Place the median for a midpoint located in `bin`
///
/// An upper-open bin takes the high jam value, a lower-open bin the low one.
/// If jam values were supplied but the needed side is absent, that is an
/// input error.
pub fn apply_jam_policy(
    bin: &CumulativeBin<'_>,
    midpoint: f64,
    jam_values: Option<&JamValues>,
) -> Result<MedianPlacement> {
    if !bin.bin.is_open() {
        return Ok(MedianPlacement::Interpolated(bin.interpolate(midpoint)));
    }

    let jam_values = match jam_values {
        Some(jam) if !jam.is_empty() => jam,
        _ => return Ok(MedianPlacement::Undetermined),
    };

    let substitute = if bin.bin.is_open_above() {
        jam_values.high.ok_or_else(|| Error::missing_jam_value("upper"))?
    } else {
        jam_values.low.ok_or_else(|| Error::missing_jam_value("lower"))?
    };
    debug!(substitute, "median falls in an open bin, using jam value");
    Ok(MedianPlacement::JamSubstituted(substitute))
}
