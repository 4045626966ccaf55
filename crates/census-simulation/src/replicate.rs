//! Outcome of a single simulation replicate

use census_median::MedianPlacement;
use std::fmt;

/// Why a replicate produced no value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UndefinedReason {
    /// The midpoint fell in an open bin and no jam values were supplied
    OpenBin,
    /// The midpoint fell outside every perturbed range, or the perturbed
    /// total was not positive
    Unlocated,
}

/// Result of one median replicate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplicateOutcome {
    /// Interpolated within a bounded bin
    Interpolated(f64),
    /// A jam value stood in for the median
    JamSubstituted(f64),
    /// No value could be produced
    Undefined(UndefinedReason),
}

impl ReplicateOutcome {
    /// The replicate's value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Interpolated(v) | Self::JamSubstituted(v) => Some(*v),
            Self::Undefined(_) => None,
        }
    }

    /// Whether the replicate produced no value
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined(_))
    }
}

impl From<MedianPlacement> for ReplicateOutcome {
    fn from(placement: MedianPlacement) -> Self {
        match placement {
            MedianPlacement::Interpolated(v) if v.is_finite() => Self::Interpolated(v),
            MedianPlacement::Interpolated(_) => Self::Undefined(UndefinedReason::Unlocated),
            MedianPlacement::JamSubstituted(v) => Self::JamSubstituted(v),
            MedianPlacement::Undetermined => Self::Undefined(UndefinedReason::OpenBin),
        }
    }
}

impl fmt::Display for ReplicateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interpolated(v) => write!(f, "{v}"),
            Self::JamSubstituted(v) => write!(f, "{v} (jam)"),
            Self::Undefined(reason) => write!(f, "undefined ({reason:?})"),
        }
    }
}
