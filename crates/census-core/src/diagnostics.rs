//! Advisory diagnostics returned alongside degraded estimates
//!
//! Estimators never fail for these conditions. They return whatever part of
//! the result is still valid and attach one or more [`Diagnostic`]s, which
//! are also logged at `warn` level.

use std::fmt;
use tracing::warn;

/// A non-fatal condition encountered while estimating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// No design factor was supplied, so no margin of error is reported
    DesignFactorMissing,
    /// No sampling percentage was supplied, so no margin of error is reported
    SamplingPercentageMissing,
    /// The median fell in an open bin and no jam values were supplied
    JamValueMissing,
    /// The median fell in an open bin and a jam value is reported in its place
    JamValueResult,
    /// At least one simulation replicate reported a jam value
    JamValueResultInvalid,
    /// At least one simulation replicate could not locate its midpoint
    ReplicateUnlocated,
}

impl Diagnostic {
    /// Human-readable description of the condition
    pub fn message(&self) -> &'static str {
        match self {
            Self::DesignFactorMissing => {
                "A margin of error cannot be calculated unless you provide a design factor"
            }
            Self::SamplingPercentageMissing => {
                "A margin of error cannot be calculated unless you provide a sampling percentage"
            }
            Self::JamValueMissing => {
                "The median falls in an open-ended bin and no jam values were provided"
            }
            Self::JamValueResult => {
                "The median falls in an open-ended bin; \
                 a jam value is reported instead of an interpolated median"
            }
            Self::JamValueResultInvalid => {
                "A simulated median equals a jam value; \
                 averaging across replicates is not meaningful"
            }
            Self::ReplicateUnlocated => {
                "A simulated midpoint did not fall within any perturbed data range"
            }
        }
    }

    /// Log this diagnostic at `warn` level
    pub fn emit(&self) {
        warn!(diagnostic = ?self, "{}", self.message());
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A possibly degraded estimate and the diagnostics explaining it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Estimation {
    /// The point estimate, absent when it cannot be determined
    pub estimate: Option<f64>,
    /// The margin of error, absent when it cannot be computed
    pub margin_of_error: Option<f64>,
    /// Advisory conditions encountered, in the order they were raised
    pub diagnostics: Vec<Diagnostic>,
}

impl Estimation {
    /// A fully determined estimate
    pub fn complete(estimate: f64, margin_of_error: f64) -> Self {
        Self {
            estimate: Some(estimate),
            margin_of_error: Some(margin_of_error),
            diagnostics: Vec::new(),
        }
    }

    /// An estimate without a margin of error
    pub fn estimate_only(estimate: f64) -> Self {
        Self {
            estimate: Some(estimate),
            margin_of_error: None,
            diagnostics: Vec::new(),
        }
    }

    /// Neither estimate nor margin of error could be determined
    pub fn undetermined(diagnostic: Diagnostic) -> Self {
        Self::default().with_diagnostic(diagnostic)
    }

    /// Attach a diagnostic, logging it
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.push_diagnostic(diagnostic);
        self
    }

    /// Attach a diagnostic in place, logging it
    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        diagnostic.emit();
        self.diagnostics.push(diagnostic);
    }

    /// Check whether a particular diagnostic was raised
    pub fn has_diagnostic(&self, diagnostic: Diagnostic) -> bool {
        self.diagnostics.contains(&diagnostic)
    }

    /// Whether the point estimate is available
    pub fn is_determined(&self) -> bool {
        self.estimate.is_some()
    }

    /// The `(estimate, margin_of_error)` pair
    pub fn pair(&self) -> (Option<f64>, Option<f64>) {
        (self.estimate, self.margin_of_error)
    }
}
