//! Error types for census margin-of-error estimation
//!
//! Provides a unified error type for all census-aggregator crates.

use thiserror::Error;

/// Core error type for estimation operations
#[derive(Error, Debug)]
pub enum Error {
    /// The supplied counts cannot support the requested computation
    #[error("Data error: {0}")]
    Data(String),

    /// Required caller input is missing or inconsistent
    #[error("Input error: {0}")]
    Input(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} bins, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a partition without bins
    pub fn empty_partition() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a point on the count scale that no bin covers
    pub fn point_outside_ranges(label: &str, point: f64) -> Self {
        Self::Data(format!(
            "The {label} point {point} does not fall within a data range"
        ))
    }

    /// Create an error for a proportion whose numerator is not a subset of its denominator
    pub fn negative_radicand() -> Self {
        Self::Data(
            "The margin of error is less than zero. Use a ratio instead of a proportion"
                .to_string(),
        )
    }

    /// Create an error for a jam value that is needed but was not supplied
    pub fn missing_jam_value(side: &str) -> Self {
        Self::Input(format!("A {side} jam value input is needed"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Data("not enough observations".to_string());
        assert_eq!(err.to_string(), "Data error: not enough observations");

        let err = Error::Input("no upper bound".to_string());
        assert_eq!(err.to_string(), "Input error: no upper bound");

        let err = Error::InvalidParameter("simulations must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameter: simulations must be positive"
        );

        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 bins, got 1"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_partition() {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::point_outside_ranges("lower p", 7.5);
        assert_eq!(
            err.to_string(),
            "Data error: The lower p point 7.5 does not fall within a data range"
        );

        assert!(matches!(Error::negative_radicand(), Error::Data(_)));

        let err = Error::missing_jam_value("upper");
        assert_eq!(err.to_string(), "Input error: A upper jam value input is needed");

        let err = Error::non_finite("bin bounds");
        assert!(err.to_string().contains("bin bounds"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom error message")),
            _ => panic!("Wrong error type"),
        }
    }
}
