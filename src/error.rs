// src/error.rs
use std::fmt;

/// Error types for the real-option valuation pipeline
#[derive(Debug, Clone)]
pub enum LsmcError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Matrices or schedules whose dimensions do not line up
    ShapeMismatch {
        context: String,
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Least-squares fit could not be computed
    RegressionFailure { reason: String },

    /// Numerical instability (non-finite aggregates, empty samples)
    NumericalInstability { method: String, reason: String },
}

impl fmt::Display for LsmcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LsmcError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            LsmcError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            LsmcError::ShapeMismatch {
                context,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Shape mismatch in {}: expected {}x{}, found {}x{}",
                    context, expected.0, expected.1, found.0, found.1
                )
            }
            LsmcError::RegressionFailure { reason } => {
                write!(f, "Regression failed: {}", reason)
            }
            LsmcError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for LsmcError {}

/// Result type alias for valuation operations
pub type LsmcResult<T> = Result<T, LsmcError>;

/// Validation utilities
pub mod validation {
    use super::{LsmcError, LsmcResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> LsmcResult<()> {
        if value.is_nan() || value <= 0.0 {
            Err(LsmcError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> LsmcResult<()> {
        if value.is_nan() || value < 0.0 {
            Err(LsmcError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is within a range
    pub fn validate_range(name: &str, value: f64, min: f64, max: f64) -> LsmcResult<()> {
        if value.is_nan() || value < min || value > max {
            Err(LsmcError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: format!("must be in range [{}, {}]", min, max),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> LsmcResult<()> {
        if !value.is_finite() {
            Err(LsmcError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a per-period discount rate (must exceed -100%)
    pub fn validate_discount_rate(name: &str, rate: f64) -> LsmcResult<()> {
        validate_finite(name, rate)?;
        if rate <= -1.0 {
            Err(LsmcError::InvalidParameters {
                parameter: name.to_string(),
                value: rate,
                constraint: "must be greater than -1".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate simulation count
    pub fn validate_paths(paths: usize) -> LsmcResult<()> {
        if paths == 0 {
            Err(LsmcError::InvalidConfiguration {
                field: "sims".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if paths > 1_000_000_000 {
            Err(LsmcError::InvalidConfiguration {
                field: "sims".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate horizon length in periods
    pub fn validate_steps(steps: usize) -> LsmcResult<()> {
        if steps == 0 {
            Err(LsmcError::InvalidConfiguration {
                field: "horizon".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if steps > 100_000 {
            Err(LsmcError::InvalidConfiguration {
                field: "horizon".to_string(),
                reason: "exceeds maximum allowed (100,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
