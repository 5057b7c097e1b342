//! Error type shared by the filter core.

use thiserror::Error;

/// Errors raised while configuring a filter.
///
/// Processing never fails; only parameter validation and coefficient
/// loading can reject their input.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FilterError {
    /// A filter parameter is outside its valid range.
    #[error("invalid filter parameter '{parameter}': {value}")]
    InvalidParameters {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The derived `a0` coefficient is exactly zero and cannot be normalized.
    #[error("degenerate coefficients: a0 is zero")]
    DegenerateCoefficients,
}

impl FilterError {
    /// Create an invalid parameter error.
    pub fn invalid(parameter: &'static str, value: f64) -> Self {
        FilterError::InvalidParameters { parameter, value }
    }
}
