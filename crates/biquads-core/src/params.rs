//! Filter parameters and their validation.
//!
//! Coefficient derivation assumes sane inputs and never guards internally.
//! Everything that builds a [`Filter`](crate::Filter) goes through
//! [`FilterParameters::validate`] first.

use core::f64::consts::{FRAC_1_SQRT_2, LN_2};
use libm::{asinh, sinh};

use crate::error::FilterError;

/// Default cutoff frequency in Hz.
pub const DEFAULT_CUTOFF: f64 = 1000.0;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;

/// Default Q factor (Butterworth).
pub const DEFAULT_Q: f64 = FRAC_1_SQRT_2;

/// Logical parameters of a biquad filter.
///
/// These are the values the caller set, not values recovered from the
/// coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterParameters {
    /// Cutoff (or center) frequency in Hz.
    pub cutoff: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Quality factor.
    pub q_factor: f64,
    /// Gain in dB, used by peaking and shelving shapes only.
    pub gain: f64,
    /// Band-pass only: peak gain equals Q instead of 0 dB.
    #[cfg_attr(feature = "serde", serde(default))]
    pub constant_skirt_gain: bool,
}

impl FilterParameters {
    /// Creates a parameter set with constant skirt gain disabled.
    pub const fn new(cutoff: f64, sample_rate: u32, q_factor: f64, gain: f64) -> Self {
        Self {
            cutoff,
            sample_rate,
            q_factor,
            gain,
            constant_skirt_gain: false,
        }
    }

    /// Nyquist frequency for the current sample rate.
    #[inline]
    pub fn nyquist(&self) -> f64 {
        f64::from(self.sample_rate) / 2.0
    }

    /// Checks the parameters, naming the first one that is out of range.
    ///
    /// Rejects a zero sample rate, a cutoff outside `(0, nyquist)`, a
    /// non-positive Q, and non-finite values.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.sample_rate == 0 {
            return Err(FilterError::invalid("sample_rate", 0.0));
        }
        if self.cutoff.is_nan() || self.cutoff <= 0.0 || self.cutoff >= self.nyquist() {
            return Err(FilterError::invalid("cutoff", self.cutoff));
        }
        if self.q_factor.is_nan() || self.q_factor <= 0.0 || self.q_factor.is_infinite() {
            return Err(FilterError::invalid("q_factor", self.q_factor));
        }
        if !self.gain.is_finite() {
            return Err(FilterError::invalid("gain", self.gain));
        }
        Ok(())
    }
}

impl Default for FilterParameters {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF, DEFAULT_SAMPLE_RATE, DEFAULT_Q, 0.0)
    }
}

/// Returns `false` when the parameters cannot describe a usable filter.
///
/// Fails when `sample_rate` is zero, `cutoff <= 0`, `cutoff >= sample_rate / 2`,
/// or `q_factor <= 0`. NaN inputs fail as well.
///
/// # Example
/// ```rust
/// use biquads_core::verify_parameters;
///
/// assert!(verify_parameters(1000.0, 48_000, 0.707));
/// assert!(!verify_parameters(1000.0, 0, 0.707));
/// assert!(!verify_parameters(24_000.0, 48_000, 0.707));
/// ```
pub fn verify_parameters(cutoff: f64, sample_rate: u32, q_factor: f64) -> bool {
    FilterParameters::new(cutoff, sample_rate, q_factor, 0.0)
        .validate()
        .is_ok()
}

/// Converts a bandwidth in octaves to a Q factor.
///
/// `1/Q = 2·sinh(ln(2)/2 · bandwidth)`. One octave gives Q ≈ 1.414.
#[inline]
pub fn q_from_bandwidth(octaves: f64) -> f64 {
    1.0 / (2.0 * sinh(LN_2 / 2.0 * octaves))
}

/// Converts a Q factor to a bandwidth in octaves.
///
/// Inverse of [`q_from_bandwidth`].
#[inline]
pub fn bandwidth_from_q(q_factor: f64) -> f64 {
    2.0 * asinh(1.0 / (2.0 * q_factor)) / LN_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FilterParameters::default().validate().is_ok());
    }

    #[test]
    fn test_verify_rejects_bad_inputs() {
        assert!(verify_parameters(1000.0, 44_100, 0.707));
        assert!(!verify_parameters(1000.0, 0, 0.707));
        assert!(!verify_parameters(0.0, 44_100, 0.707));
        assert!(!verify_parameters(-10.0, 44_100, 0.707));
        assert!(!verify_parameters(22_050.0, 44_100, 0.707));
        assert!(!verify_parameters(30_000.0, 44_100, 0.707));
        assert!(!verify_parameters(1000.0, 44_100, 0.0));
        assert!(!verify_parameters(1000.0, 44_100, -1.0));
        assert!(!verify_parameters(f64::NAN, 44_100, 0.707));
        assert!(!verify_parameters(1000.0, 44_100, f64::NAN));
    }

    #[test]
    fn test_validate_names_parameter() {
        let params = FilterParameters::new(1000.0, 48_000, 0.0, 0.0);
        assert_eq!(
            params.validate(),
            Err(FilterError::InvalidParameters {
                parameter: "q_factor",
                value: 0.0
            })
        );

        let params = FilterParameters::new(1000.0, 48_000, 1.0, f64::INFINITY);
        assert!(matches!(
            params.validate(),
            Err(FilterError::InvalidParameters {
                parameter: "gain",
                ..
            })
        ));
    }

    #[test]
    fn test_bandwidth_conversions() {
        // One octave is the classic Q ≈ 1.4142
        assert!((q_from_bandwidth(1.0) - 1.4142).abs() < 1e-3);
        for q in [0.3, 0.707, 1.0, 4.0, 12.0] {
            let round_trip = q_from_bandwidth(bandwidth_from_q(q));
            assert!((round_trip - q).abs() < 1e-9, "q={q} came back as {round_trip}");
        }
    }
}
