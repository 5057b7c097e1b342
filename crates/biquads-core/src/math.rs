//! Mathematical utility functions for filter design.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Level Conversions
//!
//! - [`db_to_linear`] / [`linear_to_db`] - Convert between dB and linear gain
//! - [`shelf_amplitude`] - The `A` term of the shelving and peaking formulas
//!
//! # Frequency
//!
//! - [`hz_to_omega`] - Frequency to normalized angular frequency

use core::f64::consts::PI;
use libm::{log10, pow};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use biquads_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 1e-12);
/// assert!((db_to_linear(-6.0206) - 0.5).abs() < 1e-4);
/// ```
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    pow(10.0, db / 20.0)
}

/// Convert linear gain to decibels.
///
/// Zero maps to negative infinity.
#[inline]
pub fn linear_to_db(linear: f64) -> f64 {
    20.0 * log10(linear)
}

/// Amplitude term `A = 10^(gain/40)` used by peaking and shelving shapes.
///
/// This is the square root of the linear gain, so 0 dB gives exactly 1.
#[inline]
pub fn shelf_amplitude(gain_db: f64) -> f64 {
    pow(10.0, gain_db / 40.0)
}

/// Convert a frequency in Hz to angular frequency in radians per sample.
///
/// `w0 = 2π·frequency/sample_rate`. A zero sample rate yields infinity.
#[inline]
pub fn hz_to_omega(frequency: f64, sample_rate: u32) -> f64 {
    2.0 * PI * frequency / f64::from(sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_conversions() {
        assert!((db_to_linear(20.0) - 10.0).abs() < 1e-12);
        assert!((linear_to_db(10.0) - 20.0).abs() < 1e-12);
        assert!((linear_to_db(db_to_linear(-3.5)) + 3.5).abs() < 1e-12);
        assert_eq!(linear_to_db(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_shelf_amplitude() {
        assert_eq!(shelf_amplitude(0.0), 1.0);
        // A^2 is the linear gain
        let a = shelf_amplitude(6.0);
        assert!((a * a - db_to_linear(6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_hz_to_omega() {
        assert!((hz_to_omega(12_000.0, 48_000) - PI / 2.0).abs() < 1e-12);
        assert!(hz_to_omega(1000.0, 0).is_infinite());
    }
}
