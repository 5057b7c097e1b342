//! Biquad coefficient derivation.
//!
//! Coefficient calculation uses the RBJ Audio EQ Cookbook formulas. Every
//! shape shares the same pre-warp:
//!
//! ```text
//! w0    = 2π·cutoff/sample_rate
//! alpha = sin(w0) / (2·Q)
//! A     = 10^(gain/40)        (peaking and shelving shapes only)
//! ```
//!
//! Derivation is a total function over the reals: no clamping or guarding is
//! applied, so a zero Q or sample rate propagates as inf/NaN. Validation is
//! the job of [`FilterParameters::validate`](crate::FilterParameters::validate).

use libm::{cos, sin, sqrt};

use crate::error::FilterError;
use crate::math::{hz_to_omega, shelf_amplitude};
use crate::params::FilterParameters;
use crate::shape::FilterShape;

/// Biquad transfer function coefficients.
///
/// ```text
///         b0 + b1·z⁻¹ + b2·z⁻²
/// H(z) = ----------------------
///         a0 + a1·z⁻¹ + a2·z⁻²
/// ```
///
/// Derivation produces un-normalized sets; [`Biquad`](crate::Biquad) stores
/// them normalized so that `a0 == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coefficients {
    /// Feedforward coefficient for x[n].
    pub b0: f64,
    /// Feedforward coefficient for x[n-1].
    pub b1: f64,
    /// Feedforward coefficient for x[n-2].
    pub b2: f64,
    /// Output scale; 1 once normalized.
    pub a0: f64,
    /// Feedback coefficient for y[n-1].
    pub a1: f64,
    /// Feedback coefficient for y[n-2].
    pub a2: f64,
}

impl Coefficients {
    /// Passthrough: `y[n] = x[n]`.
    pub const IDENTITY: Coefficients = Coefficients::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Creates a coefficient set in `(b0, b1, b2, a0, a1, a2)` order.
    pub const fn new(b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) -> Self {
        Self {
            b0,
            b1,
            b2,
            a0,
            a1,
            a2,
        }
    }

    /// Derives the coefficients of `shape` for the given parameters.
    pub fn derive(shape: FilterShape, params: &FilterParameters) -> Self {
        let FilterParameters {
            cutoff,
            sample_rate,
            q_factor,
            gain,
            constant_skirt_gain,
        } = *params;

        match shape {
            FilterShape::LowPass => low_pass_coefficients(cutoff, q_factor, sample_rate),
            FilterShape::HighPass => high_pass_coefficients(cutoff, q_factor, sample_rate),
            FilterShape::BandPass => {
                band_pass_coefficients(cutoff, q_factor, constant_skirt_gain, sample_rate)
            }
            FilterShape::AllPass => all_pass_coefficients(cutoff, q_factor, sample_rate),
            FilterShape::Notch => notch_coefficients(cutoff, q_factor, sample_rate),
            FilterShape::PeakingEq => peaking_eq_coefficients(cutoff, q_factor, gain, sample_rate),
            FilterShape::LowShelf => low_shelf_coefficients(cutoff, q_factor, gain, sample_rate),
            FilterShape::HighShelf => high_shelf_coefficients(cutoff, q_factor, gain, sample_rate),
        }
    }

    /// Divides every coefficient by `a0`.
    ///
    /// Fails only when `a0` is exactly zero. NaN and infinite values pass
    /// through untouched.
    pub fn normalized(&self) -> Result<Self, FilterError> {
        if self.a0 == 0.0 {
            return Err(FilterError::DegenerateCoefficients);
        }
        let a0_inv = 1.0 / self.a0;
        Ok(Self {
            b0: self.b0 * a0_inv,
            b1: self.b1 * a0_inv,
            b2: self.b2 * a0_inv,
            a0: 1.0,
            a1: self.a1 * a0_inv,
            a2: self.a2 * a0_inv,
        })
    }

    /// True when no coefficient is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|c| c.is_finite())
    }

    /// Coefficients as `[b0, b1, b2, a0, a1, a2]`.
    pub const fn as_array(&self) -> [f64; 6] {
        [self.b0, self.b1, self.b2, self.a0, self.a1, self.a2]
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 6]> for Coefficients {
    fn from([b0, b1, b2, a0, a1, a2]: [f64; 6]) -> Self {
        Self::new(b0, b1, b2, a0, a1, a2)
    }
}

/// Shared pre-warp: `(cos(w0), alpha)`.
#[inline]
fn prewarp(frequency: f64, q: f64, sample_rate: u32) -> (f64, f64) {
    let omega = hz_to_omega(frequency, sample_rate);
    (cos(omega), sin(omega) / (2.0 * q))
}

/// Calculates low-pass filter coefficients.
///
/// # Arguments
///
/// * `frequency` - Cutoff frequency in Hz
/// * `q` - Q factor (0.707 for Butterworth response)
/// * `sample_rate` - Sample rate in Hz
pub fn low_pass_coefficients(frequency: f64, q: f64, sample_rate: u32) -> Coefficients {
    let (cos_omega, alpha) = prewarp(frequency, q, sample_rate);

    let b1 = 1.0 - cos_omega;
    let b0 = b1 / 2.0;

    Coefficients::new(b0, b1, b0, 1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha)
}

/// Calculates high-pass filter coefficients.
///
/// # Arguments
///
/// * `frequency` - Cutoff frequency in Hz
/// * `q` - Q factor (0.707 for Butterworth response)
/// * `sample_rate` - Sample rate in Hz
pub fn high_pass_coefficients(frequency: f64, q: f64, sample_rate: u32) -> Coefficients {
    let (cos_omega, alpha) = prewarp(frequency, q, sample_rate);

    let b0 = (1.0 + cos_omega) / 2.0;
    let b1 = -(1.0 + cos_omega);

    Coefficients::new(b0, b1, b0, 1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha)
}

/// Calculates band-pass filter coefficients.
///
/// With `constant_skirt_gain` the peak gain equals Q; otherwise the peak is
/// fixed at 0 dB.
///
/// # Arguments
///
/// * `frequency` - Center frequency in Hz
/// * `q` - Q factor (bandwidth = frequency / Q)
/// * `constant_skirt_gain` - Select the constant skirt gain variant
/// * `sample_rate` - Sample rate in Hz
pub fn band_pass_coefficients(
    frequency: f64,
    q: f64,
    constant_skirt_gain: bool,
    sample_rate: u32,
) -> Coefficients {
    let (cos_omega, alpha) = prewarp(frequency, q, sample_rate);

    let b0 = if constant_skirt_gain { q * alpha } else { alpha };

    Coefficients::new(b0, 0.0, -b0, 1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha)
}

/// Calculates all-pass filter coefficients.
///
/// Magnitude is unity everywhere; phase crosses -180° at `frequency`.
pub fn all_pass_coefficients(frequency: f64, q: f64, sample_rate: u32) -> Coefficients {
    let (cos_omega, alpha) = prewarp(frequency, q, sample_rate);

    Coefficients::new(
        1.0 - alpha,
        -2.0 * cos_omega,
        1.0 + alpha,
        1.0 + alpha,
        -2.0 * cos_omega,
        1.0 - alpha,
    )
}

/// Calculates notch (band-reject) filter coefficients.
///
/// # Arguments
///
/// * `frequency` - Notch frequency in Hz
/// * `q` - Q factor (notch width = frequency / Q)
/// * `sample_rate` - Sample rate in Hz
pub fn notch_coefficients(frequency: f64, q: f64, sample_rate: u32) -> Coefficients {
    let (cos_omega, alpha) = prewarp(frequency, q, sample_rate);

    Coefficients::new(
        1.0,
        -2.0 * cos_omega,
        1.0,
        1.0 + alpha,
        -2.0 * cos_omega,
        1.0 - alpha,
    )
}

/// Calculates peaking EQ filter coefficients.
///
/// A peaking EQ boosts or cuts around a center frequency. The gain term is
/// split between numerator and denominator, so 0 dB collapses to `b == a`.
///
/// # Arguments
///
/// * `frequency` - Center frequency in Hz
/// * `q` - Q factor (bandwidth = frequency / Q)
/// * `gain_db` - Gain in decibels (positive = boost, negative = cut)
/// * `sample_rate` - Sample rate in Hz
pub fn peaking_eq_coefficients(frequency: f64, q: f64, gain_db: f64, sample_rate: u32) -> Coefficients {
    let a = shelf_amplitude(gain_db);
    let (cos_omega, alpha) = prewarp(frequency, q, sample_rate);

    Coefficients::new(
        1.0 + alpha * a,
        -2.0 * cos_omega,
        1.0 - alpha * a,
        1.0 + alpha / a,
        -2.0 * cos_omega,
        1.0 - alpha / a,
    )
}

/// Calculates low shelf filter coefficients.
///
/// # Arguments
///
/// * `frequency` - Shelf corner frequency in Hz
/// * `q` - Q factor (shelf slope; 0.707 is the steepest without overshoot)
/// * `gain_db` - Shelf gain in decibels
/// * `sample_rate` - Sample rate in Hz
pub fn low_shelf_coefficients(frequency: f64, q: f64, gain_db: f64, sample_rate: u32) -> Coefficients {
    let a = shelf_amplitude(gain_db);
    let (cos_omega, alpha) = prewarp(frequency, q, sample_rate);
    let beta = 2.0 * sqrt(a) * alpha;

    Coefficients::new(
        a * ((a + 1.0) - (a - 1.0) * cos_omega + beta),
        2.0 * a * ((a - 1.0) - (a + 1.0) * cos_omega),
        a * ((a + 1.0) - (a - 1.0) * cos_omega - beta),
        (a + 1.0) + (a - 1.0) * cos_omega + beta,
        -2.0 * ((a - 1.0) + (a + 1.0) * cos_omega),
        (a + 1.0) + (a - 1.0) * cos_omega - beta,
    )
}

/// Calculates high shelf filter coefficients.
///
/// Mirror image of [`low_shelf_coefficients`]: the sign of every
/// `(A-1)·cos(w0)` term flips.
pub fn high_shelf_coefficients(frequency: f64, q: f64, gain_db: f64, sample_rate: u32) -> Coefficients {
    let a = shelf_amplitude(gain_db);
    let (cos_omega, alpha) = prewarp(frequency, q, sample_rate);
    let beta = 2.0 * sqrt(a) * alpha;

    Coefficients::new(
        a * ((a + 1.0) + (a - 1.0) * cos_omega + beta),
        -2.0 * a * ((a - 1.0) + (a + 1.0) * cos_omega),
        a * ((a + 1.0) + (a - 1.0) * cos_omega - beta),
        (a + 1.0) - (a - 1.0) * cos_omega + beta,
        2.0 * ((a - 1.0) - (a + 1.0) * cos_omega),
        (a + 1.0) - (a - 1.0) * cos_omega - beta,
    )
}
