//! Analytic frequency response of a coefficient set.
//!
//! Evaluates `H(z)` on the unit circle, `z = e^(jω)`:
//!
//! ```text
//!          b0 + b1·e^(-jω) + b2·e^(-2jω)
//! H(ω) = --------------------------------
//!          a0 + a1·e^(-jω) + a2·e^(-2jω)
//! ```
//!
//! Works on normalized and un-normalized sets alike.

use libm::{atan2, cos, sin, sqrt};

use crate::coefficients::Coefficients;
use crate::math::{hz_to_omega, linear_to_db};

/// Real and imaginary parts of numerator and denominator at `omega`.
fn evaluate(c: &Coefficients, omega: f64) -> ((f64, f64), (f64, f64)) {
    let (cos_w, sin_w) = (cos(omega), sin(omega));
    let (cos_2w, sin_2w) = (cos(2.0 * omega), sin(2.0 * omega));

    let num = (
        c.b0 + c.b1 * cos_w + c.b2 * cos_2w,
        -(c.b1 * sin_w + c.b2 * sin_2w),
    );
    let den = (
        c.a0 + c.a1 * cos_w + c.a2 * cos_2w,
        -(c.a1 * sin_w + c.a2 * sin_2w),
    );
    (num, den)
}

/// Linear magnitude `|H|` at `frequency` Hz.
pub fn magnitude_at(coefficients: &Coefficients, frequency: f64, sample_rate: u32) -> f64 {
    let ((nr, ni), (dr, di)) = evaluate(coefficients, hz_to_omega(frequency, sample_rate));
    sqrt((nr * nr + ni * ni) / (dr * dr + di * di))
}

/// Magnitude in dB at `frequency` Hz.
pub fn magnitude_db_at(coefficients: &Coefficients, frequency: f64, sample_rate: u32) -> f64 {
    linear_to_db(magnitude_at(coefficients, frequency, sample_rate))
}

/// Phase of `H` in radians at `frequency` Hz, wrapped to `(-π, π]`.
pub fn phase_at(coefficients: &Coefficients, frequency: f64, sample_rate: u32) -> f64 {
    let ((nr, ni), (dr, di)) = evaluate(coefficients, hz_to_omega(frequency, sample_rate));
    let phase = atan2(ni, nr) - atan2(di, dr);
    wrap_phase(phase)
}

fn wrap_phase(phase: f64) -> f64 {
    use core::f64::consts::{PI, TAU};
    if phase > PI {
        phase - TAU
    } else if phase <= -PI {
        phase + TAU
    } else {
        phase
    }
}
