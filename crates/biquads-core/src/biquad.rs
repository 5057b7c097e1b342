//! Biquad (bi-quadratic) filter structure.
//!
//! Provides the second-order IIR recurrence that every
//! [`FilterShape`](crate::FilterShape) runs through. Coefficients come from
//! [`Coefficients::derive`](crate::Coefficients::derive) and are normalized
//! on load.

use crate::coefficients::Coefficients;
use crate::error::FilterError;

/// Delay registers of a Direct Form I biquad.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiquadState {
    /// x[n-1]
    pub x1: f64,
    /// x[n-2]
    pub x2: f64,
    /// y[n-1]
    pub y1: f64,
    /// y[n-2]
    pub y2: f64,
}

/// Second-order IIR filter with normalized coefficients and its state.
///
/// Implements the Direct Form I biquad structure:
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
///                - a1*y[n-1] - a2*y[n-2]
/// ```
///
/// A `Biquad` only exists with a loaded coefficient set. Reloading replaces
/// the coefficients but keeps the delay registers, so parameter sweeps stay
/// continuous. Call [`reset`](Self::reset) to clear them explicitly.
#[derive(Debug, Clone)]
pub struct Biquad {
    /// Normalized coefficients (a0 == 1)
    coefficients: Coefficients,
    state: BiquadState,
}

impl Biquad {
    /// Creates a biquad from un-normalized coefficients with zeroed state.
    ///
    /// Fails with [`FilterError::DegenerateCoefficients`] when `a0` is zero.
    pub fn new(coefficients: Coefficients) -> Result<Self, FilterError> {
        Ok(Self {
            coefficients: coefficients.normalized()?,
            state: BiquadState::default(),
        })
    }

    /// Creates a passthrough biquad: `y[n] = x[n]`.
    pub fn passthrough() -> Self {
        Self {
            coefficients: Coefficients::IDENTITY,
            state: BiquadState::default(),
        }
    }

    /// Restores previously saved delay registers.
    pub fn with_state(mut self, state: BiquadState) -> Self {
        self.state = state;
        self
    }

    /// Replaces the active coefficient set.
    ///
    /// Normalizes by `a0`. On failure the previous coefficients stay active.
    /// Delay registers are never touched.
    pub fn load(&mut self, coefficients: Coefficients) -> Result<(), FilterError> {
        match coefficients.normalized() {
            Ok(normalized) => {
                self.coefficients = normalized;
                #[cfg(feature = "tracing")]
                tracing::trace!(?normalized, "biquad coefficients reloaded");
                Ok(())
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(?coefficients, "biquad load rejected: a0 is zero");
                Err(err)
            }
        }
    }

    /// Processes a single sample through the biquad filter.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let c = &self.coefficients;
        let s = &mut self.state;

        let output = c.b0 * input + c.b1 * s.x1 + c.b2 * s.x2 - c.a1 * s.y1 - c.a2 * s.y2;

        // Update delay lines
        s.x2 = s.x1;
        s.x1 = input;
        s.y2 = s.y1;
        s.y1 = output;

        output
    }

    /// Processes a block of samples in place.
    pub fn process_block(&mut self, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clears the filter state (delay lines) without changing coefficients.
    pub fn reset(&mut self) {
        self.state = BiquadState::default();
    }

    /// Active normalized coefficients.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Current delay registers.
    pub fn state(&self) -> BiquadState {
        self.state
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::passthrough()
    }
}
