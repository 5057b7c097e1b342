//! Parametric biquad filter: a shape, its parameters and a [`Biquad`].
//!
//! [`Filter`] is the object callers hold. It derives coefficients once at
//! construction and again on every parameter change; audio then flows only
//! through [`Filter::process_sample`] and [`Filter::process_block`].
//!
//! # Example
//!
//! ```rust
//! use biquads_core::{Filter, FilterShape};
//!
//! let mut eq = Filter::new(FilterShape::PeakingEq, 1000.0, 48_000, 1.0, 6.0)
//!     .expect("valid parameters");
//!
//! let y = eq.process_sample(0.5);
//! assert!(y.is_finite());
//!
//! eq.set_gain(-3.0).expect("gain is finite");
//! assert_eq!(eq.gain(), -3.0);
//!
//! // A zero sample rate never yields a filter
//! assert!(Filter::new(FilterShape::Notch, 1000.0, 0, 0.707, 0.0).is_none());
//! ```

use crate::biquad::{Biquad, BiquadState};
use crate::coefficients::Coefficients;
use crate::error::FilterError;
use crate::params::{FilterParameters, bandwidth_from_q, q_from_bandwidth};
use crate::response;
use crate::shape::FilterShape;

/// A biquad filter of a fixed shape with mutable parameters.
///
/// Every setter validates the resulting parameter set, re-derives the
/// coefficients and reloads them. A rejected change leaves parameters and
/// coefficients exactly as they were. Delay registers survive reloads.
#[derive(Debug, Clone)]
pub struct Filter {
    shape: FilterShape,
    params: FilterParameters,
    biquad: Biquad,
    bypass: bool,
}

impl Filter {
    /// Creates a filter, or `None` if the parameters are invalid or the
    /// derived coefficients are degenerate.
    pub fn new(
        shape: FilterShape,
        cutoff: f64,
        sample_rate: u32,
        q_factor: f64,
        gain: f64,
    ) -> Option<Self> {
        Self::try_new(shape, FilterParameters::new(cutoff, sample_rate, q_factor, gain)).ok()
    }

    /// Creates a filter, keeping the reason for a failure.
    pub fn try_new(shape: FilterShape, params: FilterParameters) -> Result<Self, FilterError> {
        params.validate()?;
        let biquad = Biquad::new(Coefficients::derive(shape, &params))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(%shape, ?params, "filter created");

        Ok(Self {
            shape,
            params,
            biquad,
            bypass: false,
        })
    }

    /// Low-pass filter.
    pub fn low_pass(cutoff: f64, sample_rate: u32, q_factor: f64) -> Option<Self> {
        Self::new(FilterShape::LowPass, cutoff, sample_rate, q_factor, 0.0)
    }

    /// High-pass filter.
    pub fn high_pass(cutoff: f64, sample_rate: u32, q_factor: f64) -> Option<Self> {
        Self::new(FilterShape::HighPass, cutoff, sample_rate, q_factor, 0.0)
    }

    /// Band-pass filter, optionally with constant skirt gain.
    pub fn band_pass(
        cutoff: f64,
        sample_rate: u32,
        q_factor: f64,
        constant_skirt_gain: bool,
    ) -> Option<Self> {
        let params = FilterParameters {
            constant_skirt_gain,
            ..FilterParameters::new(cutoff, sample_rate, q_factor, 0.0)
        };
        Self::try_new(FilterShape::BandPass, params).ok()
    }

    /// All-pass filter.
    pub fn all_pass(cutoff: f64, sample_rate: u32, q_factor: f64) -> Option<Self> {
        Self::new(FilterShape::AllPass, cutoff, sample_rate, q_factor, 0.0)
    }

    /// Notch filter.
    pub fn notch(cutoff: f64, sample_rate: u32, q_factor: f64) -> Option<Self> {
        Self::new(FilterShape::Notch, cutoff, sample_rate, q_factor, 0.0)
    }

    /// Peaking EQ filter.
    pub fn peaking_eq(cutoff: f64, sample_rate: u32, q_factor: f64, gain: f64) -> Option<Self> {
        Self::new(FilterShape::PeakingEq, cutoff, sample_rate, q_factor, gain)
    }

    /// Low shelf filter.
    pub fn low_shelf(cutoff: f64, sample_rate: u32, q_factor: f64, gain: f64) -> Option<Self> {
        Self::new(FilterShape::LowShelf, cutoff, sample_rate, q_factor, gain)
    }

    /// High shelf filter.
    pub fn high_shelf(cutoff: f64, sample_rate: u32, q_factor: f64, gain: f64) -> Option<Self> {
        Self::new(FilterShape::HighShelf, cutoff, sample_rate, q_factor, gain)
    }

    /// Validates, derives and loads `params`, committing them on success.
    fn apply(&mut self, params: FilterParameters) -> Result<(), FilterError> {
        if let Err(err) = params.validate() {
            #[cfg(feature = "tracing")]
            tracing::debug!(shape = %self.shape, %err, "parameter change rejected");
            return Err(err);
        }
        self.biquad.load(Coefficients::derive(self.shape, &params))?;
        self.params = params;
        Ok(())
    }

    /// Replaces all parameters at once.
    pub fn set_parameters(&mut self, params: FilterParameters) -> Result<(), FilterError> {
        self.apply(params)
    }

    /// Sets the cutoff (or center) frequency in Hz.
    pub fn set_cutoff(&mut self, cutoff: f64) -> Result<(), FilterError> {
        self.apply(FilterParameters {
            cutoff,
            ..self.params
        })
    }

    /// Sets the sample rate in Hz.
    pub fn set_sample_rate(&mut self, sample_rate: u32) -> Result<(), FilterError> {
        self.apply(FilterParameters {
            sample_rate,
            ..self.params
        })
    }

    /// Sets the Q factor.
    pub fn set_q_factor(&mut self, q_factor: f64) -> Result<(), FilterError> {
        self.apply(FilterParameters {
            q_factor,
            ..self.params
        })
    }

    /// Sets the Q factor from a bandwidth in octaves.
    pub fn set_bandwidth(&mut self, octaves: f64) -> Result<(), FilterError> {
        if octaves.is_nan() || octaves <= 0.0 {
            return Err(FilterError::invalid("bandwidth", octaves));
        }
        self.set_q_factor(q_from_bandwidth(octaves))
    }

    /// Sets the gain in dB. Only peaking and shelving shapes respond to it.
    pub fn set_gain(&mut self, gain: f64) -> Result<(), FilterError> {
        self.apply(FilterParameters {
            gain,
            ..self.params
        })
    }

    /// Enables the constant skirt gain variant. Only band-pass responds to it.
    pub fn set_constant_skirt_gain(&mut self, constant_skirt_gain: bool) -> Result<(), FilterError> {
        self.apply(FilterParameters {
            constant_skirt_gain,
            ..self.params
        })
    }

    /// Bypassed filters return their input unchanged and hold their state.
    pub fn set_bypass(&mut self, bypass: bool) {
        self.bypass = bypass;
    }

    /// Filter shape.
    pub fn shape(&self) -> FilterShape {
        self.shape
    }

    /// Last accepted parameters.
    pub fn parameters(&self) -> &FilterParameters {
        &self.params
    }

    /// Cutoff (or center) frequency in Hz.
    pub fn cutoff(&self) -> f64 {
        self.params.cutoff
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.params.sample_rate
    }

    /// Q factor.
    pub fn q_factor(&self) -> f64 {
        self.params.q_factor
    }

    /// Bandwidth in octaves equivalent to the current Q.
    pub fn bandwidth(&self) -> f64 {
        bandwidth_from_q(self.params.q_factor)
    }

    /// Gain in dB.
    pub fn gain(&self) -> f64 {
        self.params.gain
    }

    /// Whether constant skirt gain is enabled.
    pub fn constant_skirt_gain(&self) -> bool {
        self.params.constant_skirt_gain
    }

    /// Whether the filter is bypassed.
    pub fn is_bypassed(&self) -> bool {
        self.bypass
    }

    /// Active normalized coefficients.
    pub fn coefficients(&self) -> &Coefficients {
        self.biquad.coefficients()
    }

    /// Current delay registers.
    pub fn state(&self) -> BiquadState {
        self.biquad.state()
    }

    /// Magnitude response in dB at `frequency` Hz.
    pub fn magnitude_db_at(&self, frequency: f64) -> f64 {
        response::magnitude_db_at(self.coefficients(), frequency, self.params.sample_rate)
    }

    /// Processes one sample.
    #[inline]
    pub fn process_sample(&mut self, input: f64) -> f64 {
        if self.bypass {
            return input;
        }
        self.biquad.process(input)
    }

    /// Processes a block of samples in place.
    pub fn process_block(&mut self, samples: &mut [f64]) {
        if self.bypass {
            return;
        }
        self.biquad.process_block(samples);
    }

    /// Clears the delay registers.
    pub fn reset(&mut self) {
        self.biquad.reset();
    }

    /// Overwrites the delay registers, e.g. when resuming from a snapshot.
    pub fn restore_state(&mut self, state: BiquadState) {
        self.biquad = core::mem::take(&mut self.biquad).with_state(state);
    }
}
