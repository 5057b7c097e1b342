//! Filter definition file format and operations.

use biquads_core::{
    DEFAULT_Q, DEFAULT_SAMPLE_RATE, Filter, FilterError, FilterParameters, FilterShape,
    q_from_bandwidth,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// A single EQ filter described in TOML.
///
/// Definitions are plain data. Nothing is validated until [`build`](Self::build),
/// which runs the same checks as [`Filter::try_new`].
///
/// # TOML Format
///
/// ```toml
/// name = "Presence"
/// description = "Gentle upper-mid lift"
/// shape = "peaking"
/// cutoff = 3000.0
/// sample_rate = 48000
/// q = 1.2
/// gain = 2.5
/// ```
///
/// `bandwidth` (octaves) may be given instead of `q`; when both are present
/// the bandwidth wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterDefinition {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Response shape.
    pub shape: FilterShape,

    /// Corner or center frequency in Hz.
    pub cutoff: f64,

    /// Sample rate in Hz (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Quality factor (defaults to 1/sqrt(2)).
    #[serde(default = "default_q")]
    pub q: f64,

    /// Bandwidth in octaves; overrides `q` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<f64>,

    /// Gain in dB for peaking and shelving shapes.
    #[serde(default)]
    pub gain: f64,

    /// Band-pass variant with peak gain equal to Q.
    #[serde(default, skip_serializing_if = "is_false")]
    pub constant_skirt_gain: bool,

    /// Whether the built filter starts bypassed.
    #[serde(default, skip_serializing_if = "is_false")]
    pub bypassed: bool,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_q() -> f64 {
    DEFAULT_Q
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl FilterDefinition {
    /// Create a definition with default sample rate, Q and gain.
    pub fn new(shape: FilterShape, cutoff: f64) -> Self {
        Self {
            name: None,
            description: None,
            shape,
            cutoff,
            sample_rate: DEFAULT_SAMPLE_RATE,
            q: DEFAULT_Q,
            bandwidth: None,
            gain: 0.0,
            constant_skirt_gain: false,
            bypassed: false,
        }
    }

    /// Capture the shape and parameters of an existing filter.
    pub fn from_filter(filter: &Filter) -> Self {
        let params = filter.parameters();
        Self {
            name: None,
            description: None,
            shape: filter.shape(),
            cutoff: params.cutoff,
            sample_rate: params.sample_rate,
            q: params.q_factor,
            bandwidth: None,
            gain: params.gain,
            constant_skirt_gain: params.constant_skirt_gain,
            bypassed: filter.is_bypassed(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the quality factor and clear any bandwidth.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self.bandwidth = None;
        self
    }

    /// Set the bandwidth in octaves.
    pub fn with_bandwidth(mut self, octaves: f64) -> Self {
        self.bandwidth = Some(octaves);
        self
    }

    /// Set the gain in dB.
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Select the constant skirt gain band-pass variant.
    pub fn with_constant_skirt_gain(mut self, constant_skirt_gain: bool) -> Self {
        self.constant_skirt_gain = constant_skirt_gain;
        self
    }

    /// Start the built filter bypassed.
    pub fn with_bypassed(mut self, bypassed: bool) -> Self {
        self.bypassed = bypassed;
        self
    }

    /// The Q the built filter will use, after resolving `bandwidth`.
    pub fn effective_q(&self) -> Result<f64, ConfigError> {
        match self.bandwidth {
            Some(octaves) if octaves.is_nan() || octaves <= 0.0 => {
                Err(FilterError::invalid("bandwidth", octaves).into())
            }
            Some(octaves) => Ok(q_from_bandwidth(octaves)),
            None => Ok(self.q),
        }
    }

    /// The core parameter set this definition describes.
    pub fn parameters(&self) -> Result<FilterParameters, ConfigError> {
        Ok(FilterParameters {
            constant_skirt_gain: self.constant_skirt_gain,
            ..FilterParameters::new(self.cutoff, self.sample_rate, self.effective_q()?, self.gain)
        })
    }

    /// Build a ready-to-run filter.
    pub fn build(&self) -> Result<Filter, ConfigError> {
        let mut filter = Filter::try_new(self.shape, self.parameters()?)?;
        filter.set_bypass(self.bypassed);
        Ok(filter)
    }

    /// Load a definition from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a definition from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the definition to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the definition to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
