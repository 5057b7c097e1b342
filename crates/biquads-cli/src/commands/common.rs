//! Filter selection shared by every command that builds a filter.

use anyhow::Context;
use biquads_config::{FilterDefinition, factory_definition};
use biquads_core::{Filter, FilterShape};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Filter shapes for CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliShape {
    #[value(name = "lowpass", alias = "lp")]
    LowPass,
    #[value(name = "highpass", alias = "hp")]
    HighPass,
    #[value(name = "bandpass", alias = "bp")]
    BandPass,
    #[value(name = "allpass", alias = "ap")]
    AllPass,
    Notch,
    #[value(name = "peaking", alias = "peak")]
    Peaking,
    #[value(name = "lowshelf")]
    LowShelf,
    #[value(name = "highshelf")]
    HighShelf,
}

impl From<CliShape> for FilterShape {
    fn from(s: CliShape) -> Self {
        match s {
            CliShape::LowPass => FilterShape::LowPass,
            CliShape::HighPass => FilterShape::HighPass,
            CliShape::BandPass => FilterShape::BandPass,
            CliShape::AllPass => FilterShape::AllPass,
            CliShape::Notch => FilterShape::Notch,
            CliShape::Peaking => FilterShape::PeakingEq,
            CliShape::LowShelf => FilterShape::LowShelf,
            CliShape::HighShelf => FilterShape::HighShelf,
        }
    }
}

/// Where the filter comes from, plus per-field overrides.
///
/// A base definition is taken from `--config`, `--preset` or `--shape`
/// (in that order); any other flag given replaces the matching field.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Filter shape
    #[arg(short, long, value_enum)]
    pub shape: Option<CliShape>,

    /// Load the filter from a TOML definition file
    #[arg(long, conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Start from a factory definition (see `biquads presets list`)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Cutoff or center frequency in Hz
    #[arg(short, long)]
    pub cutoff: Option<f64>,

    /// Sample rate in Hz
    #[arg(short = 'r', long)]
    pub sample_rate: Option<u32>,

    /// Quality factor
    #[arg(short, long, conflicts_with = "bandwidth")]
    pub q: Option<f64>,

    /// Bandwidth in octaves (alternative to --q)
    #[arg(short, long)]
    pub bandwidth: Option<f64>,

    /// Gain in dB (peaking and shelving shapes)
    #[arg(short, long, allow_hyphen_values = true)]
    pub gain: Option<f64>,

    /// Use the constant skirt gain band-pass variant
    #[arg(long)]
    pub constant_skirt_gain: bool,
}

impl FilterArgs {
    /// Resolve the flags into a definition without building it.
    pub fn definition(&self) -> anyhow::Result<FilterDefinition> {
        let mut def = if let Some(path) = &self.config {
            FilterDefinition::load(path)?
        } else if let Some(name) = &self.preset {
            factory_definition(name)?
        } else {
            let shape = self
                .shape
                .context("one of --shape, --preset or --config is required")?;
            let cutoff = self.cutoff.context("--cutoff is required with --shape")?;
            FilterDefinition::new(shape.into(), cutoff)
        };

        if let Some(shape) = self.shape {
            def.shape = shape.into();
        }
        if let Some(cutoff) = self.cutoff {
            def.cutoff = cutoff;
        }
        if let Some(sample_rate) = self.sample_rate {
            def.sample_rate = sample_rate;
        }
        if let Some(q) = self.q {
            def = def.with_q(q);
        }
        if let Some(octaves) = self.bandwidth {
            def = def.with_bandwidth(octaves);
        }
        if let Some(gain) = self.gain {
            def.gain = gain;
        }
        if self.constant_skirt_gain {
            def.constant_skirt_gain = true;
        }

        tracing::debug!(?def, "resolved filter definition");
        Ok(def)
    }

    /// Resolve and build the filter.
    pub fn build(&self) -> anyhow::Result<(FilterDefinition, Filter)> {
        let def = self.definition()?;
        let filter = def
            .build()
            .with_context(|| format!("cannot build {} filter", def.shape))?;
        Ok((def, filter))
    }
}
