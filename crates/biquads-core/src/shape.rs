//! Filter response shapes.

use core::fmt;
use core::str::FromStr;

/// Response shape of a biquad filter.
///
/// Each variant selects one RBJ cookbook derivation in
/// [`Coefficients::derive`](crate::Coefficients::derive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FilterShape {
    /// Second-order low-pass.
    #[cfg_attr(feature = "serde", serde(alias = "low_pass", alias = "low-pass"))]
    LowPass,
    /// Second-order high-pass.
    #[cfg_attr(feature = "serde", serde(alias = "high_pass", alias = "high-pass"))]
    HighPass,
    /// Band-pass (0 dB peak, or peak gain = Q with constant skirt gain).
    #[cfg_attr(feature = "serde", serde(alias = "band_pass", alias = "band-pass"))]
    BandPass,
    /// All-pass: flat magnitude, phase rotation around the cutoff.
    #[cfg_attr(feature = "serde", serde(alias = "all_pass", alias = "all-pass"))]
    AllPass,
    /// Notch (band-reject).
    Notch,
    /// Peaking EQ: boost or cut around the center frequency.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "peaking", alias = "peaking_eq", alias = "peaking-eq")
    )]
    PeakingEq,
    /// Low shelf: boost or cut below the corner frequency.
    #[cfg_attr(feature = "serde", serde(alias = "low_shelf", alias = "low-shelf"))]
    LowShelf,
    /// High shelf: boost or cut above the corner frequency.
    #[cfg_attr(feature = "serde", serde(alias = "high_shelf", alias = "high-shelf"))]
    HighShelf,
}

impl FilterShape {
    /// All shapes, in display order.
    pub const ALL: [FilterShape; 8] = [
        FilterShape::LowPass,
        FilterShape::HighPass,
        FilterShape::BandPass,
        FilterShape::AllPass,
        FilterShape::Notch,
        FilterShape::PeakingEq,
        FilterShape::LowShelf,
        FilterShape::HighShelf,
    ];

    /// Stable lowercase name used in config files and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            FilterShape::LowPass => "lowpass",
            FilterShape::HighPass => "highpass",
            FilterShape::BandPass => "bandpass",
            FilterShape::AllPass => "allpass",
            FilterShape::Notch => "notch",
            FilterShape::PeakingEq => "peaking",
            FilterShape::LowShelf => "lowshelf",
            FilterShape::HighShelf => "highshelf",
        }
    }

    /// Whether the gain parameter affects this shape.
    pub const fn uses_gain(self) -> bool {
        matches!(
            self,
            FilterShape::PeakingEq | FilterShape::LowShelf | FilterShape::HighShelf
        )
    }
}

impl fmt::Display for FilterShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a shape name is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter shape")]
pub struct UnknownShape;

impl FromStr for FilterShape {
    type Err = UnknownShape;

    /// Parses a shape name, ignoring ASCII case, `_` and `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut compact = [0u8; 16];
        let mut len = 0;
        for byte in s.bytes().filter(|b| *b != b'_' && *b != b'-') {
            if len == compact.len() {
                return Err(UnknownShape);
            }
            compact[len] = byte.to_ascii_lowercase();
            len += 1;
        }

        match &compact[..len] {
            b"lowpass" | b"lp" => Ok(FilterShape::LowPass),
            b"highpass" | b"hp" => Ok(FilterShape::HighPass),
            b"bandpass" | b"bp" => Ok(FilterShape::BandPass),
            b"allpass" | b"ap" => Ok(FilterShape::AllPass),
            b"notch" => Ok(FilterShape::Notch),
            b"peaking" | b"peakingeq" | b"peak" => Ok(FilterShape::PeakingEq),
            b"lowshelf" => Ok(FilterShape::LowShelf),
            b"highshelf" => Ok(FilterShape::HighShelf),
            _ => Err(UnknownShape),
        }
    }
}
