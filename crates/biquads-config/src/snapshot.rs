//! Running-filter snapshots.
//!
//! A [`FilterSnapshot`] stores a filter's definition together with its delay
//! registers, so processing can resume exactly where it stopped.

use biquads_core::{BiquadState, Filter};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::definition::FilterDefinition;
use crate::error::ConfigError;

/// Definition plus delay registers of a running filter.
///
/// ```toml
/// [filter]
/// shape = "lowpass"
/// cutoff = 500.0
///
/// [state]
/// x1 = 0.25
/// x2 = 0.5
/// y1 = 0.31
/// y2 = 0.28
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterSnapshot {
    /// Shape and parameters.
    pub filter: FilterDefinition,

    /// Delay registers at capture time.
    #[serde(default)]
    pub state: BiquadState,
}

impl FilterSnapshot {
    /// Capture a running filter.
    pub fn capture(filter: &Filter) -> Self {
        Self {
            filter: FilterDefinition::from_filter(filter),
            state: filter.state(),
        }
    }

    /// Rebuild the filter and restore its delay registers.
    pub fn restore(&self) -> Result<Filter, ConfigError> {
        let mut filter = self.filter.build()?;
        filter.restore_state(self.state);
        Ok(filter)
    }

    /// Load a snapshot from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Ok(toml::from_str(&content)?)
    }

    /// Save the snapshot to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))
    }
}
