//! Filter definitions and snapshots for biquads.
//!
//! This crate stores [`biquads_core::Filter`] settings as TOML and turns them
//! back into running filters.
//!
//! # Features
//!
//! - **Definitions**: Load and save single-filter EQ settings from TOML files
//! - **Snapshots**: Persist a running filter's delay registers alongside its settings
//! - **Factory Definitions**: Built-in corrective and tone-shaping EQ moves
//!
//! # Example
//!
//! ```rust
//! use biquads_config::FilterDefinition;
//! use biquads_core::FilterShape;
//!
//! let def = FilterDefinition::from_toml(
//!     r#"
//! name = "Hum 60"
//! shape = "notch"
//! cutoff = 60.0
//! q = 10.0
//! "#,
//! )
//! .unwrap();
//!
//! let mut filter = def.build().unwrap();
//! assert_eq!(filter.shape(), FilterShape::Notch);
//! let _ = filter.process_sample(0.5);
//!
//! let toml_str = def.to_toml().unwrap();
//! assert!(toml_str.contains("shape = \"notch\""));
//! ```

mod definition;
mod error;
mod snapshot;

/// Factory definitions bundled with the library.
pub mod factory;

pub use definition::FilterDefinition;
pub use error::ConfigError;
pub use factory::{
    FACTORY_DEFINITION_NAMES, factory_definition, factory_definitions, is_factory_definition,
};
pub use snapshot::FilterSnapshot;
