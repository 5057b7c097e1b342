//! CLI command implementations.

pub mod coeffs;
pub mod common;
pub mod impulse;
pub mod presets;
pub mod process;
pub mod response;
pub mod shapes;
