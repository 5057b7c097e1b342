//! Biquads Core - RBJ cookbook EQ filters
//!
//! This crate derives second-order filter coefficients for the common
//! equalization shapes and runs them through a Direct Form I recurrence,
//! with zero allocation in the audio path.
//!
//! # Core Abstractions
//!
//! ## Coefficient Derivation
//!
//! - [`FilterShape`] - Low/high pass, band pass, all pass, notch, peaking, low/high shelf
//! - [`Coefficients`] - `(b0, b1, b2, a0, a1, a2)` with [`Coefficients::derive`]
//! - Per-shape functions: [`low_shelf_coefficients`], [`peaking_eq_coefficients`], etc.
//!
//! ## Processing
//!
//! - [`Biquad`] - Normalized coefficients plus delay registers
//! - [`Filter`] - Shape + parameters + biquad; re-derives on every parameter change
//!
//! ## Parameters
//!
//! - [`FilterParameters`] - Cutoff, sample rate, Q, gain
//! - [`verify_parameters`] - The validation gate used by every constructor
//! - [`q_from_bandwidth`] / [`bandwidth_from_q`] - Octave bandwidth conversions
//!
//! ## Analysis
//!
//! - [`magnitude_at`], [`magnitude_db_at`], [`phase_at`] - Analytic frequency response
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! biquads-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use biquads_core::{Filter, FilterShape};
//!
//! let mut shelf = Filter::new(FilterShape::LowShelf, 120.0, 48_000, 0.707, 4.0)
//!     .expect("valid parameters");
//!
//! let mut block = [0.0_f64; 64];
//! block[0] = 1.0;
//! shelf.process_block(&mut block);
//!
//! // Sweeping the corner keeps the delay registers intact
//! shelf.set_cutoff(150.0).expect("below nyquist");
//! let _ = shelf.process_sample(0.0);
//! ```
//!
//! # Features
//!
//! - `std` (default) - `std::error::Error` impls
//! - `serde` - Serialize shapes, parameters, coefficients and biquad state
//! - `tracing` - Log coefficient reloads and rejected parameter changes

#![cfg_attr(not(feature = "std"), no_std)]

pub mod biquad;
pub mod coefficients;
pub mod error;
pub mod filter;
pub mod math;
pub mod params;
pub mod response;
pub mod shape;

// Re-export main types at crate root
pub use biquad::{Biquad, BiquadState};
pub use coefficients::{
    Coefficients, all_pass_coefficients, band_pass_coefficients, high_pass_coefficients,
    high_shelf_coefficients, low_pass_coefficients, low_shelf_coefficients, notch_coefficients,
    peaking_eq_coefficients,
};
pub use error::FilterError;
pub use filter::Filter;
pub use math::{db_to_linear, hz_to_omega, linear_to_db, shelf_amplitude};
pub use params::{
    DEFAULT_CUTOFF, DEFAULT_Q, DEFAULT_SAMPLE_RATE, FilterParameters, bandwidth_from_q,
    q_from_bandwidth, verify_parameters,
};
pub use response::{magnitude_at, magnitude_db_at, phase_at};
pub use shape::{FilterShape, UnknownShape};
