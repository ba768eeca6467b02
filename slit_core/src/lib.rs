//! # slit_core - Double-Slit Intensity Engine
//!
//! `slit_core` computes the normalized intensity pattern behind a double
//! slit: two-slit interference modulated by single-slit diffraction. It is
//! the computational heart of the Doppelspalt GUI and CLI.
//!
//! ## Design Philosophy
//!
//! - **Stateless model**: [`intensity`] is a set of pure functions
//! - **Explicit state**: interactive sessions own their grid, controls and curve
//! - **Unit-tagged inputs**: display units convert to meters before any math
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use slit_core::controls::ControlId;
//! use slit_core::session::PatternSession;
//!
//! let mut session = PatternSession::with_defaults().unwrap();
//! session.set_control(ControlId::SlitWidth, 10.0).unwrap();
//!
//! let summary = session.summary();
//! assert_eq!(summary.samples, session.grid().len());
//! ```
//!
//! ## Modules
//!
//! - [`grid`] - Fixed angle sampling grid
//! - [`intensity`] - Interference and diffraction terms, combined curve
//! - [`parameters`] - Slit parameters and model variants
//! - [`controls`] - Range-bounded parameter controls
//! - [`session`] - Parameter change handling and reset
//! - [`analysis`] - Fringe spacing, zeros and maxima
//! - [`config`] - Compiled-in defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod config;
pub mod controls;
pub mod errors;
pub mod grid;
pub mod intensity;
pub mod parameters;
pub mod session;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{SlitError, SlitResult};
pub use config::PatternConfig;
pub use controls::{ControlId, SliderControl};
pub use grid::AngleGrid;
pub use intensity::{intensity_pattern, IntensityCurve};
pub use parameters::{SlitParameters, Variant};
pub use session::PatternSession;
