//! UI module for the Doppelspalt GUI
//!
//! # Panel Structure
//! - `toolbar` - Window header with title and active model
//! - `plot` - Canvas with the intensity curve, axes and labels
//! - `controls` - Parameter sliders, model toggle and Reset button
//! - `status_bar` - Derived quantities and rejected-input messages

pub mod controls;
pub mod plot;
pub mod status_bar;
pub mod toolbar;
