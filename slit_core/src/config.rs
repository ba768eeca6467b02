//! # Pattern Configuration
//!
//! Compiled-in defaults for the sampling geometry and the initial slit
//! parameters. There are no config files and no environment variables: the
//! GUI always starts from [`PatternConfig::default`], and the CLI overrides
//! individual values through its flags.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, SlitError, SlitResult};
use crate::grid::AngleGrid;
use crate::parameters::{SlitParameters, Variant};
use crate::units::{Micrometers, Millimeters, Nanometers};

/// Distance between slit and screen in meters
pub const SCREEN_DISTANCE_M: f64 = 0.5;

/// Largest viewing half-angle in radians
pub const MAX_HALF_ANGLE_RAD: f64 = PI / 30.0;

/// Angular sample step in radians
pub const ANGLE_STEP_RAD: f64 = 1e-5;

/// Initial slit separation in millimeters
pub const DEFAULT_SEPARATION_MM: f64 = 0.155;

/// Initial wavelength in nanometers
pub const DEFAULT_WAVELENGTH_NM: f64 = 560.0;

/// Initial slit width in micrometers
pub const DEFAULT_SLIT_WIDTH_UM: f64 = 25.0;

/// Sampling geometry plus the parameters a session starts (and resets) to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Slit-to-screen distance in meters
    pub screen_distance_m: f64,
    /// Maximum viewing half-angle in radians
    pub max_half_angle_rad: f64,
    /// Grid step in radians
    pub step_rad: f64,
    /// Parameters restored by a reset
    pub defaults: SlitParameters,
    /// Which intensity model the session starts in
    pub variant: Variant,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            screen_distance_m: SCREEN_DISTANCE_M,
            max_half_angle_rad: MAX_HALF_ANGLE_RAD,
            step_rad: ANGLE_STEP_RAD,
            defaults: SlitParameters::default(),
            variant: Variant::default(),
        }
    }
}

impl Default for SlitParameters {
    fn default() -> Self {
        Self {
            separation: Millimeters(DEFAULT_SEPARATION_MM),
            wavelength: Nanometers(DEFAULT_WAVELENGTH_NM),
            slit_width: Micrometers(DEFAULT_SLIT_WIDTH_UM),
        }
    }
}

impl PatternConfig {
    /// Validate the grid geometry and the default parameters.
    pub fn validate(&self) -> SlitResult<()> {
        require_positive("screen_distance_m", self.screen_distance_m)?;
        require_positive("max_half_angle_rad", self.max_half_angle_rad)?;
        require_positive("step_rad", self.step_rad)?;
        if self.max_half_angle_rad >= PI / 2.0 {
            return Err(SlitError::invalid_configuration(
                "max_half_angle_rad",
                self.max_half_angle_rad.to_string(),
                "Half-angle must be below pi/2",
            ));
        }
        self.defaults.validate()
    }

    /// Build the angle grid described by this configuration.
    pub fn build_grid(&self) -> SlitResult<AngleGrid> {
        AngleGrid::new(self.screen_distance_m, self.max_half_angle_rad, self.step_rad)
    }
}
