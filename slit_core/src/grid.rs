//! # Angle Grid
//!
//! The fixed set of viewing angles at which the intensity curve is sampled.
//! A grid is built once per session; changing slit parameters never
//! resamples it.
//!
//! ## Example
//!
//! ```rust
//! use slit_core::grid::AngleGrid;
//!
//! let grid = AngleGrid::new(0.5, std::f64::consts::PI / 30.0, 1e-5).unwrap();
//! assert!(grid.len() > 10_000);
//! assert!(grid.start() < 0.0 && grid.end() > 0.0);
//! ```

use std::f64::consts::FRAC_PI_2;

use crate::errors::{require_positive, SlitError, SlitResult};

/// Immutable, strictly increasing sequence of angles in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleGrid {
    angles: Vec<f64>,
    end: f64,
}

impl AngleGrid {
    /// Sample from `screen_distance * tan(-max_half_angle)` up to (but not
    /// including) `screen_distance * tan(max_half_angle)` every `step`.
    pub fn new(screen_distance_m: f64, max_half_angle_rad: f64, step_rad: f64) -> SlitResult<Self> {
        require_positive("screen_distance_m", screen_distance_m)?;
        require_positive("max_half_angle_rad", max_half_angle_rad)?;
        require_positive("step_rad", step_rad)?;
        if max_half_angle_rad >= FRAC_PI_2 {
            return Err(SlitError::invalid_configuration(
                "max_half_angle_rad",
                max_half_angle_rad.to_string(),
                "Half-angle must be below pi/2",
            ));
        }

        let start = screen_distance_m * (-max_half_angle_rad).tan();
        let end = screen_distance_m * max_half_angle_rad.tan();
        Self::from_range(start, end, step_rad)
    }

    /// Sample the half-open range `[start, end)` every `step`.
    pub fn from_range(start: f64, end: f64, step_rad: f64) -> SlitResult<Self> {
        require_positive("step_rad", step_rad)?;
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(SlitError::invalid_configuration(
                "range",
                format!("[{}, {})", start, end),
                "Range must be finite and non-empty",
            ));
        }

        // Index-based so no rounding error accumulates across samples
        let count = ((end - start) / step_rad).ceil() as usize;
        let angles: Vec<f64> = (0..count)
            .map(|i| start + i as f64 * step_rad)
            .take_while(|&angle| angle < end)
            .collect();

        log::debug!(
            "angle grid: {} samples over [{:.6}, {:.6}) step {:e}",
            angles.len(),
            start,
            end,
            step_rad
        );

        Ok(Self { angles, end })
    }

    /// All sampled angles
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.angles.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// First sample (inclusive lower bound)
    pub fn start(&self) -> f64 {
        self.angles.first().copied().unwrap_or(self.end)
    }

    /// Exclusive upper bound of the sampled range
    pub fn end(&self) -> f64 {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_default_geometry_bounds() {
        let grid = AngleGrid::new(0.5, PI / 30.0, 1e-5).unwrap();
        let bound = 0.5 * (PI / 30.0).tan();
        assert!((grid.start() + bound).abs() < 1e-15);
        assert!((grid.end() - bound).abs() < 1e-15);
        assert!(grid.angles().iter().all(|&a| a < grid.end()));
        // ceil(2 * 0.0525 / 1e-5) samples
        let expected = ((2.0 * bound) / 1e-5).ceil() as usize;
        assert!(grid.len() == expected || grid.len() + 1 == expected);
    }

    #[test]
    fn test_strictly_increasing() {
        let grid = AngleGrid::new(0.5, PI / 30.0, 1e-4).unwrap();
        assert!(grid.angles().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_uniform_spacing() {
        let grid = AngleGrid::from_range(-1.0, 1.0, 0.25).unwrap();
        assert_eq!(grid.len(), 8);
        assert_eq!(grid.angles()[0], -1.0);
        assert_eq!(grid.angles()[4], 0.0);
        assert_eq!(grid.angles()[7], 0.75);
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let err = AngleGrid::new(0.5, PI / 30.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
        assert!(AngleGrid::new(0.5, PI / 30.0, -1e-5).is_err());
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert!(AngleGrid::new(0.0, PI / 30.0, 1e-5).is_err());
        assert!(AngleGrid::new(0.5, 0.0, 1e-5).is_err());
        assert!(AngleGrid::new(0.5, PI / 2.0, 1e-5).is_err());
        assert!(AngleGrid::from_range(1.0, -1.0, 0.1).is_err());
    }
}
