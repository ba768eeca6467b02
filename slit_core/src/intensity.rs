//! # Intensity Model
//!
//! Normalized far-field intensity behind a double slit:
//!
//! ```text
//! I(θ) / I₀ = cos²(β) · (sin α / α)²
//!
//! β = π d sin θ / λ      (interference, slit separation d)
//! α = π w sin θ / λ      (diffraction, slit width w)
//! ```
//!
//! All lengths enter in [`Meters`]. Both factors are squared and bounded by
//! one, so every sample lies in `[0, 1]`. At `α = 0` the diffraction factor
//! takes its limit value 1 instead of evaluating `0 / 0`.
//!
//! ## Example
//!
//! ```rust
//! use slit_core::grid::AngleGrid;
//! use slit_core::intensity::intensity_pattern;
//! use slit_core::parameters::{SlitParameters, Variant};
//!
//! let grid = AngleGrid::from_range(-0.01, 0.01, 1e-4).unwrap();
//! let curve = intensity_pattern(&SlitParameters::default(), Variant::ThreeParameter, &grid);
//! assert_eq!(curve.len(), grid.len());
//! assert!(curve.values().iter().all(|&i| (0.0..=1.0).contains(&i)));
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::grid::AngleGrid;
use crate::parameters::{SlitParameters, Variant};
use crate::units::Meters;

/// Interference factor `cos²(π d sin θ / λ)` for a single angle.
pub fn interference_at(separation: Meters, theta: f64, wavelength: Meters) -> f64 {
    let beta = PI * separation.0 * theta.sin() / wavelength.0;
    beta.cos().powi(2)
}

/// Diffraction factor `(sin α / α)²` with `α = π w sin θ / λ`.
pub fn diffraction_at(slit_width: Meters, theta: f64, wavelength: Meters) -> f64 {
    let alpha = PI * slit_width.0 * theta.sin() / wavelength.0;
    sinc(alpha).powi(2)
}

/// Unnormalized sinc, `sin x / x`, with the removable singularity at zero filled in.
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x.sin() / x
    }
}

/// Combined normalized intensity at a single angle.
pub fn intensity_at(params: &SlitParameters, variant: Variant, theta: f64) -> f64 {
    let wavelength = params.wavelength_m();
    let inter = interference_at(params.separation_m(), theta, wavelength);
    match variant {
        Variant::ThreeParameter => inter * diffraction_at(params.slit_width_m(), theta, wavelength),
        Variant::TwoParameter => inter,
    }
}

/// Interference factor over a slice of angles
pub fn interference(separation: Meters, angles: &[f64], wavelength: Meters) -> Vec<f64> {
    angles
        .iter()
        .map(|&theta| interference_at(separation, theta, wavelength))
        .collect()
}

/// Diffraction factor over a slice of angles
pub fn diffraction(slit_width: Meters, angles: &[f64], wavelength: Meters) -> Vec<f64> {
    angles
        .iter()
        .map(|&theta| diffraction_at(slit_width, theta, wavelength))
        .collect()
}

/// Evaluate the full curve over `grid`.
///
/// Pure: the same inputs always yield the same curve, nothing is cached.
pub fn intensity_pattern(params: &SlitParameters, variant: Variant, grid: &AngleGrid) -> IntensityCurve {
    let values = grid
        .iter()
        .map(|theta| intensity_at(params, variant, theta))
        .collect();
    IntensityCurve(values)
}

/// Normalized intensity samples, index-aligned with the grid they came from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntensityCurve(Vec<f64>);

impl IntensityCurve {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest sample, or 0 for an empty curve
    pub fn peak(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }

    /// Arithmetic mean of the samples
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        self.0.iter().sum::<f64>() / self.0.len() as f64
    }

    /// `(angle, intensity)` pairs against the grid the curve was evaluated on
    pub fn points<'a>(&'a self, grid: &'a AngleGrid) -> impl Iterator<Item = (f64, f64)> + 'a {
        grid.iter().zip(self.0.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Micrometers, Millimeters, Nanometers};

    fn defaults() -> SlitParameters {
        SlitParameters::new(Millimeters(0.155), Nanometers(560.0), Micrometers(25.0))
    }

    #[test]
    fn test_zero_angle_is_unity() {
        let i = intensity_at(&defaults(), Variant::ThreeParameter, 0.0);
        assert!(!i.is_nan());
        assert!((i - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sinc_limit() {
        assert_eq!(sinc(0.0), 1.0);
        assert_eq!(diffraction_at(Meters(2.5e-5), 0.0, Meters(5.6e-7)), 1.0);
        // Negative zero also hits the limit branch
        assert_eq!(sinc(-0.0), 1.0);
    }

    #[test]
    fn test_first_diffraction_zero() {
        let params = defaults();
        // α = π  <=>  sin θ = λ / w
        let theta = (params.wavelength_m().0 / params.slit_width_m().0).asin();
        let diff = diffraction_at(params.slit_width_m(), theta, params.wavelength_m());
        assert!(diff < 1e-20);
        assert!(intensity_at(&params, Variant::ThreeParameter, theta) < 1e-20);
    }

    #[test]
    fn test_first_interference_zero() {
        let params = defaults();
        // β = π/2  <=>  sin θ = λ / (2d)
        let theta = (params.wavelength_m().0 / (2.0 * params.separation_m().0)).asin();
        assert!(interference_at(params.separation_m(), theta, params.wavelength_m()) < 1e-20);
    }

    #[test]
    fn test_two_parameter_ignores_width() {
        let a = defaults();
        let b = a.with(crate::controls::ControlId::SlitWidth, 1.0);
        let theta = 0.003;
        assert_eq!(
            intensity_at(&a, Variant::TwoParameter, theta),
            intensity_at(&b, Variant::TwoParameter, theta)
        );
        assert!(
            intensity_at(&a, Variant::TwoParameter, theta)
                >= intensity_at(&a, Variant::ThreeParameter, theta)
        );
    }

    #[test]
    fn test_array_forms_match_scalar() {
        let params = defaults();
        let angles = [-0.01, -0.001, 0.0, 0.002, 0.02];
        let inter = interference(params.separation_m(), &angles, params.wavelength_m());
        let diff = diffraction(params.slit_width_m(), &angles, params.wavelength_m());
        for (k, &theta) in angles.iter().enumerate() {
            let combined = intensity_at(&params, Variant::ThreeParameter, theta);
            assert!((inter[k] * diff[k] - combined).abs() < 1e-15);
        }
    }

    #[test]
    fn test_pattern_shape_and_stats() {
        let grid = AngleGrid::from_range(-1.0, 1.0, 0.125).unwrap();
        let curve = intensity_pattern(&defaults(), Variant::ThreeParameter, &grid);
        assert_eq!(curve.len(), grid.len());
        // grid lands exactly on 0 at index 8
        assert_eq!(curve.values()[8], 1.0);
        assert_eq!(curve.peak(), 1.0);
        assert!(curve.mean() > 0.0 && curve.mean() < 1.0);
        assert_eq!(curve.points(&grid).count(), grid.len());
    }
}
