//! # Pattern Analysis
//!
//! Closed-form landmarks of a double-slit pattern plus a scan of the
//! sampled curve for its local maxima. Shown beside the plot and printed by
//! the CLI.

use serde::{Deserialize, Serialize};

use crate::grid::AngleGrid;
use crate::intensity::IntensityCurve;
use crate::parameters::{SlitParameters, Variant};
use crate::units::{Meters, Radians};

/// Maxima below this intensity are treated as numerical noise
pub const MAXIMUM_THRESHOLD: f64 = 1e-3;

/// Relative distance below which `d / w` counts as an integer
const RATIO_TOLERANCE: f64 = 1e-9;

/// Screen distance between adjacent interference maxima, `λ L / d`
/// (small-angle approximation).
pub fn fringe_spacing(separation: Meters, wavelength: Meters, screen_distance_m: f64) -> Meters {
    Meters(wavelength.0 * screen_distance_m / separation.0)
}

/// Angle of the first single-slit zero, `asin(λ / w)`.
///
/// `None` when the slit is not wider than the wavelength: the central
/// diffraction maximum then fills the whole half-space.
pub fn first_diffraction_zero(slit_width: Meters, wavelength: Meters) -> Option<Radians> {
    let ratio = wavelength.0 / slit_width.0;
    (ratio < 1.0).then(|| Radians(ratio.asin()))
}

/// Angle of the first interference zero, `asin(λ / 2d)`.
pub fn first_interference_zero(separation: Meters, wavelength: Meters) -> Option<Radians> {
    let ratio = wavelength.0 / (2.0 * separation.0);
    (ratio < 1.0).then(|| Radians(ratio.asin()))
}

/// Bright interference orders inside the central diffraction maximum.
///
/// Counts the integers `m` with `|m| < d / w`; an order that falls exactly
/// on a diffraction zero is suppressed (missing order). Ratios within
/// rounding error of an integer are treated as that integer, since the unit
/// conversions leave e.g. 0.05 mm / 25 µm at 2.0000000000000004.
pub fn fringes_in_central_envelope(separation: Meters, slit_width: Meters) -> usize {
    let ratio = separation.0 / slit_width.0;
    if !ratio.is_finite() || ratio <= 0.0 {
        return 0;
    }
    let nearest = ratio.round();
    let ratio = if (ratio - nearest).abs() < RATIO_TOLERANCE * ratio {
        nearest
    } else {
        ratio
    };
    let highest_order = ratio.ceil() as usize - 1;
    2 * highest_order + 1
}

/// Angles of the strict local maxima of `curve` above [`MAXIMUM_THRESHOLD`].
///
/// A flat top counts once, at its first sample.
pub fn find_maxima(curve: &IntensityCurve, grid: &AngleGrid) -> Vec<f64> {
    let values = curve.values();
    let angles = grid.angles();
    let n = values.len().min(angles.len());
    if n < 3 {
        return Vec::new();
    }

    (1..n - 1)
        .filter(|&i| {
            values[i] > MAXIMUM_THRESHOLD && values[i] > values[i - 1] && values[i] >= values[i + 1]
        })
        .map(|i| angles[i])
        .collect()
}

/// Derived quantities of one evaluated pattern.
///
/// ## JSON Example
///
/// ```json
/// {
///   "parameters": { "separation": 0.155, "wavelength": 560.0, "slit_width": 25.0 },
///   "variant": "three_parameter",
///   "samples": 10510,
///   "peak_intensity": 1.0,
///   "mean_intensity": 0.06,
///   "fringe_spacing_m": 0.0018064,
///   "first_diffraction_zero_rad": 0.0224,
///   "first_interference_zero_rad": 0.0018,
///   "fringes_in_central_envelope": 13,
///   "maxima_angles_rad": [0.0, 0.0036]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSummary {
    pub parameters: SlitParameters,
    pub variant: Variant,
    pub samples: usize,
    pub peak_intensity: f64,
    pub mean_intensity: f64,
    pub fringe_spacing_m: f64,
    /// Absent in the two-parameter variant or when λ ≥ w
    pub first_diffraction_zero_rad: Option<Radians>,
    pub first_interference_zero_rad: Option<Radians>,
    /// Absent in the two-parameter variant
    pub fringes_in_central_envelope: Option<usize>,
    pub maxima_angles_rad: Vec<f64>,
}

/// Collect the landmarks of `curve`, evaluated for `params` over `grid`.
pub fn summarize(
    params: &SlitParameters,
    variant: Variant,
    grid: &AngleGrid,
    curve: &IntensityCurve,
    screen_distance_m: f64,
) -> PatternSummary {
    let separation = params.separation_m();
    let wavelength = params.wavelength_m();
    let slit_width = params.slit_width_m();

    let (diffraction_zero, envelope_fringes) = if variant.uses_slit_width() {
        (
            first_diffraction_zero(slit_width, wavelength),
            Some(fringes_in_central_envelope(separation, slit_width)),
        )
    } else {
        (None, None)
    };

    PatternSummary {
        parameters: *params,
        variant,
        samples: curve.len(),
        peak_intensity: curve.peak(),
        mean_intensity: curve.mean(),
        fringe_spacing_m: fringe_spacing(separation, wavelength, screen_distance_m).0,
        first_diffraction_zero_rad: diffraction_zero,
        first_interference_zero_rad: first_interference_zero(separation, wavelength),
        fringes_in_central_envelope: envelope_fringes,
        maxima_angles_rad: find_maxima(curve, grid),
    }
}
