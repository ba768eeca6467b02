//! Integration tests: physical properties of the double-slit intensity curve
//! over the default angle grid.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use slit_core::analysis::{find_maxima, first_diffraction_zero};
use slit_core::controls::ControlId;
use slit_core::intensity::{diffraction_at, intensity_at, intensity_pattern};
use slit_core::units::{Meters, Micrometers, Millimeters, Nanometers};
use slit_core::{PatternConfig, PatternSession, SlitParameters, Variant};

fn params(d_mm: f64, l_nm: f64, w_um: f64) -> SlitParameters {
    SlitParameters::new(Millimeters(d_mm), Nanometers(l_nm), Micrometers(w_um))
}

/// Corners and center of the slider ranges
fn parameter_sweep() -> Vec<SlitParameters> {
    let mut sweep = vec![SlitParameters::default()];
    for &d in &[0.01, 0.30] {
        for &l in &[380.0, 740.0] {
            for &w in &[0.01, 50.0] {
                sweep.push(params(d, l, w));
            }
        }
    }
    sweep
}

#[test]
fn intensity_is_bounded_on_default_grid() {
    let grid = PatternConfig::default().build_grid().unwrap();
    for p in parameter_sweep() {
        for variant in [Variant::ThreeParameter, Variant::TwoParameter] {
            let curve = intensity_pattern(&p, variant, &grid);
            assert_eq!(curve.len(), grid.len());
            for &i in curve.values() {
                assert!(i.is_finite(), "non-finite intensity for {}", p);
                assert!((0.0..=1.0 + 1e-12).contains(&i), "I = {} out of range for {}", i, p);
            }
        }
    }
}

#[test]
fn zero_angle_is_exactly_one() {
    for p in parameter_sweep() {
        let i = intensity_at(&p, Variant::ThreeParameter, 0.0);
        assert_abs_diff_eq!(i, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn pattern_is_symmetric() {
    let p = SlitParameters::default();
    for k in 1..500 {
        let theta = k as f64 * 1.1e-4;
        assert_relative_eq!(
            intensity_at(&p, Variant::ThreeParameter, theta),
            intensity_at(&p, Variant::ThreeParameter, -theta),
            epsilon = 1e-12
        );
    }
}

#[test]
fn default_parameters_concrete_case() {
    let p = params(0.155, 560.0, 25.0);
    assert_abs_diff_eq!(intensity_at(&p, Variant::ThreeParameter, 0.0), 1.0, epsilon = 1e-9);

    // α = π at sin θ = λ / w
    let theta = (560e-9f64 / 25e-6).asin();
    assert_abs_diff_eq!(diffraction_at(p.slit_width_m(), theta, p.wavelength_m()), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(intensity_at(&p, Variant::ThreeParameter, theta), 0.0, epsilon = 1e-9);
}

#[test]
fn wider_slit_narrows_envelope() {
    let wavelength: Meters = Nanometers(560.0).into();
    let narrow = first_diffraction_zero(Micrometers(10.0).into(), wavelength).unwrap();
    let wide = first_diffraction_zero(Micrometers(40.0).into(), wavelength).unwrap();
    assert!(wide.0 < narrow.0);

    // Between the two zeros the wide slit is already dark, the narrow one is not
    let theta = 0.5 * (wide.0 + narrow.0);
    let at = |w: f64| diffraction_at(Micrometers(w).into(), theta, wavelength);
    assert!(at(10.0) > at(40.0));
}

#[test]
fn larger_separation_means_more_fringes() {
    let grid = PatternConfig::default().build_grid().unwrap();
    let count = |d: f64| {
        let curve = intensity_pattern(&params(d, 560.0, 25.0), Variant::TwoParameter, &grid);
        find_maxima(&curve, &grid).len()
    };
    assert!(count(0.2) > count(0.1));
    assert!(count(0.1) > count(0.05));
}

#[test]
fn reset_after_changes_restores_default_curve() {
    let mut session = PatternSession::with_defaults().unwrap();
    let default_curve = intensity_pattern(
        &params(0.155, 560.0, 25.0),
        Variant::ThreeParameter,
        session.grid(),
    );
    assert_eq!(session.curve(), &default_curve);

    session.set_control(ControlId::Separation, 0.01).unwrap();
    session.set_control(ControlId::Wavelength, 740.0).unwrap();
    assert!(session.set_control(ControlId::SlitWidth, 80.0).is_err());
    session.set_control(ControlId::SlitWidth, 0.5).unwrap();
    session.set_control(ControlId::Wavelength, 380.0).unwrap();
    assert_ne!(session.curve(), &default_curve);

    session.reset();
    assert_eq!(session.curve(), &default_curve);
}

#[test]
fn summary_serializes_to_json() {
    let session = PatternSession::with_defaults().unwrap();
    let summary = session.summary();
    assert_eq!(summary.fringes_in_central_envelope, Some(13));
    assert_abs_diff_eq!(summary.peak_intensity, 1.0, epsilon = 1e-3);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["variant"], "three_parameter");
    assert_eq!(json["parameters"]["wavelength"], 560.0);
}
