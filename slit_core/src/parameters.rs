//! # Slit Parameters
//!
//! The three physical inputs of the intensity model, each tagged with the
//! unit it is entered in. [`SlitParameters::validate`] applies the control
//! ranges from [`crate::controls`].
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "separation": 0.155,
//!   "wavelength": 560.0,
//!   "slit_width": 25.0
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::controls::ControlId;
use crate::errors::SlitResult;
use crate::units::{Meters, Micrometers, Millimeters, Nanometers};

/// Slit separation, wavelength and slit width in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlitParameters {
    /// Distance between the two slit centers
    pub separation: Millimeters,
    /// Wavelength of the incoming light
    pub wavelength: Nanometers,
    /// Width of each slit
    pub slit_width: Micrometers,
}

impl SlitParameters {
    pub fn new(separation: Millimeters, wavelength: Nanometers, slit_width: Micrometers) -> Self {
        Self {
            separation,
            wavelength,
            slit_width,
        }
    }

    /// Check every value against its control range.
    pub fn validate(&self) -> SlitResult<()> {
        ControlId::Separation.check(self.separation.0)?;
        ControlId::Wavelength.check(self.wavelength.0)?;
        ControlId::SlitWidth.check(self.slit_width.0)?;
        Ok(())
    }

    /// Value of the parameter bound to `id`, in its display unit
    pub fn get(&self, id: ControlId) -> f64 {
        match id {
            ControlId::Separation => self.separation.0,
            ControlId::Wavelength => self.wavelength.0,
            ControlId::SlitWidth => self.slit_width.0,
        }
    }

    /// Copy with the parameter bound to `id` replaced (unvalidated).
    pub fn with(mut self, id: ControlId, value: f64) -> Self {
        match id {
            ControlId::Separation => self.separation = Millimeters(value),
            ControlId::Wavelength => self.wavelength = Nanometers(value),
            ControlId::SlitWidth => self.slit_width = Micrometers(value),
        }
        self
    }

    pub fn separation_m(&self) -> Meters {
        self.separation.into()
    }

    pub fn wavelength_m(&self) -> Meters {
        self.wavelength.into()
    }

    pub fn slit_width_m(&self) -> Meters {
        self.slit_width.into()
    }
}

impl fmt::Display for SlitParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "d = {:.3} mm, λ = {:.0} nm, w = {:.2} µm",
            self.separation.0, self.wavelength.0, self.slit_width.0
        )
    }
}

/// Which intensity model drives the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Interference modulated by single-slit diffraction
    #[default]
    ThreeParameter,
    /// Interference of two ideal narrow slits; the width is ignored
    TwoParameter,
}

impl Variant {
    /// Controls shown for this variant, in display order
    pub fn controls(&self) -> &'static [ControlId] {
        match self {
            Variant::ThreeParameter => &ControlId::ALL,
            Variant::TwoParameter => &[ControlId::Separation, ControlId::Wavelength],
        }
    }

    pub fn uses_slit_width(&self) -> bool {
        matches!(self, Variant::ThreeParameter)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::ThreeParameter => "Doppelspalt mit Spaltbreite",
            Variant::TwoParameter => "Idealer Doppelspalt",
        }
    }
}
