//! # Parameter Controls
//!
//! Range-bounded numeric controls, one per physical parameter. A control
//! knows its identity, its display label and unit, the interval the UI is
//! allowed to move it in, and the value a reset returns it to.
//!
//! Out-of-range values are rejected here, at binding time, so the
//! intensity model never sees a zero wavelength or a negative slit width.
//!
//! ## Example
//!
//! ```rust
//! use slit_core::controls::{ControlId, SliderControl};
//!
//! let mut slider = SliderControl::new(ControlId::Wavelength, 560.0).unwrap();
//! slider.set(650.0).unwrap();
//! assert!(slider.set(0.0).is_err());
//! slider.reset();
//! assert_eq!(slider.value(), 560.0);
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::{SlitError, SlitResult};

/// Identity of a parameter control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlId {
    /// Slit-center separation, millimeters
    Separation,
    /// Wavelength of the incoming light, nanometers
    Wavelength,
    /// Single-slit width, micrometers
    SlitWidth,
}

impl ControlId {
    pub const ALL: [ControlId; 3] = [ControlId::Separation, ControlId::Wavelength, ControlId::SlitWidth];

    /// Label shown next to the slider
    pub fn label(&self) -> &'static str {
        match self {
            ControlId::Separation => "Spaltmittenabstand [mm]",
            ControlId::Wavelength => "Wellenlänge [nm]",
            ControlId::SlitWidth => "Spaltbreite [µm]",
        }
    }

    /// Display unit of the control's value
    pub fn unit(&self) -> &'static str {
        match self {
            ControlId::Separation => "mm",
            ControlId::Wavelength => "nm",
            ControlId::SlitWidth => "µm",
        }
    }

    /// Field name used in error reports
    pub fn field(&self) -> &'static str {
        match self {
            ControlId::Separation => "separation_mm",
            ControlId::Wavelength => "wavelength_nm",
            ControlId::SlitWidth => "slit_width_um",
        }
    }

    /// Closed interval the control may take, in its display unit
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            ControlId::Separation => 0.01..=0.30,
            ControlId::Wavelength => 380.0..=740.0,
            ControlId::SlitWidth => 0.01..=50.0,
        }
    }

    /// Suggested slider increment
    pub fn step(&self) -> f64 {
        match self {
            ControlId::Separation => 0.001,
            ControlId::Wavelength => 1.0,
            ControlId::SlitWidth => 0.01,
        }
    }

    /// Reject `value` unless it is finite and inside [`ControlId::range`].
    pub fn check(&self, value: f64) -> SlitResult<()> {
        let range = self.range();
        if !value.is_finite() {
            return Err(SlitError::invalid_configuration(
                self.field(),
                value.to_string(),
                "Value must be finite",
            ));
        }
        if !range.contains(&value) {
            return Err(SlitError::invalid_configuration(
                self.field(),
                value.to_string(),
                format!(
                    "Value must be between {} and {} {}",
                    range.start(),
                    range.end(),
                    self.unit()
                ),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A range-bounded slider value with a remembered initial value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderControl {
    id: ControlId,
    initial: f64,
    value: f64,
}

impl SliderControl {
    /// Create a control starting (and resetting) at `initial`.
    pub fn new(id: ControlId, initial: f64) -> SlitResult<Self> {
        id.check(initial)?;
        Ok(Self {
            id,
            initial,
            value: initial,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Move the control. The previous value is kept on rejection.
    pub fn set(&mut self, value: f64) -> SlitResult<()> {
        self.id.check(value)?;
        self.value = value;
        Ok(())
    }

    /// Restore the initial value
    pub fn reset(&mut self) {
        self.value = self.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_ranges() {
        assert_eq!(ControlId::Separation.range(), 0.01..=0.30);
        assert_eq!(ControlId::Wavelength.range(), 380.0..=740.0);
        assert_eq!(ControlId::SlitWidth.range(), 0.01..=50.0);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(ControlId::Wavelength.check(380.0).is_ok());
        assert!(ControlId::Wavelength.check(740.0).is_ok());
        assert!(ControlId::Wavelength.check(379.9).is_err());
        assert!(ControlId::Wavelength.check(0.0).is_err());
    }

    #[test]
    fn test_rejected_set_keeps_value() {
        let mut slider = SliderControl::new(ControlId::SlitWidth, 25.0).unwrap();
        slider.set(10.0).unwrap();
        let err = slider.set(51.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
        assert_eq!(slider.value(), 10.0);
        assert!(slider.set(f64::NAN).is_err());
        assert_eq!(slider.value(), 10.0);
    }

    #[test]
    fn test_reset() {
        let mut slider = SliderControl::new(ControlId::Separation, 0.155).unwrap();
        slider.set(0.3).unwrap();
        slider.reset();
        assert_eq!(slider.value(), 0.155);
    }

    #[test]
    fn test_initial_out_of_range() {
        assert!(SliderControl::new(ControlId::Separation, 0.5).is_err());
    }
}
