//! # Unit Types
//!
//! Type-safe wrappers for the length scales that meet in a double-slit
//! setup. Slit separation is entered in millimeters, slit width in
//! micrometers and wavelength in nanometers, yet the intensity model needs
//! all three in the same base unit. Each display unit converts into
//! [`Meters`], and the model only ever sees meters.
//!
//! ## Example
//!
//! ```rust
//! use slit_core::units::{Meters, Micrometers, Millimeters, Nanometers};
//!
//! let d: Meters = Millimeters(0.155).into();
//! let w: Meters = Micrometers(25.0).into();
//! let l: Meters = Nanometers(560.0).into();
//! assert!((d.0 - 1.55e-4).abs() < 1e-15);
//! assert!((w.0 - 2.5e-5).abs() < 1e-15);
//! assert!((l.0 - 5.6e-7).abs() < 1e-18);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters (internal base unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters (slit separation)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in micrometers (slit width)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Micrometers(pub f64);

/// Length in nanometers (wavelength)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nanometers(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 * 1e-3)
    }
}

impl From<Micrometers> for Meters {
    fn from(um: Micrometers) -> Self {
        Meters(um.0 * 1e-6)
    }
}

impl From<Nanometers> for Meters {
    fn from(nm: Nanometers) -> Self {
        Meters(nm.0 * 1e-9)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl Radians {
    /// Angle in degrees, for display
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }
}
