//! # Pattern Session
//!
//! Explicit application state for an interactive pattern view: the angle
//! grid (built once), one control per parameter, the active variant and the
//! curve currently on screen.
//!
//! Every accepted change fully recomputes the curve over the whole grid.
//! There is no debouncing, batching or partial update. A rejected change
//! leaves both the control and the curve untouched.
//!
//! ## Example
//!
//! ```rust
//! use slit_core::controls::ControlId;
//! use slit_core::session::PatternSession;
//!
//! let mut session = PatternSession::with_defaults().unwrap();
//! let initial = session.curve().clone();
//!
//! session.set_control(ControlId::Wavelength, 700.0).unwrap();
//! assert_ne!(session.curve(), &initial);
//!
//! session.reset();
//! assert_eq!(session.curve(), &initial);
//! ```

use crate::analysis::{summarize, PatternSummary};
use crate::config::PatternConfig;
use crate::controls::{ControlId, SliderControl};
use crate::errors::SlitResult;
use crate::grid::AngleGrid;
use crate::intensity::{intensity_pattern, IntensityCurve};
use crate::parameters::{SlitParameters, Variant};

/// Owns the grid, the controls and the derived curve.
#[derive(Debug, Clone)]
pub struct PatternSession {
    config: PatternConfig,
    grid: AngleGrid,
    variant: Variant,
    separation: SliderControl,
    wavelength: SliderControl,
    slit_width: SliderControl,
    curve: IntensityCurve,
}

impl PatternSession {
    /// Build the grid and the controls from `config` and evaluate the
    /// initial curve.
    pub fn new(config: PatternConfig) -> SlitResult<Self> {
        config.validate()?;
        let grid = config.build_grid()?;
        let defaults = config.defaults;

        let mut session = Self {
            config,
            grid,
            variant: config.variant,
            separation: SliderControl::new(ControlId::Separation, defaults.get(ControlId::Separation))?,
            wavelength: SliderControl::new(ControlId::Wavelength, defaults.get(ControlId::Wavelength))?,
            slit_width: SliderControl::new(ControlId::SlitWidth, defaults.get(ControlId::SlitWidth))?,
            curve: IntensityCurve::default(),
        };
        session.recompute();
        Ok(session)
    }

    /// Session over the compiled-in default configuration
    pub fn with_defaults() -> SlitResult<Self> {
        Self::new(PatternConfig::default())
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    pub fn grid(&self) -> &AngleGrid {
        &self.grid
    }

    pub fn curve(&self) -> &IntensityCurve {
        &self.curve
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn control(&self, id: ControlId) -> &SliderControl {
        match id {
            ControlId::Separation => &self.separation,
            ControlId::Wavelength => &self.wavelength,
            ControlId::SlitWidth => &self.slit_width,
        }
    }

    fn control_mut(&mut self, id: ControlId) -> &mut SliderControl {
        match id {
            ControlId::Separation => &mut self.separation,
            ControlId::Wavelength => &mut self.wavelength,
            ControlId::SlitWidth => &mut self.slit_width,
        }
    }

    /// Current control values as model parameters
    pub fn parameters(&self) -> SlitParameters {
        ControlId::ALL
            .iter()
            .fold(SlitParameters::default(), |params, &id| {
                params.with(id, self.control(id).value())
            })
    }

    /// Move one control and recompute the curve.
    pub fn set_control(&mut self, id: ControlId, value: f64) -> SlitResult<&IntensityCurve> {
        if let Err(err) = self.control_mut(id).set(value) {
            log::warn!("rejected {} = {}: {}", id.field(), value, err);
            return Err(err);
        }
        self.recompute();
        Ok(&self.curve)
    }

    /// Restore every control to its initial value and recompute.
    pub fn reset(&mut self) -> &IntensityCurve {
        for id in ControlId::ALL {
            self.control_mut(id).reset();
        }
        log::info!("controls reset to {}", self.parameters());
        self.recompute();
        &self.curve
    }

    /// Switch between the two- and three-parameter model and recompute.
    pub fn set_variant(&mut self, variant: Variant) -> &IntensityCurve {
        if variant != self.variant {
            log::info!("variant switched to {:?}", variant);
            self.variant = variant;
            self.recompute();
        }
        &self.curve
    }

    /// Derived quantities for the current curve
    pub fn summary(&self) -> PatternSummary {
        summarize(
            &self.parameters(),
            self.variant,
            &self.grid,
            &self.curve,
            self.config.screen_distance_m,
        )
    }

    fn recompute(&mut self) {
        let params = self.parameters();
        self.curve = intensity_pattern(&params, self.variant, &self.grid);
        log::debug!("recomputed {} samples for {}", self.curve.len(), params);
    }
}
