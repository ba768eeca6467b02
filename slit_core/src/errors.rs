//! # Error Types
//!
//! Structured error types for slit_core. Every rejected value carries the
//! field name, the offending value and a human readable reason so that both
//! the GUI status bar and the CLI JSON output can report it verbatim.
//!
//! ## Example
//!
//! ```rust
//! use slit_core::errors::{SlitError, SlitResult};
//!
//! fn validate_step(step_rad: f64) -> SlitResult<()> {
//!     if step_rad <= 0.0 {
//!         return Err(SlitError::invalid_configuration(
//!             "step_rad",
//!             step_rad.to_string(),
//!             "Step must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for slit_core operations
pub type SlitResult<T> = Result<T, SlitError>;

/// Structured error type for pattern configuration and evaluation.
///
/// The α = 0 singularity of the diffraction term has no variant here: it is
/// resolved inside [`crate::intensity`] and never reaches a caller.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SlitError {
    /// A grid setting or physical parameter is unusable (non-positive,
    /// non-finite, or outside its control range)
    #[error("Invalid configuration for '{field}': {value} - {reason}")]
    InvalidConfiguration {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl SlitError {
    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SlitError::InvalidConfiguration {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        SlitError::Serialization {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SlitError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            SlitError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for SlitError {
    fn from(err: serde_json::Error) -> Self {
        SlitError::serialization(err.to_string())
    }
}

/// Reject non-finite or non-positive values for `field`.
pub(crate) fn require_positive(field: &str, value: f64) -> SlitResult<()> {
    if !value.is_finite() {
        return Err(SlitError::invalid_configuration(
            field,
            value.to_string(),
            "Value must be finite",
        ));
    }
    if value <= 0.0 {
        return Err(SlitError::invalid_configuration(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SlitError::invalid_configuration("step_rad", "-1e-5", "Step must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidConfiguration\""));
        let roundtrip: SlitError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SlitError::invalid_configuration("a", "b", "c").error_code(),
            "INVALID_CONFIGURATION"
        );
        assert_eq!(SlitError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("x", 1.0).is_ok());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", -2.0).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
        assert!(require_positive("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_display_message() {
        let error = SlitError::invalid_configuration("wavelength_nm", "0", "Value must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration for 'wavelength_nm': 0 - Value must be positive"
        );
    }
}
