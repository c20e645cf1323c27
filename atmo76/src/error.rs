//! Error types for the atmo76 library.

use thiserror::Error;

/// Errors that can occur when evaluating atmosphere properties.
///
/// An out-of-range altitude is deliberately *not* an error: the evaluator
/// clamps to the nearest table bound and logs a warning instead.
#[derive(Error, Debug)]
pub enum AtmosphereError {
    /// The requested field list was empty.
    #[error("no output fields requested (expected at least one of: temperature, pressure, density, speed_of_sound)")]
    NoFieldsRequested,

    /// A field name could not be parsed.
    #[error("unknown output field: {name:?} (expected temperature, pressure, density, or speed_of_sound)")]
    UnknownField { name: String },

    /// A unit-system name could not be parsed.
    #[error("unknown unit system: {name:?} (expected \"metric\" or \"imperial\")")]
    UnknownUnitSystem { name: String },

    /// The altitude was NaN or infinite.
    #[error("altitude must be a finite number, got {value}")]
    NonFiniteAltitude { value: f64 },
}

/// Result type alias using [`AtmosphereError`].
pub type Result<T> = std::result::Result<T, AtmosphereError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AtmosphereError::UnknownField {
            name: "humidity".to_string(),
        };
        assert!(err.to_string().contains("humidity"));

        let err = AtmosphereError::UnknownUnitSystem {
            name: "nautical".to_string(),
        };
        assert!(err.to_string().contains("nautical"));

        let err = AtmosphereError::NonFiniteAltitude { value: f64::NAN };
        assert!(err.to_string().contains("NaN"));
    }
}
