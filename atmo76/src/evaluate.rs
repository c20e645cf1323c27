//! Atmosphere evaluation: unit handling, clamping, and interpolation.
//!
//! This module provides [`evaluate`], the single entry point of the crate:
//! given an altitude, a unit system, and a set of requested output fields,
//! it interpolates the reference table and returns the converted values.

use std::collections::BTreeMap;

use crate::error::{AtmosphereError, Result};
use crate::interp;
use crate::table::{self, MAX_ALTITUDE_KM, MIN_ALTITUDE_KM};
use crate::units::{
    self, celsius_to_fahrenheit, kelvin_to_celsius, Field, UnitSystem,
};

/// Evaluate standard-atmosphere properties at the given altitude.
///
/// # Arguments
///
/// * `altitude` - Altitude in meters ([`UnitSystem::Metric`]) or feet
///   ([`UnitSystem::Imperial`])
/// * `units` - Unit system for the input altitude and all outputs
/// * `fields` - Non-empty list of quantities to report; duplicates are
///   collapsed
///
/// # Returns
///
/// A map from each requested field to its value in the selected unit
/// system (see [`crate::units`] for the unit of each field).
///
/// Altitudes outside the supported range of -2 km to 86 km are not an
/// error: the result is clamped flat to the nearest table bound and a
/// warning is logged.
///
/// # Errors
///
/// Returns an error if `fields` is empty or `altitude` is not finite.
///
/// # Example
///
/// ```
/// use atmo76::{evaluate, Field, UnitSystem};
///
/// let result = evaluate(0.0, UnitSystem::Metric, &[Field::Temperature])?;
/// let t = result[&Field::Temperature];
/// assert!((t - 15.0).abs() < 1e-6); // 15 °C at sea level
/// # Ok::<(), atmo76::AtmosphereError>(())
/// ```
pub fn evaluate(
    altitude: f64,
    units: UnitSystem,
    fields: &[Field],
) -> Result<BTreeMap<Field, f64>> {
    if fields.is_empty() {
        return Err(AtmosphereError::NoFieldsRequested);
    }
    if !altitude.is_finite() {
        return Err(AtmosphereError::NonFiniteAltitude { value: altitude });
    }

    let altitude_m = match units {
        UnitSystem::Metric => altitude,
        UnitSystem::Imperial => altitude * units::METERS_PER_FOOT,
    };
    let altitude_km = altitude_m / 1000.0;

    let clamped_km = altitude_km.clamp(MIN_ALTITUDE_KM, MAX_ALTITUDE_KM);
    if clamped_km != altitude_km {
        tracing::warn!(
            altitude_km,
            clamped_km,
            "altitude out of supported range; clamping to nearest valid value"
        );
    }

    let mut result = BTreeMap::new();
    for &field in fields {
        let si = interp::pchip(clamped_km, table::altitudes_km(), table::column(field));
        result.insert(field, convert(field, si, units));
    }
    Ok(result)
}

/// Evaluate all four properties at the given altitude.
///
/// Shorthand for [`evaluate`] with [`Field::ALL`].
pub fn evaluate_all(altitude: f64, units: UnitSystem) -> Result<BTreeMap<Field, f64>> {
    evaluate(altitude, units, &Field::ALL)
}

/// Convert an interpolated SI value to the requested unit system.
///
/// Temperature is reported in degrees (°C or °F) rather than kelvin in
/// both systems.
fn convert(field: Field, si_value: f64, units: UnitSystem) -> f64 {
    match (field, units) {
        (Field::Temperature, UnitSystem::Metric) => kelvin_to_celsius(si_value),
        (Field::Temperature, UnitSystem::Imperial) => {
            celsius_to_fahrenheit(kelvin_to_celsius(si_value))
        }
        (Field::Pressure, UnitSystem::Metric) => si_value,
        (Field::Pressure, UnitSystem::Imperial) => si_value / units::PASCALS_PER_LBF_FT2,
        (Field::Density, UnitSystem::Metric) => si_value,
        (Field::Density, UnitSystem::Imperial) => si_value / units::KG_M3_PER_SLUG_FT3,
        (Field::SpeedOfSound, UnitSystem::Metric) => si_value,
        (Field::SpeedOfSound, UnitSystem::Imperial) => si_value / units::METERS_PER_FOOT,
    }
}
