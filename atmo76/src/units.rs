//! Unit systems, output fields, and conversion factors.
//!
//! Input altitudes and output quantities are expressed in one of two unit
//! systems:
//!
//! | Quantity       | Metric | Imperial |
//! |----------------|--------|----------|
//! | Altitude (in)  | m      | ft       |
//! | Temperature    | °C     | °F       |
//! | Pressure       | Pa     | lbf/ft²  |
//! | Density        | kg/m³  | slug/ft³ |
//! | Speed of sound | m/s    | ft/s     |
//!
//! Imperial pressure and density use the gravitational (slug-based) system,
//! which keeps `rho * a²` dimensionally consistent with pressure.

use std::fmt;
use std::str::FromStr;

use crate::error::AtmosphereError;

/// Meters per international foot (exact).
pub(crate) const METERS_PER_FOOT: f64 = 0.3048;

/// Pascals per pound-force per square foot.
pub(crate) const PASCALS_PER_LBF_FT2: f64 = 47.880_259;

/// kg/m³ per slug/ft³.
pub(crate) const KG_M3_PER_SLUG_FT3: f64 = 515.378_819;

pub(crate) fn kelvin_to_celsius(t_k: f64) -> f64 {
    t_k - 273.15
}

pub(crate) fn celsius_to_fahrenheit(t_c: f64) -> f64 {
    t_c * 1.8 + 32.0
}

/// Unit system for the input altitude and all output quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    /// Altitude in meters; outputs in °C, Pa, kg/m³, m/s.
    #[default]
    Metric,
    /// Altitude in feet; outputs in °F, lbf/ft², slug/ft³, ft/s.
    Imperial,
}

impl UnitSystem {
    /// Canonical lowercase name ("metric" or "imperial").
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AtmosphereError;

    /// Parses a unit-system name, case-insensitively.
    ///
    /// Accepts "metric", "si", "m" and "imperial", "ft", "us".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" | "si" | "m" => Ok(UnitSystem::Metric),
            "imperial" | "ft" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(AtmosphereError::UnknownUnitSystem {
                name: s.to_string(),
            }),
        }
    }
}

/// An output quantity the evaluator can report.
///
/// The `Ord` impl fixes the iteration order of results: temperature,
/// pressure, density, speed of sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Temperature,
    Pressure,
    Density,
    SpeedOfSound,
}

impl Field {
    /// All four fields, in reporting order.
    pub const ALL: [Field; 4] = [
        Field::Temperature,
        Field::Pressure,
        Field::Density,
        Field::SpeedOfSound,
    ];

    /// Canonical snake_case name, suitable for JSON keys and CSV headers.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Temperature => "temperature",
            Field::Pressure => "pressure",
            Field::Density => "density",
            Field::SpeedOfSound => "speed_of_sound",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = AtmosphereError;

    /// Parses a field name, case-insensitively.
    ///
    /// Accepts the canonical names plus the short aliases `t`, `p`, `rho`,
    /// and `a` used in aerodynamics texts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "temperature" | "temp" | "t" => Ok(Field::Temperature),
            "pressure" | "p" => Ok(Field::Pressure),
            "density" | "rho" | "d" => Ok(Field::Density),
            "speed_of_sound" | "speed-of-sound" | "sound" | "a" => Ok(Field::SpeedOfSound),
            _ => Err(AtmosphereError::UnknownField {
                name: s.to_string(),
            }),
        }
    }
}
