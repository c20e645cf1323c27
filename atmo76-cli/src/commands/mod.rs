pub mod batch;
pub mod info;
pub mod query;

use atmo76::{Field, UnitSystem};

/// Format a value for display: fixed precision for temperature and speed,
/// scientific notation for pressure and density (which span ten orders of
/// magnitude over the table range).
pub(crate) fn format_value(field: Field, value: f64) -> String {
    match field {
        Field::Temperature | Field::SpeedOfSound => format!("{value:.2}"),
        Field::Pressure | Field::Density => format!("{value:.6e}"),
    }
}

/// Unit label for human-readable output.
pub(crate) fn unit_label(field: Field, units: UnitSystem) -> &'static str {
    match (field, units) {
        (Field::Temperature, UnitSystem::Metric) => "°C",
        (Field::Temperature, UnitSystem::Imperial) => "°F",
        (Field::Pressure, UnitSystem::Metric) => "Pa",
        (Field::Pressure, UnitSystem::Imperial) => "lbf/ft²",
        (Field::Density, UnitSystem::Metric) => "kg/m³",
        (Field::Density, UnitSystem::Imperial) => "slug/ft³",
        (Field::SpeedOfSound, UnitSystem::Metric) => "m/s",
        (Field::SpeedOfSound, UnitSystem::Imperial) => "ft/s",
    }
}
