//! Example demonstrating off-grid interpolation against the raw table.
//!
//! Run with: cargo run --example interpolation

use atmo76::{evaluate, samples, AtmosphereError, Field, UnitSystem};

fn main() -> Result<(), AtmosphereError> {
    // Query between two table rows and show the bracketing samples
    let altitude_m = 10_250.0;
    let altitude_km = altitude_m / 1000.0;

    let below = samples()
        .filter(|s| s.altitude_km <= altitude_km)
        .last()
        .expect("altitude within table range");
    let above = samples()
        .find(|s| s.altitude_km > altitude_km)
        .expect("altitude within table range");

    println!("Interpolating at {altitude_m} m:");
    println!("{:-<60}", "");
    println!(
        "Table row {:>5.1} km: {:>8.3} K, {:>11.2} Pa",
        below.altitude_km, below.temperature_k, below.pressure_pa
    );

    let result = evaluate(
        altitude_m,
        UnitSystem::Metric,
        &[Field::Temperature, Field::Pressure],
    )?;
    println!(
        "Interpolated {:>4.2} km: {:>8.3} K, {:>11.2} Pa",
        altitude_km,
        result[&Field::Temperature] + 273.15,
        result[&Field::Pressure]
    );

    println!(
        "Table row {:>5.1} km: {:>8.3} K, {:>11.2} Pa",
        above.altitude_km, above.temperature_k, above.pressure_pa
    );

    Ok(())
}
