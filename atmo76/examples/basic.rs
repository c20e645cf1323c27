//! Basic example demonstrating atmo76 library usage.
//!
//! Run with: cargo run --example basic

use atmo76::{evaluate_all, AtmosphereError, Field, UnitSystem};

fn main() -> Result<(), AtmosphereError> {
    // Conditions at a few well-known altitudes
    let altitudes = [
        ("Sea level", 0.0),
        ("Mount Everest summit", 8_848.0),
        ("Airliner cruise", 11_000.0),
        ("Armstrong limit", 19_000.0),
        ("Mesopause region", 86_000.0),
    ];

    println!("Standard atmosphere (metric):");
    println!("{:-<72}", "");

    for (name, altitude_m) in &altitudes {
        let c = evaluate_all(*altitude_m, UnitSystem::Metric)?;
        println!(
            "{:<22} {:>8.0} m: {:>7.2} °C, {:>12.4e} Pa, {:>10.4e} kg/m³",
            name,
            altitude_m,
            c[&Field::Temperature],
            c[&Field::Pressure],
            c[&Field::Density],
        );
    }

    // The same query in imperial units
    let c = evaluate_all(36_089.0, UnitSystem::Imperial)?;
    println!("\n36,089 ft (imperial):");
    println!("  Temperature:    {:.2} °F", c[&Field::Temperature]);
    println!("  Pressure:       {:.2} lbf/ft²", c[&Field::Pressure]);
    println!("  Density:        {:.6} slug/ft³", c[&Field::Density]);
    println!("  Speed of sound: {:.1} ft/s", c[&Field::SpeedOfSound]);

    Ok(())
}
