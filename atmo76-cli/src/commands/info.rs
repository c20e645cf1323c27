use anyhow::Result;
use atmo76::{samples, MAX_ALTITUDE_KM, MIN_ALTITUDE_KM};

pub fn run() -> Result<()> {
    let count = samples().len();
    let sea_level = samples().find(|s| s.altitude_km == 0.0);

    println!("U.S. Standard Atmosphere 1976 reference table");
    println!();
    println!("Coverage: {} km to {} km", MIN_ALTITUDE_KM, MAX_ALTITUDE_KM);
    println!(
        "Samples: {} (0.5 km grid from -0.5 to 20 km, 2 km grid elsewhere)",
        count
    );

    if let Some(s) = sea_level {
        println!();
        println!("Sea level reference:");
        println!(
            "  Temperature:    {:.2} K ({:.2} °C)",
            s.temperature_k,
            s.temperature_k - 273.15
        );
        println!("  Pressure:       {:.0} Pa", s.pressure_pa);
        println!("  Density:        {:.4} kg/m³", s.density_kg_m3);
        println!("  Speed of sound: {:.2} m/s", s.speed_of_sound_m_s);
    }

    Ok(())
}
