//! The U.S. Standard Atmosphere 1976 reference table.
//!
//! This module embeds a fixed set of (altitude, temperature, pressure,
//! density, speed of sound) samples spanning -2 km to 86 km, in SI units.
//! The data is stored as parallel constant arrays aligned by index; the
//! altitude column is strictly increasing with no duplicates.
//!
//! # Grid
//!
//! Two granularities exist in the published tables: a coarse 2 km grid over
//! the full range and a fine 0.5 km grid over the lower atmosphere. The
//! merged working grid here uses the fine grid wherever it is available:
//!
//! - -2.0 km: coarse grid
//! - -0.5 km to 20.0 km: fine grid, 0.5 km spacing
//! - 22.0 km to 86.0 km: coarse grid, 2 km spacing
//!
//! # Derivation
//!
//! Values follow the USSA1976 geopotential layer model (lapse-rate layers
//! based at 0, 11, 20, 32, 47, 51, and 71 km geopotential, model top at
//! 84.852 km geopotential = 86 km geometric). Grid altitudes are geometric
//! and converted via `h = r*z / (r + z)` with r = 6356.766 km. Constants:
//! g0 = 9.80665 m/s², R = 287.0528 J/(kg*K), gamma = 1.4. The small
//! molecular-weight correction above 80 km is neglected.

use crate::units::Field;

/// Number of samples in the reference table.
pub(crate) const LEN: usize = 76;

/// Lowest supported altitude, in kilometers.
pub const MIN_ALTITUDE_KM: f64 = -2.0;

/// Highest supported altitude, in kilometers.
pub const MAX_ALTITUDE_KM: f64 = 86.0;

static ALTITUDE_KM: [f64; LEN] = [
    -2.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5,
    4.0, 4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 7.5, 8.0, 8.5,
    9.0, 9.5, 10.0, 10.5, 11.0, 11.5, 12.0, 12.5, 13.0, 13.5,
    14.0, 14.5, 15.0, 15.5, 16.0, 16.5, 17.0, 17.5, 18.0, 18.5,
    19.0, 19.5, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0,
    36.0, 38.0, 40.0, 42.0, 44.0, 46.0, 48.0, 50.0, 52.0, 54.0,
    56.0, 58.0, 60.0, 62.0, 64.0, 66.0, 68.0, 70.0, 72.0, 74.0,
    76.0, 78.0, 80.0, 82.0, 84.0, 86.0,
];

static TEMPERATURE_K: [f64; LEN] = [
    301.154, 291.400, 288.150, 284.900, 281.651, 278.402,
    275.154, 271.906, 268.659, 265.413, 262.166, 258.921,
    255.676, 252.431, 249.187, 245.943, 242.700, 239.457,
    236.215, 232.974, 229.733, 226.492, 223.252, 220.013,
    216.774, 216.650, 216.650, 216.650, 216.650, 216.650,
    216.650, 216.650, 216.650, 216.650, 216.650, 216.650,
    216.650, 216.650, 216.650, 216.650, 216.650, 216.650,
    216.650, 218.574, 220.560, 222.544, 224.527, 226.509,
    228.490, 233.744, 239.282, 244.818, 250.350, 255.878,
    261.403, 266.925, 270.650, 270.650, 269.031, 263.524,
    258.019, 252.518, 247.021, 241.527, 236.036, 230.549,
    225.065, 219.585, 214.263, 210.353, 206.446, 202.541,
    198.639, 194.739, 190.841, 186.946,
];

static PRESSURE_PA: [f64; LEN] = [
    1.277829e+05, 1.074780e+05, 1.013250e+05, 9.546128e+04,
    8.987627e+04, 8.455966e+04, 7.950141e+04, 7.469173e+04,
    7.012114e+04, 6.578036e+04, 6.166042e+04, 5.775255e+04,
    5.404825e+04, 5.053928e+04, 4.721761e+04, 4.407545e+04,
    4.110524e+04, 3.829966e+04, 3.565159e+04, 3.315415e+04,
    3.080066e+04, 2.858465e+04, 2.649986e+04, 2.454024e+04,
    2.269993e+04, 2.098476e+04, 1.939942e+04, 1.793406e+04,
    1.657960e+04, 1.532762e+04, 1.417035e+04, 1.310063e+04,
    1.211180e+04, 1.119775e+04, 1.035281e+04, 9.571742e+03,
    8.849711e+03, 8.182246e+03, 7.565216e+03, 6.994803e+03,
    6.467478e+03, 5.979980e+03, 5.529297e+03, 4.047488e+03,
    2.971737e+03, 2.188370e+03, 1.616191e+03, 1.197027e+03,
    8.890604e+02, 6.634099e+02, 4.985202e+02, 3.771365e+02,
    2.871424e+02, 2.199659e+02, 1.694954e+02, 1.313398e+02,
    1.022950e+02, 7.977855e+01, 6.221431e+01, 4.833729e+01,
    3.736195e+01, 2.872347e+01, 2.195849e+01, 1.668853e+01,
    1.260573e+01, 9.460816e+00, 7.052888e+00, 5.220848e+00,
    3.836212e+00, 2.800829e+00, 2.033269e+00, 1.467352e+00,
    1.052462e+00, 7.500794e-01, 5.310388e-01, 3.733792e-01,
];

static DENSITY_KG_M3: [f64; LEN] = [
    1.478162e+00, 1.284896e+00, 1.225000e+00, 1.167274e+00,
    1.111660e+00, 1.058105e+00, 1.006554e+00, 9.569546e-01,
    9.092545e-01, 8.634021e-01, 8.193467e-01, 7.770386e-01,
    7.364287e-01, 6.974688e-01, 6.601114e-01, 6.243099e-01,
    5.900184e-01, 5.571919e-01, 5.257860e-01, 4.957573e-01,
    4.670629e-01, 4.396610e-01, 4.135103e-01, 3.885703e-01,
    3.648014e-01, 3.374299e-01, 3.119380e-01, 2.883754e-01,
    2.665959e-01, 2.464644e-01, 2.278558e-01, 2.106549e-01,
    1.947548e-01, 1.800571e-01, 1.664707e-01, 1.539113e-01,
    1.423012e-01, 1.315685e-01, 1.216468e-01, 1.124747e-01,
    1.039955e-01, 9.615664e-02, 8.890975e-02, 6.450970e-02,
    4.693776e-02, 3.425649e-02, 2.507622e-02, 1.841011e-02,
    1.355510e-02, 9.887365e-03, 7.257889e-03, 5.366535e-03,
    3.995660e-03, 2.994750e-03, 2.258839e-03, 1.714139e-03,
    1.316693e-03, 1.026872e-03, 8.056113e-04, 6.390002e-04,
    5.044471e-04, 3.962617e-04, 3.096756e-04, 2.407082e-04,
    1.860491e-04, 1.429564e-04, 1.091684e-04, 8.282795e-05,
    6.237264e-05, 4.638483e-05, 3.431050e-05, 2.523827e-05,
    1.845785e-05, 1.341817e-05, 9.693770e-06, 6.957803e-06,
];

static SPEED_OF_SOUND_M_S: [f64; LEN] = [
    347.888, 342.208, 340.294, 338.370, 336.435, 334.489,
    332.532, 330.563, 328.584, 326.592, 324.589, 322.573,
    320.545, 318.505, 316.452, 314.385, 312.306, 310.212,
    308.105, 305.984, 303.848, 301.697, 299.532, 297.350,
    295.154, 295.069, 295.069, 295.069, 295.069, 295.069,
    295.069, 295.069, 295.069, 295.069, 295.069, 295.069,
    295.069, 295.069, 295.069, 295.069, 295.069, 295.069,
    295.069, 296.377, 297.720, 299.056, 300.386, 301.709,
    303.025, 306.489, 310.099, 313.665, 317.189, 320.672,
    324.116, 327.521, 329.799, 329.799, 328.811, 325.428,
    322.011, 318.560, 315.073, 311.550, 307.988, 304.387,
    300.745, 297.061, 293.439, 290.750, 288.037, 285.300,
    282.538, 279.751, 276.937, 274.096,
];

/// One row of the reference table, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Geometric altitude in kilometers.
    pub altitude_km: f64,
    /// Temperature in kelvin.
    pub temperature_k: f64,
    /// Static pressure in pascals.
    pub pressure_pa: f64,
    /// Density in kg/m³.
    pub density_kg_m3: f64,
    /// Speed of sound in m/s.
    pub speed_of_sound_m_s: f64,
}

/// Returns the full ordered sample sequence, sorted by increasing altitude.
pub fn samples() -> impl ExactSizeIterator<Item = Sample> {
    (0..LEN).map(|i| Sample {
        altitude_km: ALTITUDE_KM[i],
        temperature_k: TEMPERATURE_K[i],
        pressure_pa: PRESSURE_PA[i],
        density_kg_m3: DENSITY_KG_M3[i],
        speed_of_sound_m_s: SPEED_OF_SOUND_M_S[i],
    })
}

/// The altitude column, in kilometers.
pub fn altitudes_km() -> &'static [f64] {
    &ALTITUDE_KM
}

/// The column holding the given quantity, aligned with [`altitudes_km`].
pub(crate) fn column(field: Field) -> &'static [f64] {
    match field {
        Field::Temperature => &TEMPERATURE_K,
        Field::Pressure => &PRESSURE_PA,
        Field::Density => &DENSITY_KG_M3,
        Field::SpeedOfSound => &SPEED_OF_SOUND_M_S,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_altitudes_strictly_increasing() {
        for pair in ALTITUDE_KM.windows(2) {
            assert!(
                pair[0] < pair[1],
                "altitude grid not strictly increasing at {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_bounds() {
        assert_eq!(ALTITUDE_KM[0], MIN_ALTITUDE_KM);
        assert_eq!(ALTITUDE_KM[LEN - 1], MAX_ALTITUDE_KM);
        assert_eq!(samples().len(), LEN);
    }

    #[test]
    fn test_sea_level_row() {
        let row = samples()
            .find(|s| s.altitude_km == 0.0)
            .expect("sea level row present");
        assert_relative_eq!(row.temperature_k, 288.15, epsilon = 1e-9);
        assert_relative_eq!(row.pressure_pa, 101_325.0, max_relative = 1e-6);
        assert_relative_eq!(row.density_kg_m3, 1.225, max_relative = 1e-4);
        assert_relative_eq!(row.speed_of_sound_m_s, 340.294, epsilon = 1e-3);
    }

    #[test]
    fn test_pressure_and_density_strictly_decreasing() {
        for pair in PRESSURE_PA.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        for pair in DENSITY_KG_M3.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_temperature_profile_shape() {
        // Troposphere cools, the 11-20 km layer is isothermal, the
        // stratosphere above warms again up to the 47-51 km base.
        let t = |alt: f64| {
            samples()
                .find(|s| s.altitude_km == alt)
                .map(|s| s.temperature_k)
                .unwrap()
        };
        assert!(t(0.0) > t(5.0) && t(5.0) > t(11.0));
        assert_eq!(t(12.0), t(19.0));
        assert!(t(22.0) < t(32.0) && t(32.0) < t(46.0));
    }

    #[test]
    fn test_speed_of_sound_consistent_with_temperature() {
        // a = sqrt(gamma * R * T) for every row.
        for s in samples() {
            let a = (1.4_f64 * 287.0528 * s.temperature_k).sqrt();
            assert_relative_eq!(s.speed_of_sound_m_s, a, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_ideal_gas_consistency() {
        // rho = P / (R * T) for every row.
        for s in samples() {
            let rho = s.pressure_pa / (287.0528 * s.temperature_k);
            assert_relative_eq!(s.density_kg_m3, rho, max_relative = 1e-5);
        }
    }
}
