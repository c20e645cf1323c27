//! # atmo76 - U.S. Standard Atmosphere 1976
//!
//! Standard-atmosphere properties (temperature, pressure, density, speed of
//! sound) at a given altitude, computed by shape-preserving piecewise-cubic
//! interpolation over an embedded reference table.
//!
//! ## Features
//!
//! - **Valid from -2 km to 86 km**: out-of-range altitudes clamp flat to
//!   the nearest table bound with a logged warning, never an error
//! - **Metric and imperial units**: meters/°C/Pa/kg·m⁻³/m·s⁻¹ or
//!   feet/°F/lbf·ft⁻²/slug·ft⁻³/ft·s⁻¹
//! - **Selectable outputs**: request any subset of the four quantities
//! - **Pure and thread-safe**: the table is compile-time constant data;
//!   every evaluation is an independent, allocation-light computation
//!
//! ## Quick Start
//!
//! ```
//! use atmo76::{evaluate_all, Field, UnitSystem};
//!
//! let conditions = evaluate_all(11_000.0, UnitSystem::Metric)?;
//! let temperature = conditions[&Field::Temperature];
//! assert!((temperature - (-56.5)).abs() < 0.5); // tropopause, °C
//! # Ok::<(), atmo76::AtmosphereError>(())
//! ```
//!
//! ## Model
//!
//! The embedded table samples the 1976 U.S. Standard Atmosphere on a merged
//! grid: 0.5 km spacing from -0.5 km to 20 km, 2 km spacing elsewhere. See
//! [`table`] for the derivation and merge policy, and [`units`] for the
//! exact conversion factors.

pub mod error;
pub mod evaluate;
pub mod table;
pub mod units;

mod interp;

// Re-export main types at crate root for convenience
pub use error::{AtmosphereError, Result};
pub use evaluate::{evaluate, evaluate_all};
pub use table::{samples, Sample, MAX_ALTITUDE_KM, MIN_ALTITUDE_KM};
pub use units::{Field, UnitSystem};
