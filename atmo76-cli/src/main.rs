use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atmo76::{Field, UnitSystem};

mod commands;

/// Standard-atmosphere (USSA 1976) query tool
#[derive(Parser)]
#[command(name = "atmo76")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Unit system for the input altitude and all outputs
    #[arg(
        short,
        long,
        env = "ATMO76_UNITS",
        default_value = "metric",
        global = true
    )]
    units: UnitSystem,

    /// Comma-separated output fields (temperature, pressure, density, speed_of_sound)
    #[arg(
        short,
        long,
        env = "ATMO76_FIELDS",
        value_delimiter = ',',
        default_value = "temperature,pressure,density,speed_of_sound",
        global = true
    )]
    fields: Vec<Field>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate atmosphere properties at a single altitude
    Query {
        /// Altitude in meters (metric) or feet (imperial)
        #[arg(allow_negative_numbers = true)]
        altitude: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Evaluate properties for multiple altitudes from a CSV file
    Batch {
        /// Input CSV file
        input: PathBuf,

        /// Output file (input name with `_atmosphere` suffix if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name holding the altitude
        #[arg(long, default_value = "altitude")]
        altitude_col: String,
    },

    /// Display information about the embedded reference table
    Info,
}

fn main() -> Result<()> {
    // Out-of-range altitudes log a clamping warning through tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atmo76=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Query { altitude, json } => {
            commands::query::run(cli.units, &cli.fields, altitude, json)
        }
        Commands::Batch {
            input,
            output,
            altitude_col,
        } => commands::batch::run(cli.units, &cli.fields, input, output, &altitude_col),
        Commands::Info => commands::info::run(),
    }
}
