use anyhow::{Context, Result};
use atmo76::{evaluate, Field, UnitSystem};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use super::format_value;

pub fn run(
    units: UnitSystem,
    fields: &[Field],
    input: PathBuf,
    output: Option<PathBuf>,
    altitude_col: &str,
) -> Result<()> {
    let file = File::open(&input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find the altitude column
    let headers = reader.headers()?.clone();
    let altitude_idx = headers
        .iter()
        .position(|h| h == altitude_col)
        .with_context(|| format!("Column '{}' not found in CSV", altitude_col))?;

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let total = records.len() as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    // Prepare output
    let output_path = output.unwrap_or_else(|| {
        let stem = input.file_stem().unwrap().to_string_lossy();
        input.with_file_name(format!("{}_atmosphere.csv", stem))
    });
    let output_file = File::create(&output_path).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    // Write header: original columns plus one per requested field
    let mut new_headers: Vec<&str> = headers.iter().collect();
    for field in fields {
        new_headers.push(field.name());
    }
    writer.write_record(&new_headers)?;

    // Process records
    for record in records {
        let altitude: f64 = record
            .get(altitude_idx)
            .context("Missing altitude")?
            .parse()
            .context("Invalid altitude")?;

        let result = evaluate(altitude, units, fields)
            .with_context(|| format!("Failed to evaluate altitude {}", altitude))?;

        let values: Vec<String> = fields
            .iter()
            .map(|f| format_value(*f, result[f]))
            .collect();

        let mut new_record: Vec<&str> = record.iter().collect();
        for value in &values {
            new_record.push(value);
        }
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    println!("Output written to: {}", output_path.display());
    Ok(())
}
