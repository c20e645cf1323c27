use std::collections::BTreeMap;

use anyhow::Result;
use atmo76::{evaluate, Field, UnitSystem};
use serde::Serialize;

use super::{format_value, unit_label};

#[derive(Serialize)]
struct QueryResponse {
    altitude: f64,
    units: &'static str,
    values: BTreeMap<&'static str, f64>,
}

pub fn run(units: UnitSystem, fields: &[Field], altitude: f64, json: bool) -> Result<()> {
    let result = evaluate(altitude, units, fields)?;

    if json {
        let response = QueryResponse {
            altitude,
            units: units.as_str(),
            values: result.iter().map(|(f, v)| (f.name(), *v)).collect(),
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        for (field, value) in &result {
            println!(
                "{}: {} {}",
                field.name(),
                format_value(*field, *value),
                unit_label(*field, units)
            );
        }
    }

    Ok(())
}
