use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::StatsArgs;
use crate::cli::common::PostReport;
use crate::log;

pub(super) fn output_reports(reports: &[PostReport], args: &StatsArgs) -> Result<()> {
    let output = match args.fields {
        Some(ref fields) => filter_fields(reports, fields)?,
        None => serde_json::to_value(reports)?,
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("stats"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Keep only the requested fields, with path/slug always included first.
///
/// Unknown fields are reported as `null`.
fn filter_fields(reports: &[PostReport], fields: &[String]) -> Result<JsonValue> {
    let mut filtered = Vec::with_capacity(reports.len());

    for report in reports {
        let JsonValue::Object(full) = serde_json::to_value(report)? else {
            continue;
        };

        let mut obj = Map::new();
        for key in ["path", "slug"] {
            if let Some(value) = full.get(key) {
                obj.insert(key.to_string(), value.clone());
            }
        }
        for field in fields {
            let value = full.get(field).cloned().unwrap_or(JsonValue::Null);
            obj.insert(field.clone(), value);
        }

        filtered.push(JsonValue::Object(obj));
    }

    Ok(JsonValue::Array(filtered))
}
