#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use mailvet::{
    BulkSummary, ValidationResult, render_human, render_summary, render_verbose_line,
};

/// How the addresses were supplied; decides the shape of human output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Single,
    Bulk,
}

pub fn write_reports(results: &[ValidationResult], source: Source, cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(results, source, cli),
        "json" => write_json(results, cli),
        "ndjson" => write_ndjson(results, cli),
        "csv" => write_csv(results, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

pub fn any_invalid(results: &[ValidationResult]) -> bool {
    results.iter().any(|r| !r.is_valid)
}

fn write_human(results: &[ValidationResult], source: Source, cli: &Cli) -> Result<()> {
    if cli.out.is_some() {
        bail!("--out needs --format json|ndjson|csv");
    }
    match source {
        Source::Single => {
            for result in results {
                println!("{}", render_human(result));
            }
        }
        Source::Bulk => {
            println!("{}", render_summary(&BulkSummary::from_results(results)));
            if cli.verbose {
                println!();
                println!("Detailed Results:");
                for result in results {
                    println!();
                    println!("{}", render_verbose_line(result));
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(results: &[ValidationResult], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(results)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[ValidationResult], _: &Cli) -> Result<()> {
    bail!("format=json requires the 'with-serde' feature")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(results: &[ValidationResult], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for result in results {
            let line = serde_json::to_string(result)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for result in results {
            println!("{}", serde_json::to_string(result)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[ValidationResult], _: &Cli) -> Result<()> {
    bail!("format=ndjson requires the 'with-serde' feature")
}

#[cfg(feature = "with-csv")]
const CSV_HEADER: [&str; 7] = [
    "email",
    "is_valid",
    "syntax_valid",
    "mx_records_valid",
    "is_disposable",
    "issues",
    "suggestions",
];

#[cfg(feature = "with-csv")]
fn write_csv(results: &[ValidationResult], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(CSV_HEADER)?;
        for result in results {
            wtr.write_record(csv_record(result))?;
        }
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(CSV_HEADER)?;
        for result in results {
            wtr.write_record(csv_record(result))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[ValidationResult], _: &Cli) -> Result<()> {
    bail!("format=csv requires the 'with-csv' feature")
}

#[cfg(feature = "with-csv")]
fn csv_record(result: &ValidationResult) -> Vec<String> {
    let details = &result.validation_details;
    vec![
        result.email.clone(),
        result.is_valid.to_string(),
        details.syntax_valid.to_string(),
        bool_opt_str(details.mx_records_valid).to_string(),
        bool_opt_str(details.is_disposable).to_string(),
        result.issues.join("|"),
        result.suggestions.join("|"),
    ]
}

#[cfg(feature = "with-csv")]
fn bool_opt_str(opt: Option<bool>) -> &'static str {
    match opt {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    }
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
