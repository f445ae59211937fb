#[path = "mailvet-cli/args.rs"]
mod args;
#[path = "mailvet-cli/output.rs"]
mod output;

use anyhow::{Context, Result};
use mailvet::{EmailValidator, LookupMx, ValidationResult, addresses_from_lines};
use std::io::{self, Read};

use crate::args::{Cli, Commands};
use crate::output::Source;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

// exit codes: 0 all valid, 2 some invalid, 1 fatal
fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing();

    let (emails, source) = if let Some(Commands::Validate { email }) = &cli.cmd {
        (vec![email.clone()], Source::Single)
    } else if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
        (addresses_from_lines(&text), Source::Bulk)
    } else if cli.stdin {
        let mut text = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut text)
            .context("read stdin")?;
        (addresses_from_lines(&text), Source::Bulk)
    } else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(0);
    };

    let validator = EmailValidator::system(&cli.mx_options()).context("DNS resolver setup")?;
    let results = validate_all(&validator, &emails, &cli);

    output::write_reports(&results, source, &cli)?;

    Ok(if output::any_invalid(&results) { 2 } else { 0 })
}

fn validate_all<R>(
    validator: &EmailValidator<R>,
    emails: &[String],
    cli: &Cli,
) -> Vec<ValidationResult>
where
    R: LookupMx,
{
    if cli.parallel() {
        // one resolver per rayon job; a shared blocking resolver serializes lookups
        #[cfg(feature = "with-parallel")]
        return mailvet::pipeline::validate_bulk_concurrent(emails, &cli.mx_options());
    }
    validator.validate_bulk(emails)
}

#[cfg(feature = "with-tracing")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

#[cfg(not(feature = "with-tracing"))]
fn init_tracing() {}
