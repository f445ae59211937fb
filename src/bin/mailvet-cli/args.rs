use clap::{Parser, Subcommand};
use mailvet::MxOptions;

#[derive(Parser)]
#[command(name = "mailvet-cli")]
#[command(about = "Check email addresses: syntax, MX records, typos, disposable domains")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// read addresses from a file (one per line)
    #[arg(short, long)]
    pub file: Option<String>,

    /// read addresses from stdin (one per line)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV depending on --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// list every address in bulk human output
    #[arg(short, long)]
    pub verbose: bool,

    /// DNS timeout per query, in milliseconds (0 = system default)
    #[arg(long = "dns-timeout-ms", default_value_t = 5_000)]
    pub dns_timeout_ms: u64,

    /// DNS attempts per query (0 = system default)
    #[arg(long = "dns-attempts", default_value_t = 2)]
    pub dns_attempts: usize,

    /// run DNS lookups concurrently (feature `with-parallel`)
    #[cfg(feature = "with-parallel")]
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// validate a single address and print the full report
    Validate { email: String },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn mx_options(&self) -> MxOptions {
        MxOptions {
            timeout_ms: self.dns_timeout_ms,
            attempts: self.dns_attempts,
        }
    }

    pub fn parallel(&self) -> bool {
        #[cfg(feature = "with-parallel")]
        {
            self.parallel
        }
        #[cfg(not(feature = "with-parallel"))]
        {
            false
        }
    }
}
