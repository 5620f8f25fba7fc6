//! Command-line entry point for the parallel sieve.

use std::io::Write;
use std::process::exit;

use clap::{Parser, ValueEnum};
use sieve_core::{run_sieve, SieveConfig, SieveError, DEFAULT_LIMIT, DEFAULT_WORKERS};

#[derive(Parser)]
#[command(
    name = "parallel-sieve",
    about = "Count and sum every prime up to a limit with a parallel Sieve of Eratosthenes",
    long_about = "Prints the elapsed time, prime count and prime sum on the first line,\n\
                  and the ten largest primes (ascending) on the second."
)]
struct Cli {
    /// Inclusive upper bound of the search
    #[arg(long, env = "SIEVE_LIMIT", default_value_t = DEFAULT_LIMIT)]
    limit: usize,
    /// Marking threads per prime
    #[arg(long, env = "SIEVE_WORKERS", default_value_t = DEFAULT_WORKERS)]
    workers: usize,
    /// Output format
    #[arg(value_enum, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Show a progress bar over sieving candidates on stderr
    #[arg(long)]
    progress: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Two-line console summary
    Text,
    /// Pretty-printed JSON report
    Json,
}

impl Cli {
    fn config(&self) -> SieveConfig {
        SieveConfig::default()
            .with_limit(self.limit)
            .with_workers(self.workers)
            .with_progress(self.progress)
    }
}

fn execute(cli: &Cli) -> Result<String, SieveError> {
    let report = run_sieve(cli.config())?;
    match cli.format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => Ok(report.render_json()? + "\n"),
    }
}

fn write_report(output: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()
}

fn main() {
    // Logs go to stderr so stdout carries only the report
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(output) => {
            if let Err(error) = write_report(&output) {
                eprintln!("error: failed to write report: {error}");
                exit(1);
            }
        }
        Err(error) => {
            tracing::error!(%error, "sieve aborted");
            eprintln!("error: {error}");
            exit(1);
        }
    }
}
