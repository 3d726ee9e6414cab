use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fare_billing::billing::FareConfig;
use fare_billing::pipeline::process_files;

/// Bill riders from a zone table and a journey log.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Station-to-zone table (`station,zone`)
    #[arg(default_value = "zone_map.csv")]
    zones: PathBuf,

    /// Tap log (`user_id,station,direction,time`)
    #[arg(default_value = "journey_data.csv")]
    journeys: PathBuf,

    /// Where to write `user_id,billing_amount`
    #[arg(default_value = "output.csv")]
    output: PathBuf,
}

fn main() -> ExitCode {
    // Logs go to stderr; the output file is the only data product.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match process_files(&cli.zones, &cli.journeys, &cli.output, &FareConfig::default()) {
        Ok(summary) => {
            println!(
                "Successfully wrote billing output to {} at {}",
                summary.output.display(),
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f")
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
