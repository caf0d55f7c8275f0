use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bp_core::constants::INPUT_FILE_ENV;
use bp_core::{resolve_input_path, CoreConfig, OutputMode};

#[derive(Parser)]
#[command(name = "parse-bp")]
#[command(about = "Parse OpenEHR blood pressure data")]
struct Cli {
    /// Input JSON file [default: bp_openehr.json, or $BP_INPUT_FILE]
    filename: Option<PathBuf>,
    /// Output as FHIR R4 Observation JSON
    #[arg(long)]
    to_fhir: bool,
}

/// Entry point for the blood pressure converter.
///
/// # Environment Variables
/// - `BP_INPUT_FILE`: input file used when no filename argument is given
/// - `RUST_LOG`: log filter for diagnostics on stderr (default: "warn")
///
/// Exits 0 on success. Any failure prints a single `Error: ...` line to stderr and exits 1.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let input_path = resolve_input_path(cli.filename, std::env::var(INPUT_FILE_ENV).ok());
    let config = CoreConfig::new(input_path, OutputMode::from_fhir_flag(cli.to_fhir));
    tracing::debug!("++ Converting {}", config.input_path().display());

    let stdout = io::stdout();
    match bp_core::run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
