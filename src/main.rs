// Provider Quality - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/provider-quality
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/provider-quality --config awards.json --days 30 --output-format json
// ```

use anyhow::{Context, Result};
use clap::Parser;
use provider_quality::simulation::{CatalogStatistics, LoggingConfig, QualitySimulation};
use provider_quality::types::config::CliArgs;
use provider_quality::types::SimulationConfig;
use std::io::{self, BufWriter, Write};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging = LoggingConfig::from_cli_args(&args);

    // Held until exit so buffered file logs are flushed
    let _log_guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Provider Quality");

    let dry_run = args.dry_run;
    let config = match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    let mut simulation = match QualitySimulation::new(config) {
        Ok(simulation) => simulation,
        Err(e) => {
            error!("Failed to build award catalog: {}", e);
            eprintln!("Error: {}", e);
            if let Some(source) = std::error::Error::source(&e) {
                eprintln!("  caused by: {}", source);
            }
            process::exit(1);
        }
    };

    if dry_run {
        eprintln!("Configuration and awards are valid.");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&simulation);
        return;
    }

    eprintln!("Updating award metrics...");

    match run_simulation(&mut simulation) {
        Ok(statistics) => {
            eprintln!("{}", statistics.summary_output());
            info!("Provider Quality completed successfully");
        }
        Err(e) => {
            error!("Simulation failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Load and validate configuration from CLI arguments and an optional config file
fn load_config(args: CliArgs) -> Result<SimulationConfig> {
    let config_path = args.config.clone();
    let config = SimulationConfig::from_cli_args(args).with_context(|| match &config_path {
        Some(path) => format!("loading configuration from {}", path),
        None => "building default configuration".to_string(),
    })?;

    config.validate().context("validating configuration")?;

    info!(
        "Configuration loaded: {} awards, {} days, {} output",
        config.awards.len(),
        config.days,
        config.output_format
    );
    Ok(config)
}

/// Run every configured day, streaming reports to stdout
fn run_simulation(simulation: &mut QualitySimulation) -> Result<CatalogStatistics> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let statistics = simulation
        .run_to_writer(&mut writer)
        .context("writing daily reports")?;
    writer.flush().context("flushing daily reports")?;

    Ok(statistics)
}

/// Print configuration summary
fn print_configuration_summary(simulation: &QualitySimulation) {
    let config = simulation.config();
    eprintln!("Configuration:");
    eprintln!("  Days: {}", config.days);
    eprintln!("  Start Date: {}", simulation.start_date());
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!("  Awards: {}", simulation.catalog().len());
    for award in simulation.catalog() {
        eprintln!("    {}", award);
    }
    eprintln!();
}
