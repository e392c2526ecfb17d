//! LaserDisc catalog lookup CLI
//!
//! Looks up catalog metadata for a disc by UPC or catalog reference and
//! prints the result as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lddb_lookup::{
    error::Result,
    models::Config,
    pipeline::{self, LookupMode, LookupReport},
};

/// lddb-lookup - LaserDisc catalog lookup
#[derive(Parser, Debug)]
#[command(name = "lddb-lookup", version, about = "LaserDisc catalog lookup")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a disc by UPC
    Upc {
        /// Product code; separators are ignored
        code: String,
    },

    /// Look up a disc by catalog reference
    Reference {
        /// Catalog reference, e.g. PILF-1234
        reference: String,
    },

    /// Extract a result from a saved search page
    Parse {
        /// HTML file to parse
        file: PathBuf,

        /// Identifier recorded in the result
        #[arg(long, default_value = "")]
        identifier: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_report(report: &LookupReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::load_or_default(&cli.config)
    };
    log::debug!("Using catalog at {}", config.catalog.base_url);

    match cli.command {
        Command::Upc { code } => {
            config.validate()?;
            let report = pipeline::run_lookup(&config, LookupMode::Code, &code).await?;
            print_report(&report)?;
        }

        Command::Reference { reference } => {
            config.validate()?;
            let report = pipeline::run_lookup(&config, LookupMode::Reference, &reference).await?;
            print_report(&report)?;
        }

        Command::Parse { file, identifier } => {
            let report = pipeline::run_parse(&config, &file, &identifier).await?;
            print_report(&report)?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
