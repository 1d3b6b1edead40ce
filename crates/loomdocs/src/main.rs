//! loomdocs CLI - Loom documentation site configuration.
//!
//! Provides commands for:
//! - `check`: Load and validate `loomdocs.toml`
//! - `export`: Write the generator configuration (JSON or normalized TOML)
//! - `url`: Resolve the deployed page root or a page URL
//! - `init`: Write a built-in configuration revision
//! - `diff`: Report sidebar changes between two config files

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, DiffArgs, ExportArgs, InitArgs, UrlArgs};
use output::Output;

/// loomdocs - Loom documentation site configuration.
#[derive(Parser)]
#[command(name = "loomdocs", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site configuration.
    Check(CheckArgs),
    /// Export the configuration for the site generator.
    Export(ExportArgs),
    /// Print the page root or the URL of a page.
    Url(UrlArgs),
    /// Write a built-in configuration to disk.
    Init(InitArgs),
    /// Compare the sidebars of two configuration files.
    Diff(DiffArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Export(args) => args.execute(&output),
        Commands::Url(args) => args.execute(&output),
        Commands::Init(args) => args.execute(&output),
        Commands::Diff(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
