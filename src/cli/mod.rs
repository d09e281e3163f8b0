//! Command-line interface for shop-catalog
//!
//! Parses arguments with clap, sets up logging, loads configuration and
//! dispatches to the command implementations in [`commands`].

use crate::config::CatalogConfig;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

pub mod commands;
mod output;

pub use output::Output;

/// In-memory product catalog with fork-join and sequential processing
#[derive(Parser)]
#[command(name = "shop-catalog", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE", global = true, env = "SHOP_CATALOG_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort the sample catalog three ways and time both processors (default)
    Demo,
    /// Sort a catalog by one key and print it
    Sort(commands::sort::SortArgs),
    /// Run the parallel and/or sequential processor over a catalog
    Process(commands::process::ProcessArgs),
    /// Configuration management
    Config(commands::config::ConfigArgs),
    /// Show version information
    Version,
}

/// Output format for catalog listings and run summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let config = CatalogConfig::load_with_custom_config(self.config.as_deref())?;
        if !config.output.color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let output = Output::new(self.verbose > 0, self.quiet);

        match self.command {
            Some(Commands::Demo) | None => commands::demo::execute(&config, &output).await,
            Some(Commands::Sort(args)) => commands::sort::execute(args, &output).await,
            Some(Commands::Process(args)) => commands::process::execute(args, &config, &output).await,
            Some(Commands::Config(args)) => commands::config::execute(args, &config, &output).await,
            Some(Commands::Version) => commands::version::execute(&output).await,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(console::colors_enabled_stderr())
        .with_writer(std::io::stderr)
        .init();
}
