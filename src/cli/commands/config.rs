//! Configuration commands
//!
//! Shows or validates the effective configuration after all layers are merged.

use crate::cli::Output;
use crate::config::CatalogConfig;
use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
    /// Check that the configuration loads and passes validation
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

pub async fn execute(args: ConfigArgs, config: &CatalogConfig, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommands::Show { format } => output.raw(render(config, format)?.trim_end()),
        // Loading already validated the config; re-check so the command stands alone
        ConfigCommands::Validate => {
            config.validate()?;
            output.success("Configuration is valid");
        }
    }

    Ok(())
}

fn render(config: &CatalogConfig, format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Toml => toml::to_string_pretty(config).context("Failed to render config as TOML"),
        ConfigFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to render config as JSON")
        }
        ConfigFormat::Yaml => serde_yml::to_string(config).context("Failed to render config as YAML"),
    }
}
