use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::smart_load;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Prefix for environment overrides, e.g. `SHOP_CATALOG_PARALLEL__LEAF_THRESHOLD=3`
pub const ENV_PREFIX: &str = "SHOP_CATALOG_";

/// Effective configuration after all layers are merged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub parallel: ParallelConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Worker pool and fork-join settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Largest index range processed without splitting further
    pub leaf_threshold: usize,
    /// Maximum number of worker threads (0 = no cap)
    pub max_threads: usize,
    /// Percentage of CPU cores to use (1-100)
    pub thread_percentage: u8,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            leaf_threshold: 5,
            max_threads: 0,
            thread_percentage: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl CatalogConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: custom config = {:?}", custom_config);

        let figment = Self::figment(custom_config)?;
        let config: CatalogConfig = figment
            .extract()
            .context("Failed to parse catalog configuration")?;
        config.validate()?;

        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Build the layered figment: embedded defaults, then files, then env vars.
    pub fn figment(custom_config: Option<&str>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // A custom config replaces the user and repository files
        if let Some(custom_path) = custom_config {
            if !Path::new(custom_path).is_file() {
                anyhow::bail!("Config file not found: {}", custom_path);
            }
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            let user_config = Self::user_config_path();
            figment = figment
                .merge(Toml::file(&user_config))
                .merge(Json::file(user_config.replace(".toml", ".json")))
                .merge(Yaml::file(user_config.replace(".toml", ".yaml")))
                .merge(Yaml::file(user_config.replace(".toml", ".yml")))
                .merge(Toml::file("shop-catalog.toml"))
                .merge(Json::file("shop-catalog.json"))
                .merge(Yaml::file("shop-catalog.yaml"))
                .merge(Yaml::file("shop-catalog.yml"));
        }

        // Environment variables always have highest priority
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    pub fn validate(&self) -> Result<()> {
        if self.parallel.leaf_threshold == 0 {
            anyhow::bail!("parallel.leaf_threshold must be at least 1");
        }

        if !(1..=100).contains(&self.parallel.thread_percentage) {
            anyhow::bail!(
                "parallel.thread_percentage must be between 1 and 100, got {}",
                self.parallel.thread_percentage
            );
        }

        Ok(())
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/shop-catalog/config.toml", home),
            Err(_) => "~/.config/shop-catalog/config.toml".to_string(),
        }
    }
}
