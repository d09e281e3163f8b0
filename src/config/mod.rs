//! Configuration management for shop-catalog
//!
//! Settings are layered with figment: the embedded `default-config.toml`,
//! then user and repository files (TOML, JSON or YAML), then
//! `SHOP_CATALOG_` environment variables. A `--config` file replaces the
//! user and repository layers.

pub mod core;
pub mod smart_load;

pub use self::core::{CatalogConfig, OutputConfig, ParallelConfig};
