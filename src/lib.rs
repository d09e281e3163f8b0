//! # shop-catalog - fork-join processing of an in-memory product catalog
//!
//! A small catalog of [`CatalogEntry`] records with two interchangeable ways
//! of processing it:
//!
//! - **Parallel**: a recursive split/merge task over a dedicated worker pool
//!   that halves the index range until chunks reach a leaf threshold
//! - **Sequential**: a plain in-order traversal used as the reference result
//!
//! plus three sort passes (product name, unit price, arrival date).
//!
//! ## Quick Start
//!
//! ```bash
//! # Sort the sample catalog three ways and time both processors
//! shop-catalog demo
//!
//! # Time the processors on 100k synthetic entries
//! shop-catalog process --count 100000 --mode both
//! ```
//!
//! ## Library Usage
//!
//! ```rust
//! use shop_catalog::catalog::{CatalogEntry, SortKey, sort_in_place};
//! use shop_catalog::parallel::ParallelPartitionProcessor;
//!
//! let mut catalog = vec![
//!     CatalogEntry::new("ItemB", "unit", 20, 1.75, "2024-01-02", vec!["FeatureB: ValueB".into()]),
//!     CatalogEntry::new("ItemA", "kg", 10, 2.5, "2024-01-01", vec!["FeatureA: ValueA".into()]),
//! ];
//! sort_in_place(&mut catalog, SortKey::Name);
//!
//! let processor = ParallelPartitionProcessor::new(2)?.with_leaf_threshold(1);
//! let processed = processor.process(&catalog)?;
//! assert_eq!(processed[0].name(), "ItemA");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod parallel;

pub use catalog::CatalogEntry;
pub use config::CatalogConfig;

/// Result type alias for shop-catalog operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
