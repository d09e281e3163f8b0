//! Command implementations for the shop-catalog CLI
//!
//! Each command lives in its own module and exposes an async `execute`.

pub mod config;
pub mod demo;
pub mod process;
pub mod sort;
pub mod version;

use crate::catalog::{CatalogEntry, sample_catalog, synthetic_catalog};
use crate::parallel::{ExecutionStrategy, ProcessingRun};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Sample catalog, or a synthetic one when a count is given
pub(crate) fn load_catalog(count: Option<usize>) -> Vec<CatalogEntry> {
    match count {
        Some(count) => synthetic_catalog(count),
        None => sample_catalog(),
    }
}

/// Run a strategy on the blocking pool so worker threads never stall the runtime.
pub(crate) async fn run_timed(
    strategy: ExecutionStrategy,
    catalog: Arc<Vec<CatalogEntry>>,
) -> Result<ProcessingRun> {
    let label = strategy.to_string();
    tokio::task::spawn_blocking(move || strategy.execute_timed(&catalog))
        .await
        .with_context(|| format!("{label} processing task did not complete"))?
}
