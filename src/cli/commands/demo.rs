//! Demo command
//!
//! Prints the sample catalog, applies the three sort passes one after the
//! other, then times one parallel and one sequential run.

use super::run_timed;
use crate::catalog::{SortKey, sample_catalog, sort_in_place};
use crate::cli::Output;
use crate::config::CatalogConfig;
use crate::parallel::ExecutionStrategy;
use anyhow::Result;
use std::sync::Arc;

pub async fn execute(config: &CatalogConfig, output: &Output) -> Result<()> {
    let mut catalog = sample_catalog();

    output.header("Before sorting:");
    output.catalog(&catalog);

    for key in SortKey::ALL {
        sort_in_place(&mut catalog, key);
        output.header(&format!("After sorting by {}:", key));
        output.catalog(&catalog);
    }

    output.blank_line();

    let catalog = Arc::new(catalog);
    let parallel_strategy = ExecutionStrategy::parallel_from_config(&config.parallel);
    output.verbose(&format!("Using {}", parallel_strategy));

    let parallel = run_timed(parallel_strategy, Arc::clone(&catalog)).await?;
    output.timing("Parallel", parallel.elapsed_ms());

    let sequential = run_timed(ExecutionStrategy::Sequential, Arc::clone(&catalog)).await?;
    output.timing("Sequential", sequential.elapsed_ms());

    if parallel.entries != sequential.entries {
        anyhow::bail!("Parallel and sequential outputs differ");
    }
    output.success("Parallel and sequential outputs match");

    Ok(())
}
