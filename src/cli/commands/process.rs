//! Process command
//!
//! Times the parallel and/or sequential processor over a catalog. When both
//! run, their outputs are compared and a mismatch fails the command.

use super::{load_catalog, run_timed};
use crate::cli::{Output, OutputFormat};
use crate::config::CatalogConfig;
use crate::parallel::{ExecutionStrategy, ProcessingRun};
use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Which processor(s) to run
    #[arg(long, value_enum, default_value_t = ProcessMode::Both)]
    pub mode: ProcessMode,

    /// Process a synthetic catalog of this many entries instead of the sample
    #[arg(long)]
    pub count: Option<usize>,

    /// Override parallel.leaf_threshold
    #[arg(long)]
    pub leaf_threshold: Option<usize>,

    /// Override the worker pool size
    #[arg(long)]
    pub workers: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProcessMode {
    Parallel,
    Sequential,
    Both,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    strategy: String,
    entries: usize,
    elapsed_ms: u128,
}

impl From<&ProcessingRun> for RunSummary {
    fn from(run: &ProcessingRun) -> Self {
        Self {
            strategy: run.strategy.to_string(),
            entries: run.entries.len(),
            elapsed_ms: run.elapsed_ms(),
        }
    }
}

pub async fn execute(args: ProcessArgs, config: &CatalogConfig, output: &Output) -> Result<()> {
    let parallel_strategy = parallel_strategy(&args, config)?;
    let catalog = Arc::new(load_catalog(args.count));
    output.verbose(&format!("Processing {} entries", catalog.len()));

    let mut runs = Vec::new();
    if matches!(args.mode, ProcessMode::Parallel | ProcessMode::Both) {
        runs.push(run_timed(parallel_strategy, Arc::clone(&catalog)).await?);
    }
    if matches!(args.mode, ProcessMode::Sequential | ProcessMode::Both) {
        runs.push(run_timed(ExecutionStrategy::Sequential, Arc::clone(&catalog)).await?);
    }

    let outputs_match = match runs.as_slice() {
        [parallel, sequential] => Some(parallel.entries == sequential.entries),
        _ => None,
    };

    match args.format {
        OutputFormat::Text => {
            for run in &runs {
                let label = match run.strategy {
                    ExecutionStrategy::Sequential => "Sequential",
                    ExecutionStrategy::Parallel { .. } => "Parallel",
                };
                output.timing(label, run.elapsed_ms());
                output.key_value("Strategy:", &run.strategy.to_string());
                output.key_value("Entries:", &run.entries.len().to_string());
            }
        }
        OutputFormat::Json => {
            let summaries: Vec<RunSummary> = runs.iter().map(RunSummary::from).collect();
            output.raw(&serde_json::to_string_pretty(&serde_json::json!({
                "runs": summaries,
                "outputs_match": outputs_match,
            }))?);
        }
    }

    match outputs_match {
        Some(false) => anyhow::bail!("Parallel and sequential outputs differ"),
        Some(true) if args.format == OutputFormat::Text => {
            output.success("Parallel and sequential outputs match")
        }
        _ => {}
    }

    Ok(())
}

/// Parallel strategy from configuration, with command-line overrides applied
fn parallel_strategy(args: &ProcessArgs, config: &CatalogConfig) -> Result<ExecutionStrategy> {
    let leaf_threshold = args.leaf_threshold.unwrap_or(config.parallel.leaf_threshold);
    if leaf_threshold == 0 {
        anyhow::bail!("--leaf-threshold must be at least 1");
    }

    let workers = match args.workers {
        Some(0) => anyhow::bail!("--workers must be at least 1"),
        Some(workers) => workers,
        None => ExecutionStrategy::calculate_optimal_workers(
            config.parallel.max_threads,
            config.parallel.thread_percentage,
        ),
    };

    Ok(ExecutionStrategy::Parallel {
        workers,
        leaf_threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(leaf_threshold: Option<usize>, workers: Option<usize>) -> ProcessArgs {
        ProcessArgs {
            mode: ProcessMode::Both,
            count: None,
            leaf_threshold,
            workers,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_overrides_win_over_config() {
        let strategy = parallel_strategy(&args(Some(2), Some(3)), &CatalogConfig::default()).unwrap();
        assert_eq!(
            strategy,
            ExecutionStrategy::Parallel {
                workers: 3,
                leaf_threshold: 2
            }
        );
    }

    #[test]
    fn test_config_threshold_used_by_default() {
        let mut config = CatalogConfig::default();
        config.parallel.leaf_threshold = 8;
        match parallel_strategy(&args(None, None), &config).unwrap() {
            ExecutionStrategy::Parallel { leaf_threshold, .. } => assert_eq!(leaf_threshold, 8),
            other => panic!("unexpected strategy {other:?}"),
        }
    }

    #[test]
    fn test_zero_overrides_rejected() {
        let config = CatalogConfig::default();
        assert!(parallel_strategy(&args(Some(0), None), &config).is_err());
        assert!(parallel_strategy(&args(None, Some(0)), &config).is_err());
    }
}
