use super::{ParallelPartitionProcessor, SequentialProcessor};
use crate::catalog::CatalogEntry;
use crate::config::ParallelConfig;
use anyhow::Result;
use std::fmt;
use std::time::{Duration, Instant};

/// A strategy that turns an ordered catalog into a processed copy of it
pub trait CatalogProcessor: Send + Sync {
    /// Short name used in logs and output
    fn label(&self) -> &'static str;

    /// Process `entries`, returning the results in input order.
    fn process(&self, entries: &[CatalogEntry]) -> Result<Vec<CatalogEntry>>;
}

/// Execution strategy enum for choosing between parallel and sequential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionStrategy {
    Sequential,
    Parallel { workers: usize, leaf_threshold: usize },
}

/// Output of a timed run
#[derive(Debug)]
pub struct ProcessingRun {
    pub strategy: ExecutionStrategy,
    pub entries: Vec<CatalogEntry>,
    pub elapsed: Duration,
}

impl ProcessingRun {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

impl ExecutionStrategy {
    /// Parallel strategy sized from configuration and the host's CPU count
    pub fn parallel_from_config(config: &ParallelConfig) -> Self {
        ExecutionStrategy::Parallel {
            workers: Self::calculate_optimal_workers(config.max_threads, config.thread_percentage),
            leaf_threshold: config.leaf_threshold,
        }
    }

    /// Build the processor this strategy describes.
    pub fn build(&self) -> Result<Box<dyn CatalogProcessor>> {
        match self {
            ExecutionStrategy::Sequential => Ok(Box::new(SequentialProcessor::new())),
            ExecutionStrategy::Parallel {
                workers,
                leaf_threshold,
            } => Ok(Box::new(
                ParallelPartitionProcessor::new(*workers)?.with_leaf_threshold(*leaf_threshold),
            )),
        }
    }

    pub fn execute(&self, entries: &[CatalogEntry]) -> Result<Vec<CatalogEntry>> {
        self.build()?.process(entries)
    }

    /// Execute and measure wall-clock time, including worker pool start-up.
    pub fn execute_timed(&self, entries: &[CatalogEntry]) -> Result<ProcessingRun> {
        let start = Instant::now();
        let processed = self.execute(entries)?;
        let elapsed = start.elapsed();

        tracing::info!(
            strategy = %self,
            entries = processed.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Processing finished"
        );

        Ok(ProcessingRun {
            strategy: self.clone(),
            entries: processed,
            elapsed,
        })
    }

    /// Calculate the worker pool size from the host's CPU count.
    ///
    /// `thread_percentage` of the available cores is used (at least one);
    /// a non-zero `max_threads` caps the result.
    pub fn calculate_optimal_workers(max_threads: usize, thread_percentage: u8) -> usize {
        let cpu_cores = num_cpus::get();

        let max_by_percentage = std::cmp::max(1, (cpu_cores * thread_percentage as usize) / 100);

        if max_threads > 0 {
            std::cmp::min(max_threads, max_by_percentage)
        } else {
            max_by_percentage
        }
    }
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionStrategy::Sequential => f.write_str("sequential"),
            ExecutionStrategy::Parallel {
                workers,
                leaf_threshold,
            } => write!(
                f,
                "parallel ({} workers, leaf threshold {})",
                workers, leaf_threshold
            ),
        }
    }
}
