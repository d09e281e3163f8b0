use super::core::CatalogProcessor;
use crate::catalog::CatalogEntry;
use anyhow::{Context, Result};
use std::panic::{self, AssertUnwindSafe};

/// Largest index range processed directly without splitting further
pub const DEFAULT_LEAF_THRESHOLD: usize = 5;

/// Fork-join processor over a dedicated worker pool
///
/// The index range `[0, n)` is split at its midpoint until a range holds at
/// most `leaf_threshold` entries. Leaf ranges are processed directly; the two
/// halves of every split run concurrently via [`rayon::join`] and are
/// concatenated left then right, so output order always matches input order.
///
/// Every output entry is a deep copy of its input entry.
pub struct ParallelPartitionProcessor {
    pool: rayon::ThreadPool,
    leaf_threshold: usize,
}

impl ParallelPartitionProcessor {
    /// Create a processor backed by a pool of `workers` threads (at least one).
    pub fn new(workers: usize) -> Result<Self> {
        let workers = workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("catalog-worker-{index}"))
            .build()
            .with_context(|| format!("Failed to build worker pool with {workers} threads"))?;

        tracing::debug!("Created catalog worker pool with {} threads", workers);

        Ok(Self {
            pool,
            leaf_threshold: DEFAULT_LEAF_THRESHOLD,
        })
    }

    /// Create a processor sized to the host's available parallelism.
    pub fn with_available_parallelism() -> Result<Self> {
        Self::new(num_cpus::get())
    }

    /// Set the leaf threshold. Zero is treated as one, since a zero threshold
    /// would keep splitting single-entry ranges forever.
    pub fn with_leaf_threshold(mut self, leaf_threshold: usize) -> Self {
        if leaf_threshold == 0 {
            tracing::warn!("Leaf threshold 0 is not usable, using 1 instead");
        }
        self.leaf_threshold = leaf_threshold.max(1);
        self
    }

    pub fn leaf_threshold(&self) -> usize {
        self.leaf_threshold
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Process entries, producing an independently owned copy of each one.
    pub fn process(&self, entries: &[CatalogEntry]) -> Result<Vec<CatalogEntry>> {
        self.process_with(entries, |entry| Ok(entry.clone()))
    }

    /// Run `item_fn` over every entry through the fork-join tree.
    ///
    /// The first error returned by any leaf fails the whole call, and a panic
    /// inside a worker task is reported as an error rather than unwinding into
    /// the caller. No partial result is ever returned.
    pub fn process_with<F>(&self, entries: &[CatalogEntry], item_fn: F) -> Result<Vec<CatalogEntry>>
    where
        F: Fn(&CatalogEntry) -> Result<CatalogEntry> + Sync,
    {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let task = PartitionTask {
            entries,
            leaf_threshold: self.leaf_threshold,
            item_fn: &item_fn,
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.pool.install(|| task.compute(0, entries.len()))
        }));

        let processed = outcome
            .map_err(|_| anyhow::anyhow!("Worker panic occurred during parallel catalog processing"))?
            .context("Parallel catalog processing failed")?;

        tracing::debug!(
            "Processed {} entries in parallel ({} workers, leaf threshold {})",
            processed.len(),
            self.workers(),
            self.leaf_threshold
        );

        Ok(processed)
    }
}

impl CatalogProcessor for ParallelPartitionProcessor {
    fn label(&self) -> &'static str {
        "parallel"
    }

    fn process(&self, entries: &[CatalogEntry]) -> Result<Vec<CatalogEntry>> {
        ParallelPartitionProcessor::process(self, entries)
    }
}

/// One node of the fork-join tree. Every node reads the shared input slice
/// and only touches indices inside its own range.
struct PartitionTask<'a, F> {
    entries: &'a [CatalogEntry],
    leaf_threshold: usize,
    item_fn: &'a F,
}

impl<F> PartitionTask<'_, F>
where
    F: Fn(&CatalogEntry) -> Result<CatalogEntry> + Sync,
{
    fn compute(&self, start: usize, end: usize) -> Result<Vec<CatalogEntry>> {
        if end - start <= self.leaf_threshold {
            return self.process_leaf(start, end);
        }

        let middle = (start + end) / 2;
        tracing::trace!("Splitting [{}, {}) at {}", start, end, middle);

        let (left, right) = rayon::join(
            || self.compute(start, middle),
            || self.compute(middle, end),
        );

        Ok(merge(left?, right?))
    }

    fn process_leaf(&self, start: usize, end: usize) -> Result<Vec<CatalogEntry>> {
        let thread = std::thread::current();
        tracing::trace!(
            "Processing leaf [{}, {}) on {}",
            start,
            end,
            thread.name().unwrap_or("unnamed")
        );

        self.entries[start..end]
            .iter()
            .map(|entry| (self.item_fn)(entry))
            .collect()
    }
}

fn merge(mut left: Vec<CatalogEntry>, right: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    left.extend(right);
    left
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_catalog, synthetic_catalog};
    use crate::parallel::SequentialProcessor;

    fn processor(workers: usize) -> ParallelPartitionProcessor {
        ParallelPartitionProcessor::new(workers).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let result = processor(2).process(&[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_single_entry() {
        let catalog = synthetic_catalog(1);
        assert_eq!(processor(2).process(&catalog).unwrap(), catalog);
    }

    #[test]
    fn test_twelve_entries_match_sequential() {
        let catalog = synthetic_catalog(12);
        let parallel = processor(4).with_leaf_threshold(5).process(&catalog).unwrap();
        let sequential = SequentialProcessor::new().process(&catalog);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_output_is_independent_of_leaf_threshold() {
        let catalog = synthetic_catalog(23);
        for threshold in 1..=catalog.len() {
            let result = processor(3)
                .with_leaf_threshold(threshold)
                .process(&catalog)
                .unwrap();
            assert_eq!(result, catalog, "threshold {threshold} changed the output");
        }
    }

    #[test]
    fn test_output_is_independent_of_worker_count() {
        let catalog = synthetic_catalog(64);
        for workers in [1, 2, 7] {
            let result = processor(workers).with_leaf_threshold(2).process(&catalog).unwrap();
            assert_eq!(result, catalog);
        }
    }

    #[test]
    fn test_zero_threshold_is_clamped() {
        let processor = processor(2).with_leaf_threshold(0);
        assert_eq!(processor.leaf_threshold(), 1);
        let catalog = sample_catalog();
        assert_eq!(processor.process(&catalog).unwrap(), catalog);
    }

    #[test]
    fn test_pool_size() {
        assert_eq!(processor(3).workers(), 3);
        assert_eq!(processor(0).workers(), 1);
    }

    #[test]
    fn test_descriptions_are_deep_copied() {
        let catalog = sample_catalog();
        let result = processor(2).process(&catalog).unwrap();
        for (input, output) in catalog.iter().zip(&result) {
            assert_ne!(input.description().as_ptr(), output.description().as_ptr());
        }
    }

    #[test]
    fn test_item_error_fails_whole_call() {
        let catalog = synthetic_catalog(30);
        let failing = catalog[17].name().to_string();
        let result = processor(4).with_leaf_threshold(3).process_with(&catalog, |entry| {
            if entry.name() == failing {
                anyhow::bail!("cannot process {}", entry.name());
            }
            Ok(entry.clone())
        });

        let error = result.unwrap_err();
        assert!(format!("{error:#}").contains(&format!("cannot process {failing}")));
    }

    #[test]
    fn test_worker_panic_becomes_error() {
        let catalog = synthetic_catalog(20);
        let result = processor(2).process_with(&catalog, |entry| {
            if entry.quantity() == catalog[9].quantity() {
                panic!("worker blew up");
            }
            Ok(entry.clone())
        });

        let error = result.unwrap_err();
        assert!(error.to_string().contains("Worker panic"));
    }

    #[test]
    fn test_processor_is_reusable() {
        let processor = processor(2);
        let catalog = synthetic_catalog(11);
        assert_eq!(processor.process(&catalog).unwrap(), catalog);
        assert_eq!(processor.process(&catalog).unwrap(), catalog);
    }
}
