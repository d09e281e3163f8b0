//! Catalog processing strategies
//!
//! Two interchangeable implementations of [`CatalogProcessor`]:
//!
//! - [`ParallelPartitionProcessor`]: recursive fork-join over a dedicated
//!   rayon pool. The index range is halved until a range holds at most the
//!   leaf threshold (default 5), leaves are processed directly and the two
//!   halves are concatenated in order.
//! - [`SequentialProcessor`]: single-threaded reference traversal, used as
//!   the correctness oracle and for timing comparisons.
//!
//! ```text
//!                 [0, 12)
//!               /         \
//!          [0, 6)         [6, 12)
//!         /     \         /     \
//!     [0, 3)  [3, 6)  [6, 9)  [9, 12)     <- leaves (len <= 5)
//! ```
//!
//! Both produce deep copies of the input entries in input order, so their
//! outputs compare equal for any input.
//!
//! # Example Usage
//!
//! ```rust
//! use shop_catalog::catalog::sample_catalog;
//! use shop_catalog::parallel::{ExecutionStrategy, process_parallel, process_sequential};
//!
//! let catalog = sample_catalog();
//! let parallel = process_parallel(&catalog)?;
//! assert_eq!(parallel, process_sequential(&catalog));
//!
//! // Or pick a strategy explicitly
//! let strategy = ExecutionStrategy::Parallel { workers: 2, leaf_threshold: 1 };
//! let run = strategy.execute_timed(&catalog)?;
//! assert_eq!(run.entries.len(), 3);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod core;
pub mod partition;
pub mod sequential;

pub use self::core::{CatalogProcessor, ExecutionStrategy, ProcessingRun};
pub use partition::{DEFAULT_LEAF_THRESHOLD, ParallelPartitionProcessor};
pub use sequential::SequentialProcessor;

use crate::catalog::CatalogEntry;
use anyhow::Result;

/// Process entries with the fork-join processor sized to the host's
/// available parallelism and the default leaf threshold.
pub fn process_parallel(entries: &[CatalogEntry]) -> Result<Vec<CatalogEntry>> {
    ParallelPartitionProcessor::with_available_parallelism()?.process(entries)
}

/// Process entries one by one on the calling thread.
pub fn process_sequential(entries: &[CatalogEntry]) -> Vec<CatalogEntry> {
    SequentialProcessor::new().process(entries)
}
