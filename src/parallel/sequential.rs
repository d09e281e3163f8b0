use super::core::CatalogProcessor;
use crate::catalog::CatalogEntry;
use anyhow::Result;

/// Single-threaded reference traversal
///
/// Produces the output the parallel processor is checked against. Emits one
/// `info` event per entry carrying its description size.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialProcessor;

impl SequentialProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, entries: &[CatalogEntry]) -> Vec<CatalogEntry> {
        let mut result = Vec::with_capacity(entries.len());

        for entry in entries {
            let description_size = entry.description_size();

            result.push(CatalogEntry::new(
                entry.name(),
                entry.unit(),
                entry.quantity(),
                entry.unit_price(),
                entry.arrival_date(),
                entry.description().to_vec(),
            ));

            tracing::info!(
                item = entry.name(),
                description_size,
                "Item {} - Description Size: {}",
                entry.name(),
                description_size
            );
        }

        result
    }
}

impl CatalogProcessor for SequentialProcessor {
    fn label(&self) -> &'static str {
        "sequential"
    }

    fn process(&self, entries: &[CatalogEntry]) -> Result<Vec<CatalogEntry>> {
        Ok(SequentialProcessor::process(self, entries))
    }
}
