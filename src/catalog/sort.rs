use super::CatalogEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Key used by a single sort pass
///
/// Each pass orders the sequence from scratch using only its own key. Sorting
/// is stable, so entries with equal keys keep the order they had before the
/// pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Product name, byte-wise lexicographic
    Name,
    /// Unit price, numeric
    #[value(name = "price")]
    UnitPrice,
    /// Arrival date text, byte-wise lexicographic
    #[value(name = "date")]
    ArrivalDate,
}

impl SortKey {
    /// The three passes in the order the demo applies them
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::UnitPrice, SortKey::ArrivalDate];

    pub fn compare(self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::UnitPrice => a.unit_price().total_cmp(&b.unit_price()),
            // Only chronological for fixed-width YYYY-MM-DD dates
            SortKey::ArrivalDate => a.arrival_date().cmp(b.arrival_date()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "product name",
            SortKey::UnitPrice => "unit price",
            SortKey::ArrivalDate => "arrival date",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort a caller-owned slice in place by `key`.
pub fn sort_in_place(entries: &mut [CatalogEntry], key: SortKey) {
    entries.sort_by(|a, b| key.compare(a, b));
    tracing::debug!("Sorted {} entries by {}", entries.len(), key);
}

/// Return a newly ordered copy of `entries`, leaving the input untouched.
pub fn sorted(entries: &[CatalogEntry], key: SortKey) -> Vec<CatalogEntry> {
    let mut copy = entries.to_vec();
    sort_in_place(&mut copy, key);
    copy
}
