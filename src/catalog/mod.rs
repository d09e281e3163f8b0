//! Catalog data model
//!
//! [`CatalogEntry`] is the immutable product record shared by every other
//! module. Sort passes live in [`sort`], fixture catalogs in [`sample`].

pub mod entry;
pub mod sample;
pub mod sort;

pub use entry::CatalogEntry;
pub use sample::{sample_catalog, synthetic_catalog};
pub use sort::{SortKey, sort_in_place, sorted};
