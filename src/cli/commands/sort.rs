//! Sort command
//!
//! Sorts the sample catalog (or a synthetic one) by a single key.

use super::load_catalog;
use crate::catalog::{SortKey, sort_in_place};
use crate::cli::{Output, OutputFormat};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Key to sort by
    #[arg(long, value_enum, default_value_t = SortKey::Name)]
    pub by: SortKey,

    /// Sort a synthetic catalog of this many entries instead of the sample
    #[arg(long)]
    pub count: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub async fn execute(args: SortArgs, output: &Output) -> Result<()> {
    let mut catalog = load_catalog(args.count);
    sort_in_place(&mut catalog, args.by);

    match args.format {
        OutputFormat::Text => {
            output.header(&format!("After sorting by {}:", args.by));
            output.catalog(&catalog);
        }
        OutputFormat::Json => output.raw(&serde_json::to_string_pretty(&catalog)?),
    }

    Ok(())
}
