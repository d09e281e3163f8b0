//! Styled terminal output
//!
//! Status messages respect `--quiet`; catalog listings and machine-readable
//! output are always printed.

use crate::catalog::CatalogEntry;
use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print one listing line per entry
    pub fn catalog(&self, entries: &[CatalogEntry]) {
        for entry in entries {
            println!("{}", entry);
        }
    }

    /// Print a key-value pair with consistent styling
    pub fn key_value(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {} {}", style(key).dim(), style(value).white());
        }
    }

    /// Print a processing time line
    pub fn timing(&self, label: &str, elapsed_ms: u128) {
        println!(
            "{} processing time: {} ms",
            label,
            style(elapsed_ms.to_string()).bold()
        );
    }

    /// Print machine-readable output verbatim
    pub fn raw(&self, content: &str) {
        println!("{}", content);
    }

    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }
}
