use serde::{Deserialize, Serialize};
use std::fmt;

/// One product record in the catalog.
///
/// Entries are built once with every field and never mutated afterwards.
/// Cloning an entry deep-copies its description, so two clones never share
/// description storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    name: String,
    unit: String,
    quantity: i32,
    unit_price: f64,
    arrival_date: String,
    description: Vec<String>,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        quantity: i32,
        unit_price: f64,
        arrival_date: impl Into<String>,
        description: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            quantity,
            unit_price,
            arrival_date: arrival_date.into(),
            description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit of measure (e.g. `kg`, `liter`)
    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Arrival date as stored, expected in `YYYY-MM-DD` form
    pub fn arrival_date(&self) -> &str {
        &self.arrival_date
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    /// Number of description lines
    pub fn description_size(&self) -> usize {
        self.description.len()
    }

    /// Consume the entry and hand back its description lines
    pub fn into_description(self) -> Vec<String> {
        self.description
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the fractional part on whole prices (4.0, not 4)
        write!(
            f,
            "Item {} - Unit Price: {:?}, Arrival Date: {}",
            self.name, self.unit_price, self.arrival_date
        )
    }
}
