use super::CatalogEntry;

const UNITS: [&str; 4] = ["kg", "unit", "liter", "box"];

/// The fixed three-item catalog used by the demo.
pub fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "ItemA",
            "kg",
            10,
            2.5,
            "2024-01-01",
            vec!["FeatureA: ValueA".to_string()],
        ),
        CatalogEntry::new(
            "ItemB",
            "unit",
            20,
            1.75,
            "2024-01-02",
            vec!["FeatureB: ValueB".to_string()],
        ),
        CatalogEntry::new(
            "ItemC",
            "liter",
            5,
            4.0,
            "2024-01-03",
            vec!["FeatureC: ValueC".to_string()],
        ),
    ]
}

/// Deterministic catalog of `count` entries for timing runs.
///
/// Names, prices and dates are spread so that every sort key produces a
/// different order. Dates stay valid `YYYY-MM-DD` strings (28-day months).
pub fn synthetic_catalog(count: usize) -> Vec<CatalogEntry> {
    (0..count)
        .map(|i| {
            // Reverse the index so name order differs from insertion order
            let name = format!("Item{:05}", count - i);
            let unit = UNITS[i % UNITS.len()];
            let quantity = ((i * 7) % 50) as i32;
            let unit_price = ((i * 37) % 1000) as f64 / 4.0 + 0.25;
            let arrival_date = format!(
                "{:04}-{:02}-{:02}",
                2024 + i / 336,
                (i / 28) % 12 + 1,
                i % 28 + 1
            );
            let description = (0..=(i % 3))
                .map(|line| format!("Feature{line}: Value{i}"))
                .collect();
            CatalogEntry::new(name, unit, quantity, unit_price, arrival_date, description)
        })
        .collect()
}
