#![allow(dead_code)]

use sqli_lab_core::{Catalog, CatalogConfig, NewProduct};
use tempfile::TempDir;

/// A catalog in a fresh temporary directory with the table created.
///
/// Keep the `TempDir` alive for as long as the catalog is used.
pub async fn empty_catalog() -> (TempDir, Catalog) {
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::new(CatalogConfig::new(tmp.path().join("products.db")));
    catalog
        .init_schema()
        .await
        .unwrap_or_else(|e| panic!("Failed to create schema: {e}"));
    (tmp, catalog)
}

/// A catalog holding the given rows, inserted in order.
pub async fn catalog_with(rows: &[NewProduct]) -> (TempDir, Catalog) {
    let (tmp, catalog) = empty_catalog().await;
    catalog
        .populate(rows)
        .await
        .unwrap_or_else(|e| panic!("Failed to populate: {e}"));
    (tmp, catalog)
}

/// The single-widget catalog used by the end-to-end scenario.
pub async fn widget_catalog() -> (TempDir, Catalog) {
    catalog_with(&[NewProduct::new("Widget", "A test widget", 9.99)]).await
}

/// A small catalog with a duplicated name.
pub fn sample_rows() -> Vec<NewProduct> {
    vec![
        NewProduct::new("Widget", "A test widget", 9.99),
        NewProduct::new("Gadget", "A shiny gadget", 24.5),
        NewProduct::new("Widget", "Another widget", 12.0),
        NewProduct::new("Sprocket", "Spare part", 3.25).without_description(),
    ]
}
