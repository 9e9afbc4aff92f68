#![allow(dead_code)]

use sqli_lab_core::{Catalog, CatalogConfig, NewProduct};
use sqli_lab_web::App;
use tempfile::TempDir;

/// Rows every route test starts from.
pub fn rows() -> Vec<NewProduct> {
    vec![
        NewProduct::new("Widget", "A test widget", 9.99),
        NewProduct::new("Gadget", "A shiny gadget", 24.5),
        NewProduct::new("Sprocket", "Spare part", 3.25).without_description(),
    ]
}

/// An app over a temporary catalog seeded with [`rows`].
pub async fn seeded_app() -> (TempDir, App) {
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::new(CatalogConfig::new(tmp.path().join("products.db")));
    catalog
        .init_schema()
        .await
        .unwrap_or_else(|e| panic!("Failed to create schema: {e}"));
    catalog
        .populate(&rows())
        .await
        .unwrap_or_else(|e| panic!("Failed to populate: {e}"));
    (tmp, App::new(catalog))
}
