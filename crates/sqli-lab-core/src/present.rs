//! Console rendering of search results and table dumps.

use std::fmt::Write;

use crate::catalog::CatalogDump;
use crate::product::Product;

/// Formats a price as dollars with two decimals.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Formats an optional price, `None` when the column is NULL.
#[must_use]
pub fn display_price(price: Option<f64>) -> String {
    price.map_or_else(|| "None".to_string(), format_price)
}

/// A price as the dump shows it: the float's round-trip form, so whole
/// amounts keep their `.0`.
fn dump_price(price: Option<f64>) -> String {
    price.map_or_else(|| "None".to_string(), |p| format!("{p:?}"))
}

/// Text shown for a missing description.
#[must_use]
pub fn describe(description: Option<&str>) -> &str {
    description.unwrap_or("None")
}

/// One result line.
#[must_use]
pub fn format_product_line(product: &Product) -> String {
    format!(
        "ID: {}, Name: {}, Description: {}, Price: {}",
        product.id,
        product.name,
        describe(product.description.as_deref()),
        display_price(product.price)
    )
}

/// Renders a result set, or the empty-result notice.
#[must_use]
pub fn render_search_results(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.".to_string();
    }

    let mut out = String::from("--- Products Found ---");
    for product in products {
        out.push('\n');
        out.push_str(&format_product_line(product));
    }
    out
}

/// Renders a dump as a bordered text table.
///
/// The separator has one dash per header character, so long values simply
/// overflow their column.
#[must_use]
pub fn render_dump(dump: &CatalogDump) -> String {
    if dump.products.is_empty() {
        return "No data found in the 'products' table.".to_string();
    }

    let separator = format!(
        "+{}+",
        dump.columns
            .iter()
            .map(|c| "-".repeat(c.len()))
            .collect::<Vec<_>>()
            .join("-+-")
    );
    let header = format!("| {} |", dump.columns.join(" | "));

    let mut out = String::new();
    let _ = writeln!(out, "{separator}");
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{separator}");
    for product in &dump.products {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            product.id,
            product.name,
            describe(product.description.as_deref()),
            dump_price(product.price)
        );
    }
    out.push_str(&separator);
    out
}
