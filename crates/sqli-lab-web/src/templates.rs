//! HTML templates for the search page.

use ironhtml::typed::{Document, Element};
use ironhtml_elements::{
    Body, Button, Code, Div, Form, Head, Hr, Html, Input, Main, Meta, Strong, Td, Th, Title, Tr,
    H1, H4, P, Style,
};
use sqli_lab_core::present::{describe, display_price};
use sqli_lab_core::Product;

use crate::comparison::Comparison;

/// Page and panel headings.
pub const PAGE_TITLE: &str = "SQL Injection Demo - Product Search";
pub const VULNERABLE_TITLE: &str = "Vulnerable Query (INJECTED)";
pub const SAFE_TITLE: &str = "Safe Query (Parameterized)";
/// Shown above the panels when the two searches returned different rows.
pub const DIVERGED_NOTE: &str = "The two queries returned different results.";

const CSS: &str = "\
body { font-family: system-ui, sans-serif; max-width: 72rem; margin: 2rem auto; \
padding: 0 1rem; color: #212529; }\n\
.alert { padding: 0.75rem 1rem; border-radius: 0.375rem; margin: 0.75rem 0; }\n\
.alert-danger { background: #f8d7da; color: #842029; }\n\
.alert-success { background: #d1e7dd; color: #0f5132; }\n\
.sql { display: block; background: #f1f3f5; padding: 0.75rem; \
border-radius: 0.375rem; white-space: pre-wrap; margin: 0.5rem 0 1rem; }\n\
table { border-collapse: collapse; width: 100%; }\n\
th, td { border-bottom: 1px solid #dee2e6; padding: 0.4rem 0.6rem; text-align: left; }\n\
.search { display: flex; gap: 0.5rem; margin: 1rem 0; }\n\
.search input { flex: 1; padding: 0.4rem; }";

/// Renders the full page. `comparison` is `None` until a term is submitted.
#[must_use]
pub fn render_page(term: &str, comparison: Option<&Comparison>) -> String {
    let content = comparison.map_or_else(String::new, render_comparison);

    Document::new()
        .doctype()
        .root::<Html, _>(|html| {
            html.attr("lang", "en")
                .child::<Head, _>(|head| {
                    head.child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Title, _>(|t| t.text(PAGE_TITLE))
                        .child::<Style, _>(|s| s.raw(CSS))
                })
                .child::<Body, _>(|body| {
                    body.child::<Main, _>(|m| {
                        m.child::<H1, _>(|h| h.text(PAGE_TITLE))
                            .child::<P, _>(|p| {
                                p.text("This application demonstrates ")
                                    .child::<Strong, _>(|s| s.text("SQL Injection vulnerability"))
                                    .text(
                                        " in the 'Vulnerable Query' vs. the 'Safe Query' \
                                         using parameterized queries.",
                                    )
                            })
                            .child::<P, _>(|p| {
                                p.child::<Strong, _>(|s| s.text("Instructions:")).text(
                                    " Enter a product name or an SQL Injection payload in the \
                                     text box below to see the difference in results between \
                                     the vulnerable and safe queries.",
                                )
                            })
                            .child::<Form, _>(|f| {
                                f.attr("method", "GET")
                                    .attr("action", "/")
                                    .class("search")
                                    .child::<Input, _>(|i| {
                                        i.attr("type", "text")
                                            .attr("name", "q")
                                            .attr("value", term)
                                            .attr(
                                                "placeholder",
                                                "Enter product name or SQL Injection payload",
                                            )
                                    })
                                    .child::<Button, _>(|b| b.attr("type", "submit").text("Search"))
                            })
                            .child::<Div, _>(|d| d.raw(&content))
                    })
                })
        })
        .build()
}

/// Renders the two labeled panels for a submitted term.
#[must_use]
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut html = String::new();

    Element::<P>::new()
        .text("Searching for: ")
        .child::<Strong, _>(|s| s.text(format!("'{}'", comparison.term)))
        .render_to(&mut html);

    if comparison.diverged() {
        Element::<P>::new()
            .class("diverged")
            .child::<Strong, _>(|s| s.text(DIVERGED_NOTE))
            .render_to(&mut html);
    }

    Element::<Div>::new()
        .class("alert alert-danger")
        .text("This query is ")
        .child::<Strong, _>(|s| s.text("VULNERABLE to SQL Injection"))
        .text(". User input is directly embedded into the SQL query string.")
        .render_to(&mut html);
    html.push_str(&render_panel(
        VULNERABLE_TITLE,
        &comparison.vulnerable.sql,
        &comparison.vulnerable.products,
    ));

    Element::<Div>::new()
        .class("alert alert-success")
        .text("This query is ")
        .child::<Strong, _>(|s| s.text("SAFE from SQL Injection"))
        .text(
            ". It uses parameterized queries, which prevent user input from being \
             interpreted as SQL code.",
        )
        .render_to(&mut html);
    html.push_str(&render_panel(
        SAFE_TITLE,
        &comparison.safe.sql,
        &comparison.safe.products,
    ));

    html
}

/// One panel: heading, the SQL text, and the result table.
#[must_use]
pub fn render_panel(title: &str, sql: &str, products: &[Product]) -> String {
    let results = if products.is_empty() {
        Element::<P>::new().text("No products found.").render()
    } else {
        render_products_table(products)
    };

    Element::<Div>::new()
        .class("panel")
        .child::<H4, _>(|h| h.text(format!("{title} Results")))
        .child::<Code, _>(|c| c.class("sql").text(sql))
        .raw(&results)
        .child::<Hr, _>(|hr| hr)
        .render()
}

/// Renders rows as an ID / Name / Description / Price table.
#[must_use]
pub fn render_products_table(products: &[Product]) -> String {
    let mut header_cells = String::new();
    for h in ["ID", "Name", "Description", "Price"] {
        Element::<Th>::new().text(h).render_to(&mut header_cells);
    }

    let mut rows = String::new();
    for product in products {
        let id_str = product.id.to_string();
        let price_str = display_price(product.price);
        Element::<Tr>::new()
            .child::<Td, _>(|td| td.text(&id_str))
            .child::<Td, _>(|td| td.text(&product.name))
            .child::<Td, _>(|td| td.text(describe(product.description.as_deref())))
            .child::<Td, _>(|td| td.text(&price_str))
            .render_to(&mut rows);
    }

    // Thead/Tbody only take typed children, so the table shell is assembled by hand.
    format!(
        "<table class=\"results\">\
         <thead><tr>{header_cells}</tr></thead>\
         <tbody>{rows}</tbody></table>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::QueryPanel;

    fn widget() -> Product {
        Product {
            id: 7,
            name: "Widget".to_string(),
            description: Some("A test widget".to_string()),
            price: Some(9.99),
        }
    }

    #[test]
    fn test_table_formats_price() {
        let html = render_products_table(&[widget()]);
        assert!(html.contains(">Price</th>"));
        assert!(html.contains("$9.99"));
        assert!(html.contains("A test widget"));
    }

    #[test]
    fn test_empty_panel() {
        let html = render_panel(SAFE_TITLE, "SELECT 1", &[]);
        assert!(html.contains("Safe Query (Parameterized) Results"));
        assert!(html.contains("No products found."));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_page_without_term_has_no_panels() {
        let html = render_page("", None);
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("name=\"q\""));
        assert!(!html.contains(VULNERABLE_TITLE));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut product = widget();
        product.name = "<script>alert(1)</script>".to_string();
        let comparison = Comparison {
            term: "x".to_string(),
            vulnerable: QueryPanel {
                sql: "SELECT * FROM products WHERE name = 'x'".to_string(),
                products: vec![product],
            },
            safe: QueryPanel {
                sql: "SELECT * FROM products WHERE name = ?".to_string(),
                products: Vec::new(),
            },
        };

        let html = render_page(&comparison.term, Some(&comparison));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains(VULNERABLE_TITLE));
        assert!(html.contains(SAFE_TITLE));
        assert!(html.contains(DIVERGED_NOTE));
    }

    #[test]
    fn test_matching_results_have_no_note() {
        let panel = |sql: &str| QueryPanel {
            sql: sql.to_string(),
            products: vec![widget()],
        };
        let comparison = Comparison {
            term: "Widget".to_string(),
            vulnerable: panel("SELECT * FROM products WHERE name = 'Widget'"),
            safe: panel("SELECT * FROM products WHERE name = ?"),
        };

        assert!(!comparison.diverged());
        assert!(!render_comparison(&comparison).contains(DIVERGED_NOTE));
    }
}
