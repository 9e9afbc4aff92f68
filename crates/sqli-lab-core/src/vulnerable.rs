//! The injectable search.
//!
//! **This module is vulnerable to SQL injection on purpose.** The search term
//! is pasted into the statement text with no escaping and the result is run
//! through [`sqlx::raw_sql`], which executes every `;`-separated statement it
//! is given. Quotes in the term can rewrite the `WHERE` clause, and stacked
//! statements run against the catalog.
//!
//! It exists only to be compared with [`Catalog::search_safe`] and is
//! compiled only with the `vulnerable` feature.

use sqlx::{Connection, FromRow};
use tracing::{error, warn};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::product::Product;

/// Builds the lookup statement by pasting `term` between quotes.
#[must_use]
pub fn interpolated_search_sql(term: &str) -> String {
    format!("SELECT * FROM products WHERE name = '{term}'")
}

impl Catalog {
    /// Runs the interpolated lookup verbatim.
    pub async fn try_search_unsafe(&self, term: &str) -> Result<Vec<Product>> {
        let sql = interpolated_search_sql(term);
        warn!(sql = %sql, "Executing vulnerable query (injected)");

        let mut conn = self.connect(false).await?;
        let rows = sqlx::Executor::fetch_all(&mut conn, sqlx::raw_sql(&sql)).await?;
        let products = rows
            .iter()
            .map(Product::from_row)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        conn.close().await?;
        Ok(products)
    }

    /// Like [`Self::try_search_unsafe`], but failures are logged and yield no rows.
    pub async fn search_unsafe(&self, term: &str) -> Vec<Product> {
        self.try_search_unsafe(term).await.unwrap_or_else(|e| {
            error!(error = %e, "Vulnerable query failed");
            Vec::new()
        })
    }
}
