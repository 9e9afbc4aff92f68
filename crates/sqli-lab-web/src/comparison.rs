//! Running both searches for one term.

use serde::Serialize;
use sqli_lab_core::query::SAFE_SEARCH_SQL;
use sqli_lab_core::vulnerable::interpolated_search_sql;
use sqli_lab_core::{Catalog, Product};

/// The SQL shown for one search and the rows it returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPanel {
    /// Statement text as displayed to the user.
    pub sql: String,
    /// Returned rows.
    pub products: Vec<Product>,
}

/// Side-by-side results of the vulnerable and the safe search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// The raw search term.
    pub term: String,
    /// Interpolated search.
    pub vulnerable: QueryPanel,
    /// Parameterized search.
    pub safe: QueryPanel,
}

impl Comparison {
    /// Runs the vulnerable search, then the safe one.
    pub async fn run(catalog: &Catalog, term: &str) -> Self {
        let vulnerable = QueryPanel {
            sql: interpolated_search_sql(term),
            products: catalog.search_unsafe(term).await,
        };
        let safe = QueryPanel {
            sql: SAFE_SEARCH_SQL.to_string(),
            products: catalog.search_safe(term).await,
        };
        Self {
            term: term.to_string(),
            vulnerable,
            safe,
        }
    }

    /// True when the two searches disagree.
    #[must_use]
    pub fn diverged(&self) -> bool {
        self.vulnerable.products != self.safe.products
    }
}
