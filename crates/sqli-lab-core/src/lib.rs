//! A product catalog that can be searched two ways.
//!
//! `sqli-lab-core` runs the same exact-name lookup over a SQLite `products`
//! table in two forms:
//!
//! - **Safe**: [`Catalog::search_safe`] binds the term to a `?` placeholder,
//!   so it is always compared as a literal value.
//! - **Vulnerable**: `Catalog::search_unsafe` (feature `vulnerable`) pastes
//!   the term into the SQL text, so quotes in the term rewrite the statement.
//!
//! Comparing the two on a payload such as `' OR '1'='1` is the point of the
//! crate: the vulnerable search returns every row, the safe one returns none.
//!
//! # Components
//!
//! - **Schema** - idempotent table creation and storage checks
//! - **Seed** - random sample products
//! - **Catalog** - connection-per-call access and the safe search
//! - **Vulnerable** - the interpolated search
//! - **Present** - console formatting of results and dumps
//!
//! # Example
//!
//! ```rust,ignore
//! use sqli_lab_core::prelude::*;
//!
//! let catalog = Catalog::new(CatalogConfig::new("db/products.db"));
//! catalog.init_schema().await?;
//! catalog.insert(&NewProduct::new("Widget", "A test widget", 9.99)).await?;
//!
//! assert_eq!(catalog.search_safe("' OR '1'='1").await.len(), 0);
//! assert_eq!(catalog.search_unsafe("' OR '1'='1").await.len(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod present;
pub mod product;
pub mod query;
pub mod schema;
pub mod seed;
#[cfg(feature = "vulnerable")]
pub mod vulnerable;

pub use catalog::{Catalog, CatalogDump};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use product::{NewProduct, Product};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogDump, DEFAULT_DUMP_LIMIT};
    pub use crate::config::CatalogConfig;
    pub use crate::error::{CatalogError, Result};
    pub use crate::product::{NewProduct, Product};
    pub use crate::query::{ProductQuery, SqlValue, SAFE_SEARCH_SQL};
    pub use crate::schema::prepare_storage;
    pub use crate::seed::{generate_products, DEFAULT_SEED_COUNT};
    #[cfg(feature = "vulnerable")]
    pub use crate::vulnerable::interpolated_search_sql;
}
