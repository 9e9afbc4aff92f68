//! Catalog access.
//!
//! Every operation opens its own connection and closes it before returning.
//! Nothing is pooled or shared between calls.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection, Row};
use tracing::{debug, error, info};

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::product::{NewProduct, Product};
use crate::query::{bind_all, bind_all_raw, ProductQuery, SAFE_SEARCH_SQL};
use crate::schema::CREATE_PRODUCTS_TABLE_SQL;

/// Number of rows `view` shows when no limit is given.
pub const DEFAULT_DUMP_LIMIT: i64 = 50;

/// Column names and leading rows of the products table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogDump {
    /// Column names in declaration order.
    pub columns: Vec<String>,
    /// Rows in id order.
    pub products: Vec<Product>,
}

/// Handle to the product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
}

impl Catalog {
    /// Creates a catalog handle. No connection is opened until an operation runs.
    #[must_use]
    pub const fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Opens a fresh connection.
    ///
    /// With `create` unset a missing file is a connection error, which is
    /// how searches detect an unreachable store.
    pub(crate) async fn connect(&self, create: bool) -> Result<SqliteConnection> {
        let path = self.config.database_path();
        debug!(path = %path.display(), create, "Connecting to database");
        let conn = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(create)
            .connect()
            .await?;
        Ok(conn)
    }

    /// Creates the products table if it does not exist.
    pub async fn init_schema(&self) -> Result<()> {
        let mut conn = self.connect(true).await?;
        sqlx::query(CREATE_PRODUCTS_TABLE_SQL)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        info!(
            path = %self.config.database_path().display(),
            "Products table created/verified"
        );
        Ok(())
    }

    /// Inserts a single product and returns its id.
    pub async fn insert(&self, product: &NewProduct) -> Result<i64> {
        let mut conn = self.connect(false).await?;
        let (sql, params) = ProductQuery::insert(product);
        let result = bind_all_raw(sqlx::query(&sql), params)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        Ok(result.last_insert_rowid())
    }

    /// Inserts all products in one transaction and returns how many were written.
    pub async fn populate(&self, products: &[NewProduct]) -> Result<usize> {
        let mut conn = self.connect(false).await?;
        let mut tx = conn.begin().await?;
        for product in products {
            let (sql, params) = ProductQuery::insert(product);
            bind_all_raw(sqlx::query(&sql), params)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        conn.close().await?;
        info!(count = products.len(), "Inserted sample product records");
        Ok(products.len())
    }

    /// Parameterized lookup by exact name.
    ///
    /// The term is bound as a literal, so only rows whose name equals it are
    /// returned whatever characters it contains.
    pub async fn try_search_safe(&self, term: &str) -> Result<Vec<Product>> {
        info!(sql = SAFE_SEARCH_SQL, parameter = %term, "Executing safe query (parameterized)");
        let mut conn = self.connect(false).await?;
        let (sql, params) = ProductQuery::by_name(term);
        let products = bind_all(sqlx::query_as::<_, Product>(&sql), params)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;
        Ok(products)
    }

    /// Like [`Self::try_search_safe`], but failures are logged and yield no rows.
    pub async fn search_safe(&self, term: &str) -> Vec<Product> {
        self.try_search_safe(term).await.unwrap_or_else(|e| {
            error!(error = %e, "Safe query failed");
            Vec::new()
        })
    }

    /// Returns the column names and the first `limit` rows.
    pub async fn try_dump(&self, limit: i64) -> Result<CatalogDump> {
        let mut conn = self.connect(false).await?;

        let columns = sqlx::query("PRAGMA table_info(products)")
            .fetch_all(&mut conn)
            .await?
            .iter()
            .map(|row| row.try_get::<String, _>("name"))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let (sql, params) = ProductQuery::first(limit);
        let products = bind_all(sqlx::query_as::<_, Product>(&sql), params)
            .fetch_all(&mut conn)
            .await?;

        conn.close().await?;
        Ok(CatalogDump { columns, products })
    }

    /// Like [`Self::try_dump`], but failures are logged and yield an empty dump.
    pub async fn dump(&self, limit: i64) -> CatalogDump {
        self.try_dump(limit).await.unwrap_or_else(|e| {
            error!(error = %e, "Error occurred while viewing database data");
            CatalogDump::default()
        })
    }
}
