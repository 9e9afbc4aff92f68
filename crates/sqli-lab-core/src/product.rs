//! The catalog entity.

use serde::Serialize;
use sqlx::error::UnexpectedNullError;
use sqlx::sqlite::SqliteRow;
use sqlx::{Decode, Row, Sqlite, ValueRef};

/// A row of the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Row id, assigned by SQLite on insert.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Unit price. The column is a nullable `REAL`.
    pub price: Option<f64>,
}

/// Decodes a column with SQLite's own conversions instead of sqlx's
/// declared-type check, so an `INTEGER` in a `REAL` column (or a number in a
/// text column) still reads. Rows injected through a `UNION` carry whatever
/// types the payload wrote.
fn column<'r, T>(row: &'r SqliteRow, name: &str) -> sqlx::Result<Option<T>>
where
    T: Decode<'r, Sqlite>,
{
    let raw = row.try_get_raw(name)?;
    if raw.is_null() {
        return Ok(None);
    }
    T::decode(raw)
        .map(Some)
        .map_err(|source| sqlx::Error::ColumnDecode {
            index: format!("{name:?}"),
            source,
        })
}

fn required<'r, T>(row: &'r SqliteRow, name: &str) -> sqlx::Result<T>
where
    T: Decode<'r, Sqlite>,
{
    column(row, name)?.ok_or_else(|| sqlx::Error::ColumnDecode {
        index: format!("{name:?}"),
        source: Box::new(UnexpectedNullError),
    })
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for Product {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: required(row, "id")?,
            name: required(row, "name")?,
            description: column(row, "description")?,
            price: column(row, "price")?,
        })
    }
}

/// A product that has not been inserted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
}

impl NewProduct {
    /// Creates a new product with a description.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            price,
        }
    }

    /// Removes the description.
    #[must_use]
    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }
}
