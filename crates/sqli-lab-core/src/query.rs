//! Parameterized statements for the `products` table.
//!
//! Every statement here carries its inputs as [`SqlValue`] parameters bound
//! to `?` placeholders. User input never becomes part of the SQL text.

use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;

use crate::product::NewProduct;

/// Name of the catalog table.
pub const PRODUCTS_TABLE: &str = "products";

/// The lookup run by the safe search. The term is bound to the placeholder.
pub const SAFE_SEARCH_SQL: &str = "SELECT * FROM products WHERE name = ?";

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
}

/// Conversion into a bindable value.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

/// Statement text plus the values for its placeholders, in order.
pub type Statement = (String, Vec<SqlValue>);

/// Builds the statements the catalog runs.
pub struct ProductQuery;

impl ProductQuery {
    /// Exact-name lookup.
    #[must_use]
    pub fn by_name(term: &str) -> Statement {
        (SAFE_SEARCH_SQL.to_string(), vec![term.to_sql_value()])
    }

    /// Single-row insert.
    #[must_use]
    pub fn insert(product: &NewProduct) -> Statement {
        (
            format!("INSERT INTO {PRODUCTS_TABLE} (name, description, price) VALUES (?, ?, ?)"),
            vec![
                product.name.as_str().to_sql_value(),
                product.description.clone().to_sql_value(),
                product.price.to_sql_value(),
            ],
        )
    }

    /// The first `limit` rows in id order.
    #[must_use]
    pub fn first(limit: i64) -> Statement {
        (
            format!("SELECT * FROM {PRODUCTS_TABLE} ORDER BY id LIMIT ?"),
            vec![limit.to_sql_value()],
        )
    }
}

/// Binds every parameter of a statement to a `query_as` query.
pub(crate) fn bind_all<'q, O>(
    mut query: sqlx::query::QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    params: Vec<SqlValue>,
) -> sqlx::query::QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    for value in params {
        query = match value {
            SqlValue::Null => query.bind(Option::<i64>::None),
            SqlValue::Int(i) => query.bind(i),
            SqlValue::Float(f) => query.bind(f),
            SqlValue::Text(s) => query.bind(s),
        };
    }
    query
}

/// Binds every parameter of a statement to a raw query.
pub(crate) fn bind_all_raw<'q>(
    mut query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    params: Vec<SqlValue>,
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    for value in params {
        query = match value {
            SqlValue::Null => query.bind(Option::<i64>::None),
            SqlValue::Int(i) => query.bind(i),
            SqlValue::Float(f) => query.bind(f),
            SqlValue::Text(s) => query.bind(s),
        };
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_keeps_term_out_of_sql() {
        let (sql, params) = ProductQuery::by_name("' OR '1'='1");
        assert_eq!(sql, "SELECT * FROM products WHERE name = ?");
        assert_eq!(params, vec![SqlValue::Text("' OR '1'='1".to_string())]);
    }

    #[test]
    fn test_insert_params_in_column_order() {
        let product = NewProduct::new("Widget", "A test widget", 9.99);
        let (sql, params) = ProductQuery::insert(&product);
        assert_eq!(
            sql,
            "INSERT INTO products (name, description, price) VALUES (?, ?, ?)"
        );
        assert_eq!(
            params,
            vec![
                SqlValue::Text("Widget".to_string()),
                SqlValue::Text("A test widget".to_string()),
                SqlValue::Float(9.99),
            ]
        );
    }

    #[test]
    fn test_insert_missing_description_is_null() {
        let product = NewProduct::new("Bare", "", 1.0).without_description();
        let (_, params) = ProductQuery::insert(&product);
        assert_eq!(params[1], SqlValue::Null);
    }

    #[test]
    fn test_first_binds_limit() {
        let (sql, params) = ProductQuery::first(50);
        assert!(sql.ends_with("LIMIT ?"));
        assert_eq!(params, vec![SqlValue::Int(50)]);
    }
}
