//! Category and product queries.

use sqlx::{FromRow, PgConnection};

use crate::pool::SourceResult;

pub(crate) const SELECT_CATEGORIES: &str = "SELECT id::bigint AS id, name FROM categories";

pub(crate) const SELECT_PRODUCTS: &str =
    "SELECT id::bigint AS id, name, price::float8 AS price, category_id::bigint AS category_id
     FROM products";

/// Category row from the source.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CategoryRow {
    pub id: i64,
    pub name: Option<String>,
}

/// Product row from the source.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
    /// NULL when the product is uncategorized.
    pub category_id: Option<i64>,
}

/// Read every category.
pub async fn list_categories(conn: &mut PgConnection) -> SourceResult<Vec<CategoryRow>> {
    let rows = sqlx::query_as::<_, CategoryRow>(SELECT_CATEGORIES)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

/// Read every product.
pub async fn list_products(conn: &mut PgConnection) -> SourceResult<Vec<ProductRow>> {
    let rows = sqlx::query_as::<_, ProductRow>(SELECT_PRODUCTS)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}
