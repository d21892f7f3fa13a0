//! Customer queries.

use sqlx::{FromRow, PgConnection};

use crate::pool::SourceResult;

pub(crate) const SELECT_CUSTOMERS: &str =
    "SELECT id::bigint AS id, name, join_date::text AS join_date FROM customers";

/// Customer row from the source. Nullable columns stay `None`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CustomerRow {
    pub id: i64,
    pub name: Option<String>,
    pub join_date: Option<String>,
}

/// Read every customer.
pub async fn list_customers(conn: &mut PgConnection) -> SourceResult<Vec<CustomerRow>> {
    let rows = sqlx::query_as::<_, CustomerRow>(SELECT_CUSTOMERS)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}
