//! Order and order line queries.

use sqlx::{FromRow, PgConnection};

use crate::pool::SourceResult;

pub(crate) const SELECT_ORDERS: &str =
    "SELECT id::bigint AS id, customer_id::bigint AS customer_id, ts::text AS ts FROM orders";

pub(crate) const SELECT_ORDER_ITEMS: &str =
    "SELECT order_id::bigint AS order_id, product_id::bigint AS product_id, quantity::bigint AS quantity
     FROM order_items";

/// Order row from the source.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct OrderRow {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub ts: Option<String>,
}

/// Order line row from the source.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct OrderItemRow {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: Option<i64>,
}

/// Read every order.
pub async fn list_orders(conn: &mut PgConnection) -> SourceResult<Vec<OrderRow>> {
    let rows = sqlx::query_as::<_, OrderRow>(SELECT_ORDERS)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

/// Read every order line.
pub async fn list_order_items(conn: &mut PgConnection) -> SourceResult<Vec<OrderItemRow>> {
    let rows = sqlx::query_as::<_, OrderItemRow>(SELECT_ORDER_ITEMS)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}
