//! Behavioral event queries.

use sqlx::{FromRow, PgConnection};

use crate::pool::SourceResult;

pub(crate) const SELECT_EVENTS: &str =
    "SELECT id::bigint AS id, customer_id::bigint AS customer_id, product_id::bigint AS product_id,
            event_type::text AS event_type, ts::text AS ts
     FROM events";

/// Event row from the source.
///
/// `event_type` is kept as the raw column text; it is classified when the
/// graph load is planned.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub product_id: Option<i64>,
    pub event_type: Option<String>,
    pub ts: Option<String>,
}

/// Read every event.
pub async fn list_events(conn: &mut PgConnection) -> SourceResult<Vec<EventRow>> {
    let rows = sqlx::query_as::<_, EventRow>(SELECT_EVENTS)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}
