//! Full read of the source tables.

use shopgraph_core::LoadCounts;
use tracing::{debug, info};

use crate::pool::{SourcePool, SourceResult};
use crate::queries::catalog::{self, CategoryRow, ProductRow};
use crate::queries::customers::{self, CustomerRow};
use crate::queries::events::{self, EventRow};
use crate::queries::orders::{self, OrderItemRow, OrderRow};

/// Every row of the six source tables, read over one connection.
#[derive(Debug, Clone, Default)]
pub struct SourceSnapshot {
    pub customers: Vec<CustomerRow>,
    pub categories: Vec<CategoryRow>,
    pub products: Vec<ProductRow>,
    pub orders: Vec<OrderRow>,
    pub order_items: Vec<OrderItemRow>,
    pub events: Vec<EventRow>,
}

impl SourceSnapshot {
    /// Row counts per table, as consumed by the loader.
    pub fn counts(&self) -> LoadCounts {
        LoadCounts {
            customers: self.customers.len(),
            categories: self.categories.len(),
            products: self.products.len(),
            orders: self.orders.len(),
            order_items: self.order_items.len(),
            events: self.events.len(),
        }
    }
}

/// Read all six tables in order: customers, categories, products, orders,
/// order_items, events.
///
/// A single pooled connection is held for the duration of the read and
/// returned to the pool when this function exits, on error paths included.
pub async fn read_snapshot(pool: &SourcePool) -> SourceResult<SourceSnapshot> {
    let mut conn = pool.acquire().await?;

    let customers = customers::list_customers(&mut conn).await?;
    debug!(rows = customers.len(), "Read customers");
    let categories = catalog::list_categories(&mut conn).await?;
    debug!(rows = categories.len(), "Read categories");
    let products = catalog::list_products(&mut conn).await?;
    debug!(rows = products.len(), "Read products");
    let orders = orders::list_orders(&mut conn).await?;
    debug!(rows = orders.len(), "Read orders");
    let order_items = orders::list_order_items(&mut conn).await?;
    debug!(rows = order_items.len(), "Read order_items");
    let events = events::list_events(&mut conn).await?;
    debug!(rows = events.len(), "Read events");

    drop(conn);

    let snapshot = SourceSnapshot {
        customers,
        categories,
        products,
        orders,
        order_items,
        events,
    };
    info!(rows = snapshot.counts().total(), "Source snapshot read");
    Ok(snapshot)
}
