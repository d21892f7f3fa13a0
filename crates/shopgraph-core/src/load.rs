//! ETL run results.

use serde::{Deserialize, Serialize};

/// Rows consumed per source table during one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadCounts {
    pub customers: usize,
    pub categories: usize,
    pub products: usize,
    pub orders: usize,
    pub order_items: usize,
    pub events: usize,
}

impl LoadCounts {
    /// Total rows read across all six tables.
    pub fn total(&self) -> usize {
        self.customers
            + self.categories
            + self.products
            + self.orders
            + self.order_items
            + self.events
    }
}

/// Outcome of a full wipe-and-reload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub loaded: LoadCounts,
    /// Event rows dropped because their event_type is not recognized.
    pub skipped_events: usize,
}
