//! Relationship batches.
//!
//! Creates relationships between nodes merged earlier in the same run:
//! - (:Customer)-[:PLACED]->(:Order)
//! - (:Order)-[:CONTAINS {quantity}]->(:Product)
//! - (:Customer)-[:VIEW|CLICK|ADD_TO_CART {ts, event_id}]->(:Product)

use std::collections::BTreeMap;

use shopgraph_core::EventType;
use shopgraph_db::queries::events::EventRow;
use shopgraph_db::queries::orders::{OrderItemRow, OrderRow};

use super::statement::{ParamRow, Statement};

pub(crate) const MERGE_PLACED: &str = "UNWIND $rows AS r
     MATCH (c:Customer {id: r.customer_id})
     MATCH (o:Order {id: r.order_id})
     MERGE (c)-[:PLACED]->(o)";

pub(crate) const MERGE_CONTAINS: &str = "UNWIND $rows AS r
     MATCH (o:Order {id: r.order_id})
     MATCH (p:Product {id: r.product_id})
     MERGE (o)-[rel:CONTAINS]->(p)
     SET rel.quantity = r.quantity";

/// Behavioral edges use CREATE: every event row is its own edge.
fn create_behavior_cypher(kind: EventType) -> String {
    format!(
        "UNWIND $rows AS r
         MATCH (c:Customer {{id: r.customer_id}})
         MATCH (p:Product {{id: r.product_id}})
         CREATE (c)-[:{} {{ts: r.ts, event_id: r.id}}]->(p)",
        kind.rel_type()
    )
}

pub fn placed(orders: &[OrderRow]) -> Statement {
    let rows = orders
        .iter()
        .map(|o| ParamRow::new().with_opt("customer_id", o.customer_id).with("order_id", o.id))
        .collect();
    Statement::batch("placed", MERGE_PLACED, rows)
}

pub fn contains(items: &[OrderItemRow]) -> Statement {
    let rows = items
        .iter()
        .map(|i| {
            ParamRow::new()
                .with("order_id", i.order_id)
                .with("product_id", i.product_id)
                .with_opt("quantity", i.quantity)
        })
        .collect();
    Statement::batch("contains", MERGE_CONTAINS, rows)
}

/// Behavioral batches grouped by event kind.
#[derive(Debug, Clone, Default)]
pub struct BehaviorBatches {
    /// One statement per kind present in the source, in `EventType::ALL` order.
    pub statements: Vec<Statement>,
    /// Unrecognized event_type values and how many rows carried each.
    pub unknown: BTreeMap<String, usize>,
}

impl BehaviorBatches {
    pub fn skipped(&self) -> usize {
        self.unknown.values().sum()
    }
}

/// Key under which rows with a NULL event_type are counted.
pub const NULL_EVENT_TYPE: &str = "<null>";

/// Group events by kind. Rows with an unrecognized or NULL event_type are
/// left out.
pub fn behavior(events: &[EventRow]) -> BehaviorBatches {
    let mut grouped: BTreeMap<EventType, Vec<ParamRow>> = BTreeMap::new();
    let mut unknown: BTreeMap<String, usize> = BTreeMap::new();

    for event in events {
        let raw = event.event_type.as_deref();
        match raw.map(str::parse::<EventType>) {
            Some(Ok(kind)) => grouped.entry(kind).or_default().push(
                ParamRow::new()
                    .with("id", event.id)
                    .with_opt("customer_id", event.customer_id)
                    .with_opt("product_id", event.product_id)
                    .with_opt("ts", event.ts.as_deref()),
            ),
            _ => *unknown.entry(raw.unwrap_or(NULL_EVENT_TYPE).to_string()).or_default() += 1,
        }
    }

    let statements = EventType::ALL
        .into_iter()
        .filter_map(|kind| {
            grouped.remove(&kind).map(|rows| {
                Statement::batch(
                    format!("events:{}", kind.as_str()),
                    create_behavior_cypher(kind),
                    rows,
                )
            })
        })
        .collect();

    BehaviorBatches { statements, unknown }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::statement::Param;

    fn event(id: i64, event_type: &str) -> EventRow {
        EventRow {
            id,
            customer_id: Some(1),
            product_id: Some(100),
            event_type: Some(event_type.to_string()),
            ts: Some("2024-03-01 12:00:00".to_string()),
        }
    }

    #[test]
    fn test_contains_carries_quantity() {
        let stmt = contains(&[OrderItemRow { order_id: 10, product_id: 100, quantity: Some(2) }]);
        let row = &stmt.rows.as_ref().unwrap()[0];
        assert_eq!(row.get("order_id"), Some(&Param::Int(10)));
        assert_eq!(row.get("product_id"), Some(&Param::Int(100)));
        assert_eq!(row.get("quantity"), Some(&Param::Int(2)));
        assert!(stmt.cypher.contains("SET rel.quantity = r.quantity"));
    }

    #[test]
    fn test_placed_links_customer_to_order() {
        let stmt = placed(&[OrderRow { id: 10, customer_id: Some(1), ts: Some("2024-02-01".to_string()) }]);
        let row = &stmt.rows.as_ref().unwrap()[0];
        assert_eq!(row.get("customer_id"), Some(&Param::Int(1)));
        assert_eq!(row.get("order_id"), Some(&Param::Int(10)));
    }

    #[test]
    fn test_behavior_groups_by_kind_in_fixed_order() {
        let batches = behavior(&[
            event(1, "add_to_cart"),
            event(2, "view"),
            event(3, "view"),
            event(4, "click"),
        ]);

        let names: Vec<&str> = batches.statements.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["events:view", "events:click", "events:add_to_cart"]);
        assert_eq!(batches.statements[0].row_count(), 2);
        assert!(batches.statements[0].cypher.contains("CREATE (c)-[:VIEW {ts: r.ts, event_id: r.id}]->(p)"));
        assert!(batches.statements[2].cypher.contains("[:ADD_TO_CART "));
        assert_eq!(batches.skipped(), 0);
    }

    #[test]
    fn test_behavior_drops_unknown_kinds() {
        let batches = behavior(&[event(1, "view"), event(2, "purchase"), event(3, "purchase"), event(4, "")]);

        assert_eq!(batches.statements.len(), 1);
        assert_eq!(batches.statements[0].row_count(), 1);
        assert_eq!(batches.skipped(), 3);
        assert_eq!(batches.unknown.get("purchase"), Some(&2));
        assert_eq!(batches.unknown.get(""), Some(&1));
    }

    #[test]
    fn test_behavior_tolerates_null_columns() {
        let mut no_ts = event(1, "click");
        no_ts.ts = None;
        let mut no_type = event(2, "view");
        no_type.event_type = None;

        let batches = behavior(&[no_ts, no_type]);

        assert_eq!(batches.statements.len(), 1);
        let row = &batches.statements[0].rows.as_ref().unwrap()[0];
        assert_eq!(row.get("id"), Some(&Param::Int(1)));
        assert_eq!(row.get("ts"), None);
        assert_eq!(batches.unknown.get(NULL_EVENT_TYPE), Some(&1));
    }

    #[test]
    fn test_behavior_without_events_is_empty() {
        let batches = behavior(&[]);
        assert!(batches.statements.is_empty());
        assert_eq!(batches.skipped(), 0);
    }
}
