//! Relational to Neo4j load pipeline.
//!
//! Reads the full relational snapshot, wipes the graph and rebuilds it.
//! There is no incremental mode: every run mirrors the latest snapshot.

pub mod nodes;
pub mod relationships;
pub mod runner;
pub mod statement;


use std::time::Instant;

use anyhow::{Context, Result};
use shopgraph_core::LoadReport;
use shopgraph_db::{SourcePool, SourceSnapshot};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{schema, GraphClient};
use runner::{execute_statements, AutoCommit, Transaction};
use statement::Statement;

pub(crate) const WIPE_GRAPH: &str = "MATCH (n) DETACH DELETE n";

/// Options for a load run.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Run the wipe and every batch in a single transaction so a failure
    /// leaves the previous graph untouched.
    pub atomic: bool,
}

/// Ordered statements for one full reload.
#[derive(Debug, Clone, Default)]
pub struct LoadPlan {
    pub statements: Vec<Statement>,
    pub skipped_events: usize,
}

impl LoadPlan {
    /// The plan with the schema constraints placed right after the wipe.
    ///
    /// Constraints go in after the wipe so that duplicate ids left by an
    /// earlier loader are gone before uniqueness is enforced.
    pub fn with_schema(&self) -> Vec<Statement> {
        let mut sequence = Vec::with_capacity(self.statements.len() + schema::SCHEMA_STATEMENTS.len());
        let mut rest = self.statements.iter().cloned();
        sequence.extend(rest.next());
        sequence.extend(schema::schema_statements());
        sequence.extend(rest);
        sequence
    }
}

/// Turn a snapshot into the fixed load sequence: wipe, nodes (Customer,
/// Category, Product, Order), then relationships (PLACED, CONTAINS,
/// behavioral edges).
pub fn build_plan(snapshot: &SourceSnapshot) -> LoadPlan {
    let behavior = relationships::behavior(&snapshot.events);
    for (event_type, rows) in &behavior.unknown {
        warn!(event_type = %event_type, rows, "Dropping events with unknown event_type");
    }
    let skipped_events = behavior.skipped();

    let mut statements = vec![
        Statement::plain("wipe", WIPE_GRAPH),
        nodes::customers(&snapshot.customers),
        nodes::categories(&snapshot.categories),
        nodes::products(&snapshot.products),
        nodes::orders(&snapshot.orders),
        relationships::placed(&snapshot.orders),
        relationships::contains(&snapshot.order_items),
    ];
    statements.extend(behavior.statements);

    LoadPlan {
        statements,
        skipped_events,
    }
}

/// Run a full ETL: read every source table, wipe the graph, reload it.
///
/// Without `atomic`, a failure part-way leaves the graph partially wiped
/// or partially loaded.
pub async fn run_etl(source: &SourcePool, client: &GraphClient, options: LoadOptions) -> Result<LoadReport> {
    let run_id = Uuid::new_v4();
    let started = Instant::now();
    info!(%run_id, atomic = options.atomic, "Starting ETL run");

    let snapshot = shopgraph_db::read_snapshot(source)
        .await
        .context("Failed to read relational source")?;

    let plan = build_plan(&snapshot);

    if options.atomic {
        // Schema changes cannot share a write transaction, so they run
        // first against the graph as it stands.
        schema::initialize_schema(client)
            .await
            .context("Failed to initialize graph schema")?;

        let mut txn = Transaction::begin(client).await?;
        let outcome = execute_statements(&mut txn, &plan.statements).await;
        match outcome {
            Ok(()) => txn.commit().await?,
            Err(e) => {
                warn!(%run_id, error = %e, "Load failed, rolling back");
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(%run_id, error = %rollback_err, "Rollback failed");
                }
                return Err(e);
            }
        }
    } else {
        execute_statements(&mut AutoCommit::new(client), &plan.with_schema()).await?;
    }

    let report = LoadReport {
        loaded: snapshot.counts(),
        skipped_events: plan.skipped_events,
    };

    info!(
        %run_id,
        customers = report.loaded.customers,
        categories = report.loaded.categories,
        products = report.loaded.products,
        orders = report.loaded.orders,
        order_items = report.loaded.order_items,
        events = report.loaded.events,
        skipped_events = report.skipped_events,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "ETL run complete"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopgraph_db::queries::catalog::{CategoryRow, ProductRow};
    use shopgraph_db::queries::customers::CustomerRow;
    use shopgraph_db::queries::events::EventRow;
    use shopgraph_db::queries::orders::{OrderItemRow, OrderRow};
    use statement::Param;

    fn sample_snapshot() -> SourceSnapshot {
        SourceSnapshot {
            customers: vec![CustomerRow {
                id: 1,
                name: Some("A".to_string()),
                join_date: Some("2024-01-01".to_string()),
            }],
            categories: vec![CategoryRow { id: 5, name: Some("Kitchen".to_string()) }],
            products: vec![ProductRow {
                id: 100,
                name: Some("X".to_string()),
                price: Some(12.0),
                category_id: Some(5),
            }],
            orders: vec![OrderRow {
                id: 10,
                customer_id: Some(1),
                ts: Some("2024-02-01 10:00:00".to_string()),
            }],
            order_items: vec![OrderItemRow { order_id: 10, product_id: 100, quantity: Some(2) }],
            events: vec![
                EventRow {
                    id: 1000,
                    customer_id: Some(1),
                    product_id: Some(100),
                    event_type: Some("view".to_string()),
                    ts: Some("2024-01-30 09:00:00".to_string()),
                },
                EventRow {
                    id: 1001,
                    customer_id: Some(1),
                    product_id: Some(100),
                    event_type: Some("wishlist".to_string()),
                    ts: Some("2024-01-30 09:01:00".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_plan_follows_fixed_load_order() {
        let plan = build_plan(&sample_snapshot());
        let names: Vec<&str> = plan.statements.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["wipe", "customers", "categories", "products", "orders", "placed", "contains", "events:view"]
        );
        assert_eq!(plan.statements[0].cypher, WIPE_GRAPH);
    }

    #[test]
    fn test_schema_follows_wipe_and_precedes_nodes() {
        let plan = build_plan(&sample_snapshot());
        let sequence = plan.with_schema();
        let names: Vec<&str> = sequence.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(sequence.len(), plan.statements.len() + schema::SCHEMA_STATEMENTS.len());
        assert_eq!(names[0], "wipe");
        assert_eq!(&names[1..5], &["schema:1", "schema:2", "schema:3", "schema:4"]);
        assert_eq!(names[5], "customers");
        assert_eq!(names.last(), Some(&"events:view"));
    }

    #[test]
    fn test_plan_links_customer_order_and_product() {
        let plan = build_plan(&sample_snapshot());

        let placed = plan.statements.iter().find(|s| s.name == "placed").unwrap();
        let placed_row = &placed.rows.as_ref().unwrap()[0];
        assert_eq!(placed_row.get("customer_id"), Some(&Param::Int(1)));
        assert_eq!(placed_row.get("order_id"), Some(&Param::Int(10)));

        let contains = plan.statements.iter().find(|s| s.name == "contains").unwrap();
        let contains_row = &contains.rows.as_ref().unwrap()[0];
        assert_eq!(contains_row.get("order_id"), Some(&Param::Int(10)));
        assert_eq!(contains_row.get("product_id"), Some(&Param::Int(100)));
        assert_eq!(contains_row.get("quantity"), Some(&Param::Int(2)));
    }

    #[test]
    fn test_plan_counts_skipped_events() {
        let plan = build_plan(&sample_snapshot());
        assert_eq!(plan.skipped_events, 1);
    }

    #[test]
    fn test_plan_is_stable_across_runs() {
        let snapshot = sample_snapshot();
        assert_eq!(build_plan(&snapshot).statements, build_plan(&snapshot).statements);
    }

    #[tokio::test]
    async fn test_plan_executes_every_step() {
        let plan = build_plan(&sample_snapshot());
        let mut runner = runner::tests::RecordingRunner::default();
        execute_statements(&mut runner, &plan.statements).await.unwrap();
        assert_eq!(runner.executed.len(), plan.statements.len());
        assert_eq!(runner.executed.first().map(String::as_str), Some("wipe"));
    }
}
