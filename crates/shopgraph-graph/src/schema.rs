//! Neo4j schema initialization (uniqueness constraints).

use anyhow::Result;
use tracing::info;

use crate::sync::runner::{execute_statements, AutoCommit};
use crate::sync::statement::Statement;
use crate::GraphClient;

/// Cypher statements for schema initialization.
///
/// Constraints survive `DETACH DELETE`, so they are created once and kept
/// across reloads.
pub(crate) const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE CONSTRAINT customer_id IF NOT EXISTS FOR (c:Customer) REQUIRE c.id IS UNIQUE",
    "CREATE CONSTRAINT category_id IF NOT EXISTS FOR (c:Category) REQUIRE c.id IS UNIQUE",
    "CREATE CONSTRAINT product_id IF NOT EXISTS FOR (p:Product) REQUIRE p.id IS UNIQUE",
    "CREATE CONSTRAINT order_id IF NOT EXISTS FOR (o:Order) REQUIRE o.id IS UNIQUE",
];

/// The constraint statements as named load steps.
pub fn schema_statements() -> Vec<Statement> {
    SCHEMA_STATEMENTS
        .iter()
        .enumerate()
        .map(|(i, cypher)| Statement::plain(format!("schema:{}", i + 1), *cypher))
        .collect()
}

/// Initialize Neo4j schema with constraints.
///
/// Safe to run multiple times - uses IF NOT EXISTS clauses. Must run
/// outside any write transaction.
pub async fn initialize_schema(client: &GraphClient) -> Result<()> {
    execute_statements(&mut AutoCommit::new(client), &schema_statements()).await?;

    info!("Neo4j schema initialized ({} statements)", SCHEMA_STATEMENTS.len());
    Ok(())
}
