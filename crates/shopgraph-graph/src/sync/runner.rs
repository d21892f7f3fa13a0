//! Statement execution against Neo4j.

use anyhow::{Context, Result};
use async_trait::async_trait;
use neo4rs::Txn;
use tracing::debug;

use super::statement::Statement;
use crate::GraphClient;

/// Something that can run load statements.
#[async_trait]
pub trait CypherRunner: Send {
    async fn run(&mut self, statement: &Statement) -> Result<()>;
}

/// Runs each statement in its own auto-commit transaction.
pub struct AutoCommit<'a> {
    client: &'a GraphClient,
}

impl<'a> AutoCommit<'a> {
    pub fn new(client: &'a GraphClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CypherRunner for AutoCommit<'_> {
    async fn run(&mut self, statement: &Statement) -> Result<()> {
        self.client.execute(statement.to_query()).await
    }
}

/// Runs every statement inside one explicit transaction.
pub struct Transaction {
    txn: Txn,
}

impl Transaction {
    pub async fn begin(client: &GraphClient) -> Result<Self> {
        Ok(Self {
            txn: client.start_txn().await?,
        })
    }

    pub async fn commit(self) -> Result<()> {
        self.txn.commit().await.context("Failed to commit load transaction")
    }

    pub async fn rollback(self) -> Result<()> {
        self.txn.rollback().await.context("Failed to roll back load transaction")
    }
}

#[async_trait]
impl CypherRunner for Transaction {
    async fn run(&mut self, statement: &Statement) -> Result<()> {
        self.txn
            .run(statement.to_query())
            .await
            .context("Neo4j query execution failed")
    }
}

/// Run statements in order, stopping at the first failure.
pub async fn execute_statements<R: CypherRunner + ?Sized>(runner: &mut R, statements: &[Statement]) -> Result<()> {
    for statement in statements {
        if statement.is_empty_batch() {
            debug!(step = %statement.name, "Skipping empty batch");
            continue;
        }

        runner
            .run(statement)
            .await
            .with_context(|| format!("Load step '{}' failed", statement.name))?;
        debug!(step = %statement.name, rows = statement.row_count(), "Load step done");
    }
    Ok(())
}
