//! Neo4j connection client.

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query, Txn};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Node labels written by the loader.
pub const NODE_LABELS: [&str; 4] = ["Customer", "Category", "Product", "Order"];

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "password".to_string(),
            max_connections: 16,
        }
    }
}

/// Client for Neo4j operations.
///
/// Wraps the driver's connection pool; clones share it.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config and verify the server answers.
    ///
    /// `Graph::connect` only builds the pool, so a `RETURN 1` ping forces a
    /// real bolt handshake and surfaces an unreachable server immediately.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let client = Self::connect_lazy(config).await?;

        client
            .graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .context("Neo4j is not responding to queries")?;

        Ok(client)
    }

    /// Create a new GraphClient without touching the network.
    pub async fn connect_lazy(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .max_connections(config.max_connections)
            .fetch_size(500)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        Ok(Self { graph })
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> Result<()> {
        self.graph.run(query).await.context("Neo4j query execution failed")?;
        Ok(())
    }

    /// Execute a Cypher query and return results as rows.
    pub async fn query(&self, query: Query) -> Result<Vec<neo4rs::Row>> {
        let mut result = self.graph.execute(query).await.context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await.context("Failed to read Neo4j result row")? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a Cypher query and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(&self, query: Query, field: &str) -> Result<Option<T>> {
        let rows = self.query(query).await?;
        if let Some(row) = rows.into_iter().next() {
            let val: T = row
                .get(field)
                .map_err(|e| anyhow::anyhow!("Failed to get field '{}': {:?}", field, e))?;
            Ok(Some(val))
        } else {
            Ok(None)
        }
    }

    /// Start an explicit transaction.
    pub async fn start_txn(&self) -> Result<Txn> {
        self.graph.start_txn().await.context("Failed to start Neo4j transaction")
    }

    /// Get node and relationship counts for status display.
    pub async fn get_counts(&self) -> Result<GraphCounts> {
        let node_query = Query::new("MATCH (n) RETURN count(n) as count".to_string());
        let rel_query = Query::new("MATCH ()-[r]->() RETURN count(r) as count".to_string());

        let node_count: i64 = self.query_scalar(node_query, "count").await?.unwrap_or(0);
        let rel_count: i64 = self.query_scalar(rel_query, "count").await?.unwrap_or(0);

        let mut by_label = Vec::with_capacity(NODE_LABELS.len());
        for label in NODE_LABELS {
            by_label.push((label, self.count_label(label).await?));
        }

        Ok(GraphCounts {
            nodes: node_count as usize,
            relationships: rel_count as usize,
            by_label,
        })
    }

    /// Count nodes carrying one of the loader's labels.
    pub async fn count_label(&self, label: &str) -> Result<usize> {
        if !NODE_LABELS.contains(&label) {
            anyhow::bail!("Unknown node label: {}", label);
        }

        let query = Query::new(format!("MATCH (n:{}) RETURN count(n) as count", label));
        let count: i64 = self.query_scalar(query, "count").await?.unwrap_or(0);
        Ok(count as usize)
    }
}

/// Node and relationship counts.
#[derive(Debug, Clone)]
pub struct GraphCounts {
    pub nodes: usize,
    pub relationships: usize,
    pub by_label: Vec<(&'static str, usize)>,
}
