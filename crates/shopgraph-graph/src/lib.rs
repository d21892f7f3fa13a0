//! # Shopgraph Graph
//!
//! Neo4j side of shopgraph.
//!
//! Provides the full wipe-and-reload of relational shop data into the
//! graph, schema constraints, and the co-occurrence recommendation query.

pub mod client;
pub mod queries;
pub mod schema;
pub mod sync;

pub use client::{GraphClient, GraphConfig, GraphCounts, NODE_LABELS};
pub use queries::recommend::{recommend, DEFAULT_LIMIT};
pub use sync::{run_etl, LoadOptions};
