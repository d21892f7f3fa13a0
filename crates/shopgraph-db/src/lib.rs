//! Shopgraph relational source.
//!
//! Reads the six shop tables in full from PostgreSQL. The source is
//! never written to.

pub mod pool;
pub mod queries;
pub mod snapshot;

pub use pool::{init_pool, SourceConfig, SourceError, SourcePool, SourceResult};
pub use snapshot::{read_snapshot, SourceSnapshot};
