//! Application state.

use shopgraph_db::SourcePool;
use shopgraph_graph::{GraphClient, LoadOptions};

/// Application state shared across handlers.
///
/// Both pools are created once at startup; handlers clone cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub source: SourcePool,
    pub graph: GraphClient,
    pub load_options: LoadOptions,
}

impl AppState {
    pub fn new(source: SourcePool, graph: GraphClient, load_options: LoadOptions) -> Self {
        Self {
            source,
            graph,
            load_options,
        }
    }
}
