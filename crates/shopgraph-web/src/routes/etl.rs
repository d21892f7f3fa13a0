//! ETL trigger.

use axum::{extract::State, http::StatusCode, Json};
use shopgraph_core::LoadReport;
use tracing::info;

use super::internal_error;
use crate::state::AppState;

/// Run a full wipe-and-reload synchronously and return the row counts.
///
/// Concurrent triggers are not serialized.
pub async fn run_etl(State(state): State<AppState>) -> Result<Json<LoadReport>, (StatusCode, String)> {
    info!("ETL triggered over HTTP");

    let report = shopgraph_graph::run_etl(&state.source, &state.graph, state.load_options)
        .await
        .map_err(internal_error)?;

    Ok(Json(report))
}
