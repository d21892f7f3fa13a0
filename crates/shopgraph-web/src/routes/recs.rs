//! Recommendation handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use shopgraph_core::RecommendationList;
use shopgraph_graph::DEFAULT_LIMIT;

use super::internal_error;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecsParams {
    pub limit: Option<i64>,
}

impl RecsParams {
    fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
    Query(params): Query<RecsParams>,
) -> Result<Json<RecommendationList>, (StatusCode, String)> {
    let recs = shopgraph_graph::recommend(&state.graph, customer_id, params.limit())
        .await
        .map_err(internal_error)?;

    Ok(Json(recs))
}
