use crate::{create_success_response, error::{validation_error, ApiResult}};
use axum::{extract::State, routing::{get, post}, Json, Router};
use rusty_recommender_common::{ApiResponse, Entry, Recommendation};
use rusty_recommender_core::{RecommenderService, StoreStats};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub query: Vec<f64>,
    // Signed so that non-positive values can be sent and yield no results
    pub top_k: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub results: Vec<Recommendation>,
    pub total_results: usize,
}

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub label: String,
    pub vector: Vec<f64>,
}

pub fn routes(service: RecommenderService) -> Router {
    Router::new()
        .route("/recommend", post(recommend))
        .route("/entries", post(add_entry).get(list_entries))
        .route("/stats", get(stats))
        .with_state(service)
}

fn ensure_finite(values: &[f64], what: &str) -> ApiResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(validation_error(&format!("{} must contain only finite numbers", what)))
    }
}

async fn recommend(
    State(service): State<RecommenderService>,
    Json(request): Json<RecommendRequest>,
) -> ApiResult<Json<ApiResponse<RecommendResponse>>> {
    ensure_finite(&request.query, "query")?;

    let top_k = request.top_k.map(|k| usize::try_from(k).unwrap_or(0));
    let results = service.recommend(&request.query, top_k).await?;

    Ok(create_success_response(RecommendResponse {
        total_results: results.len(),
        results,
    }))
}

async fn add_entry(
    State(service): State<RecommenderService>,
    Json(request): Json<AddEntryRequest>,
) -> ApiResult<Json<ApiResponse<StoreStats>>> {
    if request.label.trim().is_empty() {
        return Err(validation_error("label must not be empty"));
    }
    ensure_finite(&request.vector, "vector")?;

    service.add(request.vector, request.label.clone()).await?;
    info!("Added entry '{}'", request.label);

    Ok(create_success_response(service.stats().await))
}

async fn list_entries(State(service): State<RecommenderService>) -> Json<ApiResponse<Vec<Entry>>> {
    create_success_response(service.entries().await)
}

async fn stats(State(service): State<RecommenderService>) -> Json<ApiResponse<StoreStats>> {
    create_success_response(service.stats().await)
}
