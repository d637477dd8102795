use crate::{create_success_response, HealthCheck};
use axum::{extract::State, routing::get, Json, Router};
use rusty_recommender_common::ApiResponse;
use rusty_recommender_core::RecommenderService;
use serde_json::json;
use tracing::debug;

pub fn routes(service: RecommenderService) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
        .with_state(service)
}

// Basic health check endpoint
async fn health_check(State(service): State<RecommenderService>) -> Json<ApiResponse<HealthCheck>> {
    debug!("Health check requested");

    let stats = service.stats().await;
    create_success_response(HealthCheck {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        entries: stats.entries,
        dimension: stats.dimension,
    })
}

// Ready once the store holds something to rank
async fn readiness_check(State(service): State<RecommenderService>) -> Json<serde_json::Value> {
    debug!("Readiness check requested");

    let stats = service.stats().await;
    let status = if stats.entries > 0 { "ready" } else { "not_ready" };

    Json(json!({
        "status": status,
        "timestamp": chrono::Utc::now(),
        "checks": {
            "store": status,
            "entries": stats.entries
        }
    }))
}

async fn liveness_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "alive",
        "timestamp": chrono::Utc::now()
    }))
}
