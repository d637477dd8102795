pub mod health;
pub mod recommend;

use axum::Router;
use rusty_recommender_core::RecommenderService;

pub fn create_routes(service: RecommenderService) -> Router {
    Router::new()
        // Health check routes
        .nest("/health", health::routes(service.clone()))

        // Store and query endpoints
        .nest("/api/v1", recommend::routes(service))
}

// Fallback handler for unmatched routes
pub async fn not_found_handler() -> axum::http::StatusCode {
    axum::http::StatusCode::NOT_FOUND
}
