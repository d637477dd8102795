pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

use axum::Json;
use rusty_recommender_common::ApiResponse;
use rusty_recommender_core::ServerConfig;

pub use error::{ApiError, ApiResult};
pub use server::ApiServer;

// Re-export common types
pub use rusty_recommender_common;
pub use rusty_recommender_core;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub max_request_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: vec!["*".to_string()],
            max_request_size: 1024 * 1024, // 1MB
        }
    }
}

impl From<&ServerConfig> for ApiConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
            cors_origins: server.cors_origins.clone(),
            max_request_size: server.max_request_size,
        }
    }
}

// Health check response
#[derive(serde::Serialize)]
pub struct HealthCheck {
    pub status: String,
    pub version: String,
    pub entries: usize,
    pub dimension: Option<usize>,
}

// Common API utilities
pub fn create_success_response<T: serde::Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_api_config_from_server_config() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            cors_origins: vec!["http://localhost:3000".to_string()],
            max_request_size: 2048,
        };
        let config = ApiConfig::from(&server);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000".to_string()]);
        assert_eq!(config.max_request_size, 2048);
    }

    #[test]
    fn test_success_response_creation() {
        let response = create_success_response(serde_json::json!({"message": "test"}));
        assert!(response.0.success);
    }
}
