use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rusty_recommender_common::RecommenderError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Recommender error: {0}")]
    Recommender(#[from] RecommenderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, error_code) = match self {
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, msg, "VALIDATION_ERROR")
            }
            ApiError::Recommender(err) => {
                let code = match &err {
                    RecommenderError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
                    RecommenderError::InvalidDimension { .. } => "INVALID_DIMENSION",
                    RecommenderError::DegenerateVector(_) => "DEGENERATE_VECTOR",
                    RecommenderError::InvalidArgument(_) => "INVALID_ARGUMENT",
                    _ => "INTERNAL_ERROR",
                };

                if err.is_client_error() {
                    warn!("Rejected request: {}", err);
                    (StatusCode::BAD_REQUEST, err.to_string(), code)
                } else {
                    error!("Recommender error: {}", err);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string(), code)
                }
            }
        };

        let response_body = json!({
            "success": false,
            "error": error_message,
            "error_code": error_code,
            "timestamp": chrono::Utc::now()
        });

        (status, Json(response_body)).into_response()
    }
}

// Helper function to create validation errors
pub fn validation_error(message: &str) -> ApiError {
    ApiError::Validation(message.to_string())
}

// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = validation_error("Invalid input");
        assert!(matches!(error, ApiError::Validation(_)));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_dimension_mismatch_is_bad_request() {
        let error: ApiError = RecommenderError::DimensionMismatch { expected: 6, actual: 5 }.into();
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_dataset_error_is_server_error() {
        let error: ApiError = RecommenderError::Dataset("unreadable".to_string()).into();
        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
