use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

// Stored item: a feature vector and the label it is recommended under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub label: String,
    pub vector: Vec<f64>,
}

impl Entry {
    pub fn new(label: impl Into<String>, vector: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            vector,
        }
    }

    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}

// Ranked result of a similarity query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub label: String,
    pub similarity: f64,
}

// Error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecommenderError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid dimension: store holds {expected}-dimensional vectors, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Degenerate vector: {0} has zero magnitude")]
    DegenerateVector(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl RecommenderError {
    /// True for errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RecommenderError::DimensionMismatch { .. }
                | RecommenderError::InvalidDimension { .. }
                | RecommenderError::DegenerateVector(_)
                | RecommenderError::InvalidArgument(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RecommenderError>;

// API response types
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = Entry::new("Sunny Beach in Thailand", vec![30.0, 70.0, 150.0, 1.0, 0.0, 0.0]);

        assert_eq!(entry.label, "Sunny Beach in Thailand");
        assert_eq!(entry.dimension(), 6);
    }

    #[test]
    fn test_entry_json_shape() {
        let entry: Entry = serde_json::from_str(r#"{"label":"Nepal","vector":[15,40,80,0,1,1]}"#).unwrap();
        assert_eq!(entry.vector, vec![15.0, 40.0, 80.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_error_messages() {
        let err = RecommenderError::DimensionMismatch { expected: 6, actual: 5 };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 6, got 5");
        assert!(err.is_client_error());
        assert!(!RecommenderError::Dataset("missing".into()).is_client_error());
    }

    #[test]
    fn test_api_response() {
        let response = ApiResponse::success("data");
        assert!(response.success);
        assert_eq!(response.data, Some("data"));

        let error_response: ApiResponse<String> = ApiResponse::error("error".to_string());
        assert!(!error_response.success);
        assert_eq!(error_response.error, Some("error".to_string()));
    }
}
