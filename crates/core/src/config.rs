use config::{Config, Environment, File};
use rusty_recommender_common::{RecommenderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::vector_store::{DegeneratePolicy, StoreConfig};

pub const DEFAULT_CONFIG_NAME: &str = "recommender";
pub const ENV_PREFIX: &str = "RECOMMENDER";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    pub top_k: usize,
    pub dataset_path: Option<PathBuf>,
    pub dimension: Option<usize>,
    pub degenerate_policy: DegeneratePolicy,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub max_request_size: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            dataset_path: None, // Built-in travel dataset
            dimension: None,
            degenerate_policy: DegeneratePolicy::Reject,
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: vec!["*".to_string()],
            max_request_size: 1024 * 1024, // 1MB
        }
    }
}

impl RecommenderConfig {
    /// Layers an optional config file under `RECOMMENDER__*` environment
    /// variables. Without an explicit path, `recommender.{toml,json,yaml}` in
    /// the working directory is picked up if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config: Self = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(env_prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| RecommenderError::Configuration(format!("Failed to load config: {}", e)))?
            .try_deserialize()
            .map_err(|e| RecommenderError::Configuration(format!("Invalid config: {}", e)))?;

        config.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dimension == Some(0) {
            return Err(RecommenderError::Configuration(
                "dimension must be at least 1".to_string(),
            ));
        }

        if self.server.max_request_size == 0 {
            return Err(RecommenderError::Configuration(
                "server max_request_size must be positive".to_string(),
            ));
        }

        if self.server.host.is_empty() {
            return Err(RecommenderError::Configuration(
                "server host must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            dimension: self.dimension,
            degenerate_policy: self.degenerate_policy,
        }
    }

    pub fn with_dataset_path(mut self, path: PathBuf) -> Self {
        self.dataset_path = Some(path);
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}
