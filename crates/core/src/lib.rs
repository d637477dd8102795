//! Labelled feature vectors ranked against a query by cosine similarity.

pub mod config;
pub mod dataset;
pub mod service;
pub mod similarity;
pub mod vector_store;

use rusty_recommender_common::Result;
use tracing::info;

pub use self::config::{RecommenderConfig, ServerConfig};
pub use service::{RecommenderService, StoreStats};
pub use vector_store::{DegeneratePolicy, StoreConfig, VectorStore};

/// Builds a store from the configured dataset file, or the built-in travel
/// destinations when none is set.
pub fn build_store(config: &RecommenderConfig) -> Result<VectorStore> {
    let entries = match &config.dataset_path {
        Some(path) => dataset::load_entries(path)?,
        None => dataset::travel_destinations(),
    };

    let mut store = VectorStore::with_config(config.store_config());
    let count = dataset::load_into(&mut store, entries)?;
    info!("Store populated with {} entries", count);
    Ok(store)
}
