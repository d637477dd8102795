use rusty_recommender_common::{Entry, Recommendation, Result};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::vector_store::VectorStore;

/// Shared handle over a `VectorStore`. Inserts take the write lock, queries
/// share the read lock.
#[derive(Debug, Clone)]
pub struct RecommenderService {
    store: Arc<RwLock<VectorStore>>,
    default_top_k: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreStats {
    pub entries: usize,
    pub dimension: Option<usize>,
}

impl RecommenderService {
    pub fn new(store: VectorStore, default_top_k: usize) -> Self {
        info!(
            "Recommender service ready with {} entries (dimension {:?})",
            store.len(),
            store.dimension()
        );

        Self {
            store: Arc::new(RwLock::new(store)),
            default_top_k,
        }
    }

    pub async fn add(&self, vector: Vec<f64>, label: String) -> Result<()> {
        let mut store = self.store.write().await;
        store.add(vector, label)
    }

    pub async fn recommend(&self, query: &[f64], top_k: Option<usize>) -> Result<Vec<Recommendation>> {
        let top_k = top_k.unwrap_or(self.default_top_k);
        let store = self.store.read().await;
        let results = store.recommend(query, top_k)?;
        debug!("Served {} recommendations", results.len());
        Ok(results)
    }

    pub async fn entries(&self) -> Vec<Entry> {
        self.store.read().await.entries().to_vec()
    }

    pub async fn stats(&self) -> StoreStats {
        let store = self.store.read().await;
        StoreStats {
            entries: store.len(),
            dimension: store.dimension(),
        }
    }

    pub fn default_top_k(&self) -> usize {
        self.default_top_k
    }
}
