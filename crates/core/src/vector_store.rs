use rusty_recommender_common::{Entry, Recommendation, RecommenderError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::similarity::cosine_similarity;

/// How a zero-magnitude vector is scored, since cosine similarity divides by
/// the product of magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Fail the whole query with `DegenerateVector`.
    #[default]
    Reject,
    /// Score any pairing that involves a zero vector as `0.0`.
    ScoreZero,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Fixed dimension; when unset the first inserted vector decides it.
    pub dimension: Option<usize>,
    pub degenerate_policy: DegeneratePolicy,
}

/// Insertion-ordered collection of labelled feature vectors, queried by a
/// linear scan.
#[derive(Debug, Clone, Default)]
pub struct VectorStore {
    entries: Vec<Entry>,
    dimension: Option<usize>,
    config: StoreConfig,
}

impl VectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            entries: Vec::new(),
            dimension: config.dimension,
            config,
        }
    }

    pub fn add(&mut self, vector: Vec<f64>, label: impl Into<String>) -> Result<()> {
        if vector.is_empty() {
            return Err(RecommenderError::InvalidArgument(
                "feature vector must not be empty".to_string(),
            ));
        }

        match self.dimension {
            Some(expected) if expected != vector.len() => {
                return Err(RecommenderError::InvalidDimension {
                    expected,
                    actual: vector.len(),
                });
            }
            Some(_) => {}
            None => self.dimension = Some(vector.len()),
        }

        let entry = Entry::new(label, vector);
        debug!("Stored entry '{}' at position {}", entry.label, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Ranks every stored entry against `query` and returns the best `top_k`.
    ///
    /// Equal scores keep insertion order. The result is empty for an empty
    /// store or `top_k == 0`; a `top_k` past the store size returns everything.
    /// A configured dimension is checked even while the store is empty.
    pub fn recommend(&self, query: &[f64], top_k: usize) -> Result<Vec<Recommendation>> {
        if let Some(expected) = self.dimension {
            if expected != query.len() {
                return Err(RecommenderError::DimensionMismatch {
                    expected,
                    actual: query.len(),
                });
            }
        }

        if self.entries.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let similarity = match cosine_similarity(query, &entry.vector) {
                Some(similarity) => similarity,
                None => self.resolve_degenerate(query, entry)?,
            };
            scored.push(Recommendation {
                label: entry.label.clone(),
                similarity,
            });
        }

        // `sort_by` is stable, so ties stay in insertion order
        scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        scored.truncate(top_k);

        debug!("Ranked {} entries, returning {}", self.entries.len(), scored.len());
        Ok(scored)
    }

    fn resolve_degenerate(&self, query: &[f64], entry: &Entry) -> Result<f64> {
        match self.config.degenerate_policy {
            DegeneratePolicy::ScoreZero => Ok(0.0),
            DegeneratePolicy::Reject => {
                let culprit = if query.iter().all(|x| *x == 0.0) {
                    "query vector".to_string()
                } else {
                    format!("entry '{}'", entry.label)
                };
                Err(RecommenderError::DegenerateVector(culprit))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
