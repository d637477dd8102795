use rusty_recommender_common::{Entry, RecommenderError, Result};
use std::path::Path;
use tracing::{debug, info};

use crate::vector_store::VectorStore;

/// Feature layout of the built-in travel dataset.
pub const TRAVEL_FEATURES: [&str; 6] = [
    "temperature",
    "humidity",
    "daily_cost",
    "beach",
    "adventure",
    "cultural",
];

/// Warm weather, medium humidity, moderate cost, beach and culture.
pub const SAMPLE_PREFERENCES: [f64; 6] = [27.0, 60.0, 180.0, 1.0, 0.0, 1.0];

pub fn travel_destinations() -> Vec<Entry> {
    vec![
        Entry::new("Sunny Beach in Thailand", vec![30.0, 70.0, 150.0, 1.0, 0.0, 0.0]),
        Entry::new("Mountain Hiking in Switzerland", vec![20.0, 50.0, 200.0, 0.0, 1.0, 0.0]),
        Entry::new("Cultural Tour in Italy", vec![25.0, 60.0, 120.0, 0.0, 0.0, 1.0]),
        Entry::new("Adventure and Culture in Nepal", vec![15.0, 40.0, 80.0, 0.0, 1.0, 1.0]),
        Entry::new("Beach and Adventure in Brazil", vec![28.0, 80.0, 250.0, 1.0, 1.0, 0.0]),
    ]
}

/// Reads a JSON array of `{"label": ..., "vector": [...]}` objects.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        RecommenderError::Dataset(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let entries: Vec<Entry> = serde_json::from_str(&raw).map_err(|e| {
        RecommenderError::Dataset(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Inserts entries in order, stopping at the first one the store rejects.
pub fn load_into(store: &mut VectorStore, entries: Vec<Entry>) -> Result<usize> {
    let count = entries.len();
    for entry in entries {
        let label = entry.label.clone();
        store.add(entry.vector, entry.label).map_err(|e| {
            debug!("Rejected dataset entry '{}': {}", label, e);
            e
        })?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_travel_dataset_shape() {
        let entries = travel_destinations();
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| e.dimension() == TRAVEL_FEATURES.len()));
        assert_eq!(SAMPLE_PREFERENCES.len(), TRAVEL_FEATURES.len());
    }

    #[test]
    fn test_load_entries_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"label":"a","vector":[1.0,2.0]}},{{"label":"b","vector":[3,4]}}]"#
        )
        .unwrap();

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], Entry::new("b", vec![3.0, 4.0]));
    }

    #[test]
    fn test_load_entries_missing_file() {
        let err = load_entries(Path::new("/nonexistent/dataset.json")).unwrap_err();
        assert!(matches!(err, RecommenderError::Dataset(_)));
    }

    #[test]
    fn test_load_entries_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"label":"a","vector":["hot"]}}]"#).unwrap();

        assert!(matches!(load_entries(file.path()), Err(RecommenderError::Dataset(_))));
    }

    #[test]
    fn test_load_into_stops_on_dimension_error() {
        let mut store = VectorStore::new();
        let entries = vec![
            Entry::new("a", vec![1.0, 2.0]),
            Entry::new("b", vec![1.0]),
            Entry::new("c", vec![1.0, 2.0]),
        ];

        let err = load_into(&mut store, entries).unwrap_err();
        assert_eq!(err, RecommenderError::InvalidDimension { expected: 2, actual: 1 });
        assert_eq!(store.len(), 1);
    }
}
