//! File-backed records provider.
//!
//! Loads a JSON array of court records once at construction and serves
//! searches from memory, with the same filter semantics as the simulated
//! backend. Useful for pointing the app at a scraped or exported dataset.

use crate::model::{CourtRecord, ProviderError, SearchRequest, SearchResponse};
use crate::provider::{search_slice, RecordsProvider};
use std::path::{Path, PathBuf};
use tracing::info;

/// Records provider backed by a JSON dataset file.
#[derive(Debug, Clone)]
pub struct FileRecords {
    path: PathBuf,
    records: Vec<CourtRecord>,
}

impl FileRecords {
    /// Load a dataset from `path`.
    ///
    /// The file must contain a JSON array of record objects. Read and parse
    /// failures are reported with the offending path; there is no partial
    /// loading.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref().to_path_buf();

        let contents =
            std::fs::read_to_string(&path).map_err(|source| ProviderError::DatasetRead {
                path: path.clone(),
                source,
            })?;

        let records: Vec<CourtRecord> =
            serde_json::from_str(&contents).map_err(|e| ProviderError::DatasetParse {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        info!(count = records.len(), path = %path.display(), "loaded records dataset");
        Ok(Self { path, records })
    }

    /// Path the dataset was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records in the dataset (before any filtering).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset contains no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordsProvider for FileRecords {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ProviderError> {
        Ok(search_slice(&self.records, request))
    }
}
