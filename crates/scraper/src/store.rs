// ABOUTME: The Dataset envelope plus JSON file persistence for crawl output.
// ABOUTME: Detail records are keyed by page URL in a BTreeMap so serialized output is deterministic.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;
use crate::models::{DetailRecord, RankingEntry};

/// Everything collected from one crawl: ranking rows in page order and
/// detail records keyed by their page URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub rankings: Vec<RankingEntry>,
    pub details: BTreeMap<String, DetailRecord>,
    /// When the crawl ran, recorded at aggregation time.
    pub scraped_at: DateTime<Utc>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            rankings: Vec::new(),
            details: BTreeMap::new(),
            scraped_at: Utc::now(),
        }
    }
}

impl Dataset {
    /// Serializes the dataset to `path` as compact JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ScrapeError> {
        let path = path.as_ref();
        let json = serde_json::to_vec(self)
            .map_err(|source| ScrapeError::store(path.display().to_string(), source))?;
        fs::write(path, json)
            .map_err(|source| ScrapeError::store(path.display().to_string(), source))
    }

    /// Reads a dataset previously written by [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScrapeError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|source| ScrapeError::store(path.display().to_string(), source))?;
        serde_json::from_slice(&bytes)
            .map_err(|source| ScrapeError::store(path.display().to_string(), source))
    }
}
