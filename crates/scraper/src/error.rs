// ABOUTME: Error types for scrape orchestration: URL validation, fetch, and store failures.
// ABOUTME: Provides the ScrapeError enum plus convenience constructors and boolean helpers.

use thiserror::Error;

/// Errors surfaced by the fetch orchestrator and the dataset store.
///
/// Extraction itself never produces one of these; parse-level trouble is
/// reported through per-field diagnostics instead (see
/// [`Field`](crate::extract::field::Field)).
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The URL was empty, malformed, or used an unsupported scheme.
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP request failed in transport or the body could not be read.
    #[error("fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// The server answered with a non-200 status.
    #[error("fetch {url}: HTTP status {status}")]
    Status { url: String, status: u16 },

    /// Reading or writing a dataset file failed.
    #[error("store {path}: {source}")]
    Store {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ScrapeError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn fetch(url: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Fetch {
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    pub fn store(path: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Store {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn is_invalid_url(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. })
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }
}
