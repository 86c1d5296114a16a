// ABOUTME: Main library entry point for the anitop ranking scraper.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Dataset, ScrapeError, models, and page parsers.

//! anitop - a scraper that turns an anime ranking site into structured records.
//!
//! This crate fetches top-list pages and per-title detail pages, extracts
//! [`RankingEntry`] and [`DetailRecord`] values from them, and aggregates
//! everything into a JSON-serializable [`Dataset`]. The extraction core is
//! pure (HTML text in, records plus diagnostics out); [`Client`] adds the
//! fetching and concurrent fan-out around it.
//!
//! # Example
//!
//! ```no_run
//! use anitop_scraper::{Client, ScrapeError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build();
//!     let outcome = client.crawl_page(0).await?;
//!     outcome.dataset.save("animes_0.json")?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod options;
pub mod store;
pub mod text;

pub use crate::client::{Client, CrawlOutcome};
pub use crate::error::ScrapeError;
pub use crate::extract::blocks::{InfoBlock, InfoBlocks};
pub use crate::extract::detail::{parse_detail_page, DetailPage};
pub use crate::extract::field::Field;
pub use crate::extract::ranking::{parse_ranking_page, RankingPage};
pub use crate::models::{DetailRecord, RankingEntry, RankingSummary};
pub use crate::options::{ClientBuilder, Options, DEFAULT_BASE_URL};
pub use crate::store::Dataset;
