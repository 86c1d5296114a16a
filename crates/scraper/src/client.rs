// ABOUTME: The main Client struct that fetches ranking and detail pages over HTTP.
// ABOUTME: Provides async ranking_page(), detail_page(), and crawl_page() to build a Dataset.

use std::collections::BTreeMap;

use chrono::Utc;
use futures::stream::{self, StreamExt};

use crate::error::ScrapeError;
use crate::extract::detail::{parse_detail_page, DetailPage};
use crate::extract::ranking::{parse_ranking_page, RankingPage};
use crate::fetch::fetch_text;
use crate::options::{ClientBuilder, Options};
use crate::store::Dataset;

/// Ranking rows shown per page; the page index maps onto a row offset.
const PAGE_SIZE: u32 = 50;

/// One crawled ranking page with its detail records, plus every per-field
/// diagnostic gathered along the way (each prefixed with its page URL).
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub dataset: Dataset,
    pub diagnostics: Vec<String>,
}

/// The scrape client: a configured HTTP client plus the page operations.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// URL of the ranking page at `page`. Each page advances the row
    /// offset by the page size, so page 0 covers ranks 1-50.
    pub fn ranking_url(&self, page: u32) -> String {
        format!(
            "{}/topanime.php?limit={}",
            self.opts.base_url.trim_end_matches('/'),
            page * PAGE_SIZE
        )
    }

    /// Fetches and parses one ranking page.
    pub async fn ranking_page(&self, page: u32) -> Result<RankingPage, ScrapeError> {
        let url = self.ranking_url(page);
        let html = fetch_text(&self.http_client, &url).await?;
        Ok(parse_ranking_page(&html))
    }

    /// Fetches and parses one title detail page.
    pub async fn detail_page(&self, url: &str) -> Result<DetailPage, ScrapeError> {
        let html = fetch_text(&self.http_client, url).await?;
        Ok(parse_detail_page(&html))
    }

    /// Crawls one ranking page end to end: the ranking rows plus a detail
    /// record per row URL, fetched with bounded concurrency and collected
    /// into a URL-keyed dataset.
    ///
    /// A failed fetch (transport, bad status) aborts the crawl; parse-level
    /// trouble only adds diagnostics. Rows without a detail link are
    /// skipped with a diagnostic rather than fetched.
    pub async fn crawl_page(&self, page: u32) -> Result<CrawlOutcome, ScrapeError> {
        let ranking_url = self.ranking_url(page);
        let ranking = {
            let html = fetch_text(&self.http_client, &ranking_url).await?;
            parse_ranking_page(&html)
        };

        let mut diagnostics: Vec<String> = ranking
            .diagnostics
            .iter()
            .map(|diagnostic| format!("{ranking_url}: {diagnostic}"))
            .collect();

        let mut urls = Vec::new();
        for entry in &ranking.entries {
            if entry.url.is_empty() {
                diagnostics.push(format!(
                    "{ranking_url}: entry {:?} has no detail url",
                    entry.name
                ));
                continue;
            }
            urls.push(entry.url.clone());
        }

        let fetched: Vec<(String, Result<DetailPage, ScrapeError>)> = stream::iter(urls)
            .map(|url| async move {
                let page = self.detail_page(&url).await;
                (url, page)
            })
            .buffer_unordered(self.opts.concurrency.max(1))
            .collect()
            .await;

        let mut details = BTreeMap::new();
        for (url, result) in fetched {
            let page = result?;
            diagnostics.extend(
                page.diagnostics
                    .into_iter()
                    .map(|diagnostic| format!("{url}: {diagnostic}")),
            );
            details.insert(url, page.record);
        }

        Ok(CrawlOutcome {
            dataset: Dataset {
                rankings: ranking.entries,
                details,
                scraped_at: Utc::now(),
            },
            diagnostics,
        })
    }
}
