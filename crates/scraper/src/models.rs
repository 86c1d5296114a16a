// ABOUTME: Serde models for scraped records: ranking rows and detail pages.
// ABOUTME: Field defaults double as parse sentinels, matching the source site's quirks.

use serde::{Deserialize, Serialize};

/// Compact per-row summary shown in a ranking row's information blob.
///
/// The blob renders as three lines: `TV (64 eps)`, an airing range, and a
/// member count. Rows whose blob deviates from that shape carry an
/// all-default summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingSummary {
    pub media_type: String,
    pub episode_count: u32,
    pub aired_range: String,
    pub member_count: u64,
}

/// One row of the top-anime ranking table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Rank column value; 0 when the cell does not parse.
    pub rank: u32,
    pub name: String,
    /// Absolute URL of the row's detail page, empty when the row has no link.
    pub url: String,
    /// Weighted score column; -1 when the cell does not parse.
    pub score: f32,
    pub summary: RankingSummary,
}

/// Full record extracted from a title's detail page.
///
/// Records are keyed externally by the page URL. In an extracted record
/// the counter fields hold -1 when their label was absent or unparseable;
/// the score pair and rank fall back to 0 instead, matching the site's own
/// placeholder rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub name: String,
    pub image_url: String,
    pub media_type: String,
    pub episode_count: i64,
    pub status: String,
    pub aired: String,
    pub premiered: String,
    pub broadcast: String,
    pub producers: Vec<String>,
    pub licensors: Vec<String>,
    pub studios: Vec<String>,
    pub source: String,
    pub genres: Vec<String>,
    pub theme: String,
    pub demographic: String,
    pub duration: String,
    pub rating: String,
    pub score: f32,
    pub scored_by_count: i64,
    pub rank: i64,
    pub popularity_rank: i64,
    pub member_count: i64,
    pub favorite_count: i64,
    pub streaming_platforms: Vec<String>,
}
