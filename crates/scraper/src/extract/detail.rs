// ABOUTME: Detail-page record builder, one extractor call per known field label.
// ABOUTME: Collects per-field diagnostics instead of failing the record.

//! Turns one detail page's HTML into a [`DetailRecord`].
//!
//! Key behaviors:
//! - Every field has a defined default, so a page with none of the
//!   expected structure produces an all-default record plus diagnostics,
//!   never an error.
//! - Labeled sidebar fields go through [`InfoBlocks`]; the title, cover
//!   image, and streaming platforms come from their own selectors.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::extract::blocks::InfoBlocks;
use crate::models::DetailRecord;

static NAME_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".title-name.h1_bold_none").expect("valid selector"));
static IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img[itemprop]").expect("valid selector"));
static PLATFORM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.broadcast").expect("valid selector"));

/// A fully extracted detail page: the record plus everything that did not
/// parse cleanly along the way.
#[derive(Debug, Clone, Default)]
pub struct DetailPage {
    pub record: DetailRecord,
    pub diagnostics: Vec<String>,
}

/// Extracts a [`DetailRecord`] from a detail page's HTML.
pub fn parse_detail_page(html: &str) -> DetailPage {
    let document = Html::parse_document(html);
    let blocks = InfoBlocks::from_document(&document);

    let mut diagnostics = Vec::new();
    let (score, scored_by) = blocks.score();
    let record = DetailRecord {
        name: first_text(&document, &NAME_SELECTOR),
        image_url: image_url(&document),
        media_type: blocks.scalar("Type"),
        episode_count: blocks.integer("Episodes").collect_into(&mut diagnostics),
        status: blocks.scalar("Status"),
        aired: blocks.scalar("Aired"),
        premiered: blocks.scalar("Premiered"),
        broadcast: blocks.scalar("Broadcast"),
        producers: blocks.list("Producers"),
        licensors: blocks.list("Licensors"),
        studios: blocks.list("Studios"),
        source: blocks.scalar("Source"),
        genres: blocks.list("Genres"),
        theme: blocks.scalar("Theme"),
        demographic: blocks.scalar("Demographic"),
        duration: blocks.scalar("Duration"),
        rating: blocks.scalar("Rating"),
        score: score.collect_into(&mut diagnostics),
        scored_by_count: scored_by.collect_into(&mut diagnostics),
        rank: blocks.ranked().collect_into(&mut diagnostics),
        popularity_rank: blocks.integer("Popularity").collect_into(&mut diagnostics),
        member_count: blocks.integer("Members").collect_into(&mut diagnostics),
        favorite_count: blocks.integer("Favorites").collect_into(&mut diagnostics),
        streaming_platforms: streaming_platforms(&document),
    };

    DetailPage {
        record,
        diagnostics,
    }
}

/// Trimmed text of the first selector match, empty when absent.
fn first_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Cover image URL, read from the lazy-loading attribute.
fn image_url(document: &Html) -> String {
    document
        .select(&IMAGE_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("data-src"))
        .unwrap_or_default()
        .to_string()
}

fn streaming_platforms(document: &Html) -> Vec<String> {
    document
        .select(&PLATFORM_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}
