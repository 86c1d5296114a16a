// ABOUTME: Labeled-block extraction for detail-page sidebars.
// ABOUTME: Finds "Label:" blocks and pulls scalar, list, and integer values with site-specific cleanup.

//! Labeled-field extraction over a detail page's sidebar blocks.
//!
//! A detail page lists its facts as label-prefixed text blocks
//! (`div.leftside > div.spaceit_pad`), e.g. `Episodes: 64` or
//! `Genres: <a title="Action">Action</a>, ...`. This module snapshots those
//! blocks into owned [`InfoBlock`] values and resolves fields by label
//! rather than by position, so layout reshuffles only break the fields they
//! actually touch.
//!
//! Key behaviors:
//! - Lookup scans for the first block whose text contains `label + ":"`;
//!   a missing label yields the field's default, never an error.
//! - A block's embedded `a[title]` display titles take precedence over its
//!   plain text (several fields render their values as links).
//! - The score and vote count live in whichever block carries the
//!   `span[itemprop=ratingValue]` marker and are resolved by that marker.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::extract::field::Field;
use crate::text::{remove_and_trim, split_and_trim, strip_trailing_digit};

static BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.leftside > div.spaceit_pad").expect("valid selector"));
static LINK_TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[title]").expect("valid selector"));
static RATING_VALUE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span[itemprop='ratingValue']").expect("valid selector"));
static RATING_COUNT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span[itemprop='ratingCount']").expect("valid selector"));

/// Owned snapshot of one sidebar block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoBlock {
    /// Raw text content as rendered, newlines preserved.
    pub text: String,
    /// Display titles of embedded `a[title]` links, in document order.
    pub link_titles: Vec<String>,
    /// Text of a `span[itemprop=ratingValue]` child, when present.
    pub rating_value: Option<String>,
    /// Text of a `span[itemprop=ratingCount]` child, when present.
    pub rating_count: Option<String>,
}

impl InfoBlock {
    fn from_element(element: ElementRef<'_>) -> Self {
        Self {
            text: element.text().collect::<String>(),
            link_titles: element
                .select(&LINK_TITLE_SELECTOR)
                .filter_map(|link| link.value().attr("title"))
                .map(str::to_string)
                .collect(),
            rating_value: child_text(element, &RATING_VALUE_SELECTOR),
            rating_count: child_text(element, &RATING_COUNT_SELECTOR),
        }
    }

    /// First non-empty link title, the preferred rendering for scalars.
    fn first_link_title(&self) -> Option<&str> {
        self.link_titles
            .first()
            .map(String::as_str)
            .filter(|title| !title.is_empty())
    }
}

fn child_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|matched| matched.text().collect::<String>())
}

/// The sidebar blocks of one detail page, held in reverse document order.
///
/// Lookup scans in that order, so when a label occurs twice the later
/// block on the page wins.
#[derive(Debug, Clone, Default)]
pub struct InfoBlocks {
    blocks: Vec<InfoBlock>,
}

impl InfoBlocks {
    /// Collects the sidebar blocks from a parsed detail page.
    pub fn from_document(document: &Html) -> Self {
        let mut blocks: Vec<InfoBlock> = document
            .select(&BLOCK_SELECTOR)
            .map(InfoBlock::from_element)
            .collect();
        blocks.reverse();
        Self { blocks }
    }

    /// Builds a sequence directly, already in lookup order.
    pub fn from_blocks(blocks: Vec<InfoBlock>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn find(&self, label: &str) -> Option<&InfoBlock> {
        let needle = format!("{label}:");
        self.blocks.iter().find(|block| block.text.contains(&needle))
    }

    /// Extracts a plain-text field.
    ///
    /// The matched block's first link title wins when present; otherwise
    /// the block text minus the label prefix and newlines, trimmed. A
    /// missing label yields an empty string.
    pub fn scalar(&self, label: &str) -> String {
        self.scalar_with(label, &[])
    }

    /// Like [`scalar`](Self::scalar) with extra substrings removed from
    /// the text fallback. The rank field strips its `#` prefix this way.
    pub fn scalar_with(&self, label: &str, extra_removals: &[&str]) -> String {
        match self.find(label) {
            Some(block) => block_scalar(block, label, extra_removals),
            None => String::new(),
        }
    }

    /// Extracts a list field such as `Genres` or `Studios`.
    ///
    /// Link display titles win wholesale when the block has any; otherwise
    /// the scalar cleanup result is split on commas, keeping empty pieces.
    /// A missing label yields an empty vector.
    pub fn list(&self, label: &str) -> Vec<String> {
        let Some(block) = self.find(label) else {
            return Vec::new();
        };
        if !block.link_titles.is_empty() {
            return block.link_titles.clone();
        }
        split_and_trim(&block_scalar(block, label, &[]), ",")
    }

    /// Extracts an integer field such as `Members: 1,234,567` or
    /// `Popularity: #42`.
    ///
    /// Returns -1 when the label is absent (a clean default) or when the
    /// cleaned text does not parse (with a diagnostic).
    pub fn integer(&self, label: &str) -> Field<i64> {
        let Some(block) = self.find(label) else {
            return Field::ok(-1);
        };
        let prefix = format!("{label}:");
        let cleaned = remove_and_trim(&block.text, &[prefix.as_str(), ",", "#", "\n"]);
        match cleaned.parse::<i64>() {
            Ok(value) => Field::ok(value),
            Err(_) => Field::fallback(-1, format!("{label}: invalid integer {cleaned:?}")),
        }
    }

    /// Extracts the weighted score and its vote count from the rating
    /// block, located by its `itemprop` markers.
    ///
    /// Either half degrades to 0 with a diagnostic when the marker text is
    /// missing or unparseable.
    pub fn score(&self) -> (Field<f32>, Field<i64>) {
        let Some(block) = self.blocks.iter().find(|block| block.rating_value.is_some()) else {
            return (
                Field::fallback(0.0, "score: rating block not found"),
                Field::fallback(0, "scored-by: rating block not found"),
            );
        };

        let raw_score = block.rating_value.as_deref().unwrap_or("").trim();
        let score = match raw_score.parse::<f32>() {
            Ok(value) => Field::ok(value),
            Err(_) => Field::fallback(0.0, format!("score: invalid number {raw_score:?}")),
        };

        let raw_count = block.rating_count.as_deref().unwrap_or("").trim();
        let scored_by = match raw_count.parse::<i64>() {
            Ok(value) => Field::ok(value),
            Err(_) => Field::fallback(0, format!("scored-by: invalid integer {raw_count:?}")),
        };

        (score, scored_by)
    }

    /// Extracts the overall rank from the `Ranked` block.
    ///
    /// The source markup fuses a superscript footnote onto the number, so
    /// the text is split on the literal `" 2 "` marker and the surviving
    /// number has its last digit stripped.
    pub fn ranked(&self) -> Field<i64> {
        let raw = self.scalar_with("Ranked", &["#"]);
        let first = raw.split(" 2 ").next().unwrap_or("").trim();
        match first.parse::<i64>() {
            Ok(value) => Field::ok(strip_trailing_digit(value)),
            Err(_) => Field::fallback(0, format!("ranked: invalid rank text {first:?}")),
        }
    }
}

fn block_scalar(block: &InfoBlock, label: &str, extra_removals: &[&str]) -> String {
    if let Some(title) = block.first_link_title() {
        return title.to_string();
    }
    let prefix = format!("{label}:");
    let mut removals: Vec<&str> = extra_removals.to_vec();
    removals.push(prefix.as_str());
    removals.push("\n");
    remove_and_trim(&block.text, &removals)
}
