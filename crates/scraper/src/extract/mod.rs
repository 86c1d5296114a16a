// ABOUTME: Extraction strategies for the two scraped page shapes.
// ABOUTME: Labeled sidebar blocks for detail pages, table rows for ranking pages.

pub mod blocks;
pub mod detail;
pub mod field;
pub mod ranking;
