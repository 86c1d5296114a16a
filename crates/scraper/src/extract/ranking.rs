// ABOUTME: Ranking-table parser producing one RankingEntry per table row.
// ABOUTME: Includes the three-line information blob sub-parser with graceful degradation.

//! Turns one top-list page into ordered [`RankingEntry`] values.
//!
//! Key behaviors:
//! - Rows are independent: a malformed row degrades its own fields while
//!   the rest of the page parses normally.
//! - Cell-level parse failures fall back silently to the documented
//!   sentinels (rank 0, score -1); only a misshapen information blob adds
//!   a row-indexed diagnostic.
//! - A page without the ranking table yields an empty entry list.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::extract::field::Field;
use crate::models::{RankingEntry, RankingSummary};
use crate::text::remove_and_trim;

static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table.top-ranking-table > tbody > tr.ranking-list").expect("valid selector")
});
static RANK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".top-anime-rank-text").expect("valid selector"));
static NAME_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".anime_ranking_h3").expect("valid selector"));
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("valid selector"));
static SCORE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".js-top-ranking-score-col").expect("valid selector"));
static INFORMATION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".information").expect("valid selector"));

/// A fully parsed ranking page: entries in row order plus row-indexed
/// diagnostics for anything that fell back to defaults.
#[derive(Debug, Clone, Default)]
pub struct RankingPage {
    pub entries: Vec<RankingEntry>,
    pub diagnostics: Vec<String>,
}

/// Parses every ranking row out of a top-list page.
pub fn parse_ranking_page(html: &str) -> RankingPage {
    let document = Html::parse_document(html);
    let mut page = RankingPage::default();
    for (index, row) in document.select(&ROW_SELECTOR).enumerate() {
        let (entry, diagnostic) = parse_row(row);
        page.entries.push(entry);
        if let Some(diagnostic) = diagnostic {
            page.diagnostics.push(format!("row {index}: {diagnostic}"));
        }
    }
    page
}

fn parse_row(row: ElementRef<'_>) -> (RankingEntry, Option<String>) {
    let rank = child_text(row, &RANK_SELECTOR).parse::<u32>().unwrap_or(0);
    let name = child_text(row, &NAME_SELECTOR);
    let url = row
        .select(&LINK_SELECTOR)
        .next()
        .and_then(|link| link.value().attr("href"))
        .unwrap_or_default()
        .to_string();
    let score = child_text(row, &SCORE_SELECTOR).parse::<f32>().unwrap_or(-1.0);
    let information = parse_information(&child_text(row, &INFORMATION_SELECTOR));

    let entry = RankingEntry {
        rank,
        name,
        url,
        score,
        summary: information.value,
    };
    (entry, information.diagnostic)
}

/// End-trimmed text of the first selector match within the row.
fn child_text(row: ElementRef<'_>, selector: &Selector) -> String {
    row.select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Parses the compact blob shown under each row:
///
/// ```text
/// TV (64 eps)
/// Apr 2009 - Jul 2010
/// 3,331,144 members
/// ```
///
/// The blob is expected to hold exactly those three lines; anything
/// shorter degrades to an all-default summary with a diagnostic.
fn parse_information(blob: &str) -> Field<RankingSummary> {
    let lines: Vec<&str> = blob.split('\n').collect();
    if lines.len() < 3 {
        return Field::fallback(
            RankingSummary::default(),
            format!("information blob has {} line(s), expected 3", lines.len()),
        );
    }

    let (media_type, episode_count, diagnostic) = parse_type_and_episodes(lines[0]);
    let summary = RankingSummary {
        media_type,
        episode_count,
        aired_range: lines[1].trim().to_string(),
        member_count: parse_member_count(lines[2]),
    };
    match diagnostic {
        Some(diagnostic) => Field::fallback(summary, diagnostic),
        None => Field::ok(summary),
    }
}

/// Splits `TV (64 eps)` into the media type and episode count.
///
/// The count keeps the site's own placeholder semantics: an unparseable
/// number silently becomes 0, but a line with no `(` at all is a layout
/// change worth reporting.
fn parse_type_and_episodes(line: &str) -> (String, u32, Option<String>) {
    let Some((media_type, rest)) = line.split_once('(') else {
        let trimmed = line.trim();
        return (
            trimmed.to_string(),
            0,
            Some(format!("no episode marker in {trimmed:?}")),
        );
    };
    let episode_count = remove_and_trim(rest, &["eps)"]).parse().unwrap_or(0);
    (media_type.trim().to_string(), episode_count, None)
}

/// Parses `3,331,144 members` into a count, 0 when unparseable.
fn parse_member_count(line: &str) -> u64 {
    let without_suffix = line.replacen(" members", "", 1);
    remove_and_trim(&without_suffix, &[","]).parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SINGLE_ROW: &str = r#"
        <html><body>
        <table class="top-ranking-table">
            <tbody>
                <tr class="ranking-list">
                    <td class="rank ac"><span class="top-anime-rank-text rank1">1</span></td>
                    <td class="title al di-t">
                        <a class="hoverinfo_trigger" href="https://example.net/anime/5114"><img src="t.jpg"></a>
                        <div class="detail">
                            <h3 class="anime_ranking_h3"><a href="https://example.net/anime/5114">Fullmetal Alchemist: Brotherhood</a></h3>
                            <div class="information di-ib mt4">
                                TV (64 eps)<br>
                                Apr 2009 - Jul 2010<br>
                                3,331,144 members
                            </div>
                        </div>
                    </td>
                    <td class="score ac"><span class="text on"><span class="js-top-ranking-score-col di-ib">9.10</span></span></td>
                </tr>
            </tbody>
        </table>
        </body></html>"#;

    #[test]
    fn test_single_row_parses_every_field() {
        let page = parse_ranking_page(SINGLE_ROW);
        assert_eq!(page.entries.len(), 1);
        assert!(page.diagnostics.is_empty());
        assert_eq!(
            page.entries[0],
            RankingEntry {
                rank: 1,
                name: "Fullmetal Alchemist: Brotherhood".to_string(),
                url: "https://example.net/anime/5114".to_string(),
                score: 9.1,
                summary: RankingSummary {
                    media_type: "TV".to_string(),
                    episode_count: 64,
                    aired_range: "Apr 2009 - Jul 2010".to_string(),
                    member_count: 3_331_144,
                },
            }
        );
    }

    #[test]
    fn test_page_without_table_yields_no_entries() {
        let page = parse_ranking_page("<html><body><p>maintenance</p></body></html>");
        assert!(page.entries.is_empty());
        assert!(page.diagnostics.is_empty());
    }

    #[test]
    fn test_unparseable_rank_and_score_fall_back_silently() {
        let html = r#"
            <table class="top-ranking-table"><tbody>
                <tr class="ranking-list">
                    <td><span class="top-anime-rank-text">N/A</span></td>
                    <td>
                        <h3 class="anime_ranking_h3"><a href="/anime/1">Oddball</a></h3>
                        <div class="information">
                            ONA (12 eps)<br>
                            Jan 2020 - Mar 2020<br>
                            10,000 members
                        </div>
                    </td>
                    <td><span class="js-top-ranking-score-col">N/A</span></td>
                </tr>
            </tbody></table>"#;
        let page = parse_ranking_page(html);
        assert_eq!(page.entries.len(), 1);
        assert!(page.diagnostics.is_empty());
        assert_eq!(page.entries[0].rank, 0);
        assert_eq!(page.entries[0].score, -1.0);
        assert_eq!(page.entries[0].summary.episode_count, 12);
    }

    #[test]
    fn test_two_line_blob_degrades_with_diagnostic() {
        let html = r#"
            <table class="top-ranking-table"><tbody>
                <tr class="ranking-list">
                    <td><span class="top-anime-rank-text">7</span></td>
                    <td>
                        <h3 class="anime_ranking_h3"><a href="/anime/2">Short Blob</a></h3>
                        <div class="information">
                            TV (24 eps)<br>
                            Apr 2013 - Sep 2013
                        </div>
                    </td>
                    <td><span class="js-top-ranking-score-col">8.00</span></td>
                </tr>
            </tbody></table>"#;
        let page = parse_ranking_page(html);
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].rank, 7);
        assert_eq!(page.entries[0].summary, RankingSummary::default());
        assert_eq!(
            page.diagnostics,
            vec!["row 0: information blob has 2 line(s), expected 3"]
        );
    }

    #[test]
    fn test_missing_information_blob_degrades_with_diagnostic() {
        let html = r#"
            <table class="top-ranking-table"><tbody>
                <tr class="ranking-list">
                    <td><span class="top-anime-rank-text">9</span></td>
                    <td><h3 class="anime_ranking_h3"><a href="/anime/3">No Blob</a></h3></td>
                    <td><span class="js-top-ranking-score-col">7.77</span></td>
                </tr>
            </tbody></table>"#;
        let page = parse_ranking_page(html);
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].summary, RankingSummary::default());
        assert_eq!(
            page.diagnostics,
            vec!["row 0: information blob has 1 line(s), expected 3"]
        );
    }

    #[test]
    fn test_malformed_row_leaves_other_rows_intact() {
        let html = r#"
            <table class="top-ranking-table"><tbody>
                <tr class="ranking-list">
                    <td><span class="top-anime-rank-text">1</span></td>
                    <td>
                        <h3 class="anime_ranking_h3"><a href="/anime/10">Fine Row</a></h3>
                        <div class="information">
                            TV (12 eps)<br>
                            Jan 2024 - Mar 2024<br>
                            500,000 members
                        </div>
                    </td>
                    <td><span class="js-top-ranking-score-col">8.11</span></td>
                </tr>
                <tr class="ranking-list">
                    <td><span class="top-anime-rank-text">2</span></td>
                    <td><h3 class="anime_ranking_h3"><a href="/anime/11">Broken Row</a></h3></td>
                    <td><span class="js-top-ranking-score-col">8.02</span></td>
                </tr>
            </tbody></table>"#;
        let page = parse_ranking_page(html);
        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.entries[0].summary.member_count, 500_000);
        assert_eq!(page.entries[1].name, "Broken Row");
        assert_eq!(page.entries[1].summary, RankingSummary::default());
        assert_eq!(page.diagnostics.len(), 1);
        assert!(page.diagnostics[0].starts_with("row 1:"));
    }

    #[test]
    fn test_parse_information_scenario() {
        let blob = "TV (24 eps)\nApr 2013 - Sep 2013\n1,234,567 members";
        let field = parse_information(blob);
        assert!(field.is_clean());
        assert_eq!(
            field.value,
            RankingSummary {
                media_type: "TV".to_string(),
                episode_count: 24,
                aired_range: "Apr 2013 - Sep 2013".to_string(),
                member_count: 1_234_567,
            }
        );
    }

    #[test]
    fn test_parse_information_without_episode_marker() {
        let field = parse_information("Music\nMar 2015 - Mar 2015\n5,000 members");
        assert_eq!(field.value.media_type, "Music");
        assert_eq!(field.value.episode_count, 0);
        assert_eq!(field.value.member_count, 5_000);
        assert_eq!(
            field.diagnostic.as_deref(),
            Some("no episode marker in \"Music\"")
        );
    }

    #[test]
    fn test_parse_information_bad_member_count_is_zero() {
        let field = parse_information("TV (12 eps)\nJan 2021 - Mar 2021\nunknown members");
        assert!(field.is_clean());
        assert_eq!(field.value.member_count, 0);
    }

    #[test]
    fn test_row_url_is_kept_verbatim() {
        // Relative links stay relative; the crawler decides what to do
        // with them.
        let html = r#"
            <table class="top-ranking-table"><tbody>
                <tr class="ranking-list">
                    <td><span class="top-anime-rank-text">1</span></td>
                    <td>
                        <h3 class="anime_ranking_h3"><a href="/anime/44">Relative</a></h3>
                        <div class="information">
                            TV (1 eps)<br>
                            Jan 2020 - Jan 2020<br>
                            1 members
                        </div>
                    </td>
                    <td><span class="js-top-ranking-score-col">6.00</span></td>
                </tr>
            </tbody></table>"#;
        let page = parse_ranking_page(html);
        assert_eq!(page.entries[0].url, "/anime/44");
    }
}
