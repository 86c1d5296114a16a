// ABOUTME: CLI binary for the anitop ranking scraper.
// ABOUTME: Crawls one ranking page (optionally with per-title details) and writes the dataset as JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anitop_scraper::{Client, CrawlOutcome, Dataset};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "anitop")]
#[command(about = "Scrape an anime ranking page into a JSON dataset")]
struct Args {
    /// Zero-based ranking page to scrape (each page covers 50 ranks)
    page: u32,

    /// Output file path (default: animes_<page>.json)
    #[arg(short = 'o', long = "out")]
    out: Option<PathBuf>,

    /// Site root to crawl (useful for mirrors and tests)
    #[arg(long = "base-url")]
    base_url: Option<String>,

    /// Maximum detail pages fetched in parallel
    #[arg(long = "concurrency", default_value_t = 4)]
    concurrency: usize,

    /// Only collect ranking rows, skip per-title detail pages
    #[arg(long = "skip-details")]
    skip_details: bool,

    /// Pretty-print the JSON output
    #[arg(long = "pretty")]
    pretty: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// List every field diagnostic on stderr instead of a count
    #[arg(long = "verbose")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut builder = Client::builder().concurrency(args.concurrency);
    if let Some(base_url) = &args.base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build();

    let start = Instant::now();

    let outcome = if args.skip_details {
        let ranking_url = client.ranking_url(args.page);
        match client.ranking_page(args.page).await {
            Ok(page) => CrawlOutcome {
                dataset: Dataset {
                    rankings: page.entries,
                    ..Dataset::default()
                },
                diagnostics: page
                    .diagnostics
                    .into_iter()
                    .map(|diagnostic| format!("{ranking_url}: {diagnostic}"))
                    .collect(),
            },
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::from(1);
            }
        }
    } else {
        match client.crawl_page(args.page).await {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::from(1);
            }
        }
    };

    let elapsed = start.elapsed();

    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("animes_{}.json", args.page)));

    let write_result = if args.pretty {
        serde_json::to_string_pretty(&outcome.dataset)
            .map_err(anyhow::Error::new)
            .and_then(|json| fs::write(&out_path, json).map_err(anyhow::Error::new))
    } else {
        outcome.dataset.save(&out_path).map_err(anyhow::Error::new)
    };
    if let Err(e) = write_result {
        eprintln!("error writing to {:?}: {}", out_path, e);
        return ExitCode::from(1);
    }

    eprintln!(
        "scraped page {}: {} ranking entries, {} detail records -> {}",
        args.page,
        outcome.dataset.rankings.len(),
        outcome.dataset.details.len(),
        out_path.display()
    );

    if !outcome.diagnostics.is_empty() {
        if args.verbose {
            for diagnostic in &outcome.diagnostics {
                eprintln!("diagnostic: {}", diagnostic);
            }
        } else {
            eprintln!(
                "{} field diagnostic(s); re-run with --verbose to list them",
                outcome.diagnostics.len()
            );
        }
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    ExitCode::SUCCESS
}
