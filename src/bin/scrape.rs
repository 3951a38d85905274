//! Crawl CLI: harvest article locators into the record store.
//!
//! Locators come from a single `--url`, a `--urls` file (one per line), or
//! one or more `--feed` RSS locations. Records append to the output CSV as
//! they are produced.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use article_harvest::crawler::{load_locators, Crawler};
use article_harvest::feed::harvest_feed;
use article_harvest::{Options, RecordStore};

#[derive(Debug, Parser)]
#[command(name = "scrape", about = "Harvest articles into a CSV record store")]
struct Args {
    /// Single article URL to harvest.
    #[arg(long)]
    url: Option<String>,

    /// Path to a file of article URLs, one per line.
    #[arg(long)]
    urls: Option<PathBuf>,

    /// RSS feed URL to harvest article locators from (repeatable).
    #[arg(long)]
    feed: Vec<String>,

    /// Output CSV file.
    #[arg(long, default_value = "scrapping_results.csv")]
    output: PathBuf,

    /// Delay between requests, in seconds.
    #[arg(long, default_value_t = 1.0)]
    delay: f64,

    /// Process locators in fixed-size chunks with chunk-level progress.
    #[arg(long)]
    batch_size: Option<usize>,

    /// Cap on locators taken from feeds.
    #[arg(long, default_value_t = 1000)]
    max_urls: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(fault = %e, "scrape failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> article_harvest::Result<()> {
    let options = Options {
        crawl_delay: Duration::from_secs_f64(args.delay.max(0.0)),
        ..Options::default()
    };
    let crawler = Crawler::new(options)?;

    let mut locators: Vec<String> = Vec::new();
    if let Some(url) = args.url {
        locators.push(url);
    }
    if let Some(path) = &args.urls {
        locators.extend(load_locators(path)?);
    }
    for feed_url in &args.feed {
        if locators.len() >= args.max_urls {
            break;
        }
        locators.extend(harvest_feed(crawler.fetcher(), feed_url));
    }
    locators.truncate(args.max_urls);

    if locators.is_empty() {
        eprintln!("No URLs provided. Pass --url, --urls or --feed.");
        return Ok(());
    }

    let store = RecordStore::new(args.output);
    match args.batch_size {
        Some(batch_size) => crawler.crawl_batches(&locators, &store, batch_size),
        None => crawler.crawl(&locators, &store),
    }
}
