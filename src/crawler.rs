//! The crawl orchestrator.
//!
//! Drives the field extractor across a list of locators, strictly
//! sequentially, pacing between fetches and appending each record to the
//! store as it is produced. A faulted source yields an error-flagged
//! record and the crawl continues; there are no retries and no parallel
//! fetching (source politeness is deliberate).

use std::io::BufRead;
use std::path::Path;
use std::thread;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::extractor;
use crate::fetch::Fetcher;
use crate::options::Options;
use crate::record::{Fault, Record};
use crate::store::RecordStore;

/// Sequential, paced crawler over article locators.
#[derive(Debug)]
pub struct Crawler {
    fetcher: Fetcher,
    options: Options,
}

impl Crawler {
    /// Builds a crawler (and its HTTP client) from the given options.
    pub fn new(options: Options) -> Result<Self> {
        let fetcher = Fetcher::new(options.request_timeout)?;
        Ok(Self { fetcher, options })
    }

    /// The fetcher backing this crawler, shared with feed harvesting.
    #[must_use]
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Fetches and extracts a single article.
    ///
    /// Fetch/parse faults degrade to a default-valued record annotated
    /// with the fault class; this never fails.
    #[must_use]
    pub fn harvest_one(&self, url: &str) -> Record {
        info!(url, "scraping");
        match self.fetcher.fetch(url) {
            Ok(html) => extractor::extract(&html, url, &self.options),
            Err(Error::Fetch(msg)) => {
                warn!(url, fault = %msg, "fetch failed");
                Record::faulted(url, Fault::Request(msg))
            }
            Err(e) => {
                warn!(url, fault = %e, "extraction failed");
                Record::faulted(url, Fault::Other(e.to_string()))
            }
        }
    }

    /// Processes locators in order, appending each record to the store and
    /// pacing between fetches. No pause follows the last locator.
    pub fn crawl(&self, locators: &[String], store: &RecordStore) -> Result<()> {
        let total = locators.len();
        for (idx, url) in locators.iter().enumerate() {
            info!(position = idx + 1, total, url, "processing");
            let record = self.harvest_one(url);
            store.append(std::slice::from_ref(&record))?;

            if idx + 1 < total {
                thread::sleep(self.options.crawl_delay);
            }
        }
        info!(total, path = %store.path().display(), "crawl complete");
        Ok(())
    }

    /// Partitions locators into fixed-size chunks and crawls them
    /// sequentially, re-using this crawler across chunks.
    pub fn crawl_batches(
        &self,
        locators: &[String],
        store: &RecordStore,
        batch_size: usize,
    ) -> Result<()> {
        let batch_size = batch_size.max(1);
        let total_batches = locators.len().div_ceil(batch_size);

        for (batch_idx, batch) in locators.chunks(batch_size).enumerate() {
            info!(
                batch = batch_idx + 1,
                total_batches,
                size = batch.len(),
                "processing batch"
            );
            self.crawl(batch, store)?;
            info!(
                processed = (batch_idx * batch_size + batch.len()),
                total = locators.len(),
                "batch progress"
            );
        }
        Ok(())
    }
}

/// Loads locators from a text file, one per line, keeping only lines that
/// look like URLs.
pub fn load_locators(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = std::fs::File::open(path.as_ref())?;
    let mut locators = Vec::new();
    for line in std::io::BufReader::new(file).lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.starts_with("http") {
            locators.push(trimmed.to_string());
        }
    }
    info!(
        path = %path.as_ref().display(),
        count = locators.len(),
        "loaded locators"
    );
    Ok(locators)
}
