//! The search service context.
//!
//! Owns an immutable corpus-index snapshot behind a lock, swapped whole on
//! rebuild. Handlers receive this context by reference; there is no
//! ambient global state. Reads never block each other once the snapshot
//! `Arc` is cloned out.

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::index::rank::{RankedResult, DEFAULT_TOP_N};
use crate::index::CorpusIndex;
use crate::options::IndexOptions;
use crate::record::Record;

/// Readiness signal for health checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStatus {
    /// Whether an index snapshot is currently in place.
    pub index_built: bool,
    /// Number of records the current snapshot covers.
    pub record_count: usize,
}

/// Service context owning the current corpus-index snapshot.
#[derive(Debug)]
pub struct SearchService {
    options: IndexOptions,
    index: RwLock<Option<Arc<CorpusIndex>>>,
}

impl SearchService {
    /// Creates a service with no index built yet.
    #[must_use]
    pub fn new(options: IndexOptions) -> Self {
        Self {
            options,
            index: RwLock::new(None),
        }
    }

    /// Builds a fresh index from the full record set and swaps it in
    /// whole. The old snapshot stays valid for queries already holding it.
    pub fn rebuild(&self, records: &[Record]) {
        let fresh = Arc::new(CorpusIndex::build(records, &self.options));
        info!(records = fresh.len(), "index snapshot swapped");
        *self
            .index
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(fresh);
    }

    /// Ranks the corpus against a query.
    ///
    /// An absent/empty query is an input fault; querying before the first
    /// build is a state fault. No qualifying candidate is an empty list,
    /// not an error.
    pub fn search(&self, query: &str, top_n: Option<usize>) -> Result<Vec<RankedResult>> {
        if query.trim().is_empty() {
            return Err(Error::InvalidQuery(
                "query parameter is required".to_string(),
            ));
        }

        let snapshot = self.snapshot().ok_or(Error::IndexNotReady)?;
        Ok(snapshot.rank(query, top_n.unwrap_or(DEFAULT_TOP_N)))
    }

    /// Current readiness signal.
    #[must_use]
    pub fn status(&self) -> IndexStatus {
        match self.snapshot() {
            Some(index) => IndexStatus {
                index_built: true,
                record_count: index.len(),
            },
            None => IndexStatus {
                index_built: false,
                record_count: 0,
            },
        }
    }

    fn snapshot(&self) -> Option<Arc<CorpusIndex>> {
        self.index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
