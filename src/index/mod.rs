//! The corpus index: a term-weighted vector space over the record set.
//!
//! Built once from the full in-memory record set and immutable for the
//! lifetime of a serving session. Each record's combined text (title,
//! subtitle, body, keywords) is tokenized into unigrams and bigrams; terms
//! seen in too few records are pruned, the vocabulary is capped, and each
//! (record, term) cell is weighted by term frequency scaled by smoothed
//! inverse document frequency, rows L2-normalized.

pub mod rank;
pub mod tokenize;

use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::options::IndexOptions;
use crate::record::Record;

/// Per-record metadata carried alongside the weighted matrix, enough to
/// shape a ranked result without the full record set.
#[derive(Debug, Clone)]
pub(crate) struct DocEntry {
    pub url: String,
    pub title: String,
    pub claps: u64,
}

/// Term-weighted vector space over a record set.
#[derive(Debug)]
pub struct CorpusIndex {
    /// term → column index.
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per column.
    idf: Vec<f64>,
    /// One L2-normalized sparse row per record, columns ascending.
    rows: Vec<Vec<(usize, f64)>>,
    /// Ranked-result metadata per record.
    docs: Vec<DocEntry>,
}

impl CorpusIndex {
    /// Builds the index from the full record set.
    ///
    /// Deterministic for a fixed record set: vocabulary pruning and the
    /// cap tie-break (corpus frequency descending, then alphabetical) do
    /// not depend on iteration order.
    #[must_use]
    pub fn build(records: &[Record], options: &IndexOptions) -> Self {
        let tokenized: Vec<Vec<String>> = records
            .iter()
            .map(|r| tokenize::terms(&r.combined_text()))
            .collect();

        // Document frequency and corpus-wide frequency per term.
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
        for terms in &tokenized {
            let mut seen: HashSet<&str> = HashSet::new();
            for term in terms {
                *corpus_freq.entry(term).or_insert(0) += 1;
                if seen.insert(term) {
                    *doc_freq.entry(term).or_insert(0) += 1;
                }
            }
        }

        // Prune rare terms, then cap the vocabulary by corpus frequency.
        let mut retained: Vec<&str> = doc_freq
            .iter()
            .filter(|(_, &df)| df >= options.min_doc_freq)
            .map(|(&term, _)| term)
            .collect();
        if retained.len() > options.max_features {
            retained.sort_by(|a, b| {
                corpus_freq
                    .get(b)
                    .cmp(&corpus_freq.get(a))
                    .then_with(|| a.cmp(b))
            });
            retained.truncate(options.max_features);
        }
        retained.sort_unstable();

        let vocabulary: HashMap<String, usize> = retained
            .iter()
            .enumerate()
            .map(|(idx, &term)| (term.to_string(), idx))
            .collect();

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1.
        let n = records.len() as f64;
        let mut idf = vec![0.0; retained.len()];
        for (term, &col) in &vocabulary {
            let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
            idf[col] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        }

        let rows: Vec<Vec<(usize, f64)>> = tokenized
            .iter()
            .map(|terms| weigh(terms, &vocabulary, &idf))
            .collect();

        let docs: Vec<DocEntry> = records
            .iter()
            .map(|r| DocEntry {
                url: r.url.clone(),
                title: r.title.clone(),
                claps: r.claps,
            })
            .collect();

        info!(
            records = records.len(),
            vocabulary = vocabulary.len(),
            "corpus index built"
        );

        Self {
            vocabulary,
            idf,
            rows,
            docs,
        }
    }

    /// Number of records covered by the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the index covers no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Vocabulary size after pruning and capping.
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Vectorizes free text against the fixed vocabulary. Terms absent from
    /// the vocabulary contribute nothing; the vocabulary is never re-fit.
    pub(crate) fn vectorize(&self, text: &str) -> Vec<(usize, f64)> {
        weigh(&tokenize::terms(text), &self.vocabulary, &self.idf)
    }

    pub(crate) fn rows(&self) -> &[Vec<(usize, f64)>] {
        &self.rows
    }

    pub(crate) fn docs(&self) -> &[DocEntry] {
        &self.docs
    }
}

/// Builds an L2-normalized sparse tf-idf row from a term stream.
fn weigh(terms: &[String], vocabulary: &HashMap<String, usize>, idf: &[f64]) -> Vec<(usize, f64)> {
    let mut counts: HashMap<usize, f64> = HashMap::new();
    for term in terms {
        if let Some(&col) = vocabulary.get(term) {
            *counts.entry(col).or_insert(0.0) += 1.0;
        }
    }

    let mut row: Vec<(usize, f64)> = counts
        .into_iter()
        .map(|(col, tf)| (col, tf * idf[col]))
        .collect();
    row.sort_unstable_by_key(|&(col, _)| col);

    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in &mut row {
            *w /= norm;
        }
    }
    row
}

/// Cosine similarity of two L2-normalized sparse vectors (dot product over
/// ascending column indexes).
pub(crate) fn cosine(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let mut sum = 0.0;
    let mut i = 0;
    let mut j = 0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}
