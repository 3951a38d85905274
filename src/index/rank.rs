//! The ranking engine.
//!
//! Vectorizes a free-text query against the corpus index's fixed
//! vocabulary, scores every record by cosine similarity, and orders the
//! strictly-positive candidates by popularity first, similarity second.

use serde::Serialize;

use super::{cosine, CorpusIndex};

/// Default result-list length when the caller supplies none.
pub const DEFAULT_TOP_N: usize = 10;

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    /// Article locator.
    pub url: String,
    /// Article title.
    pub title: String,
    /// Popularity signal, the primary ranking key.
    pub claps: u64,
    /// Cosine similarity against the query, the tie-break key.
    pub similarity_score: f64,
}

impl CorpusIndex {
    /// Ranks the corpus against a free-text query.
    ///
    /// Records with similarity <= 0 never qualify; survivors sort by claps
    /// descending, similarity descending, and the first `top_n` are
    /// returned. An empty list is a valid outcome, not a fault.
    #[must_use]
    pub fn rank(&self, query: &str, top_n: usize) -> Vec<RankedResult> {
        let query_vector = self.vectorize(query);
        if query_vector.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<RankedResult> = self
            .rows()
            .iter()
            .zip(self.docs())
            .filter_map(|(row, doc)| {
                let similarity = cosine(&query_vector, row);
                (similarity > 0.0).then(|| RankedResult {
                    url: doc.url.clone(),
                    title: doc.title.clone(),
                    claps: doc.claps,
                    similarity_score: similarity,
                })
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.claps
                .cmp(&a.claps)
                .then_with(|| b.similarity_score.total_cmp(&a.similarity_score))
        });
        candidates.truncate(top_n);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::IndexOptions;
    use crate::record::Record;

    fn record(title: &str, text: &str, claps: u64) -> Record {
        Record {
            url: format!("https://example.com/{}", title.replace(' ', "-")),
            title: title.to_string(),
            text: text.to_string(),
            claps,
            ..Record::default()
        }
    }

    fn index(records: &[Record]) -> CorpusIndex {
        // min_doc_freq 1 keeps small fixtures from pruning everything.
        CorpusIndex::build(
            records,
            &IndexOptions {
                min_doc_freq: 1,
                ..IndexOptions::default()
            },
        )
    }

    #[test]
    fn zero_similarity_never_qualifies_despite_popularity() {
        let records = vec![
            record("Intro to Machine Learning", "ml basics", 500),
            record("Cooking pasta", "recipe", 9000),
        ];
        let results = index(&records).rank("machine learning", DEFAULT_TOP_N);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Intro to Machine Learning");
    }

    #[test]
    fn popularity_outranks_similarity() {
        let records = vec![
            record("rust deep dive", "rust rust rust rust", 10),
            record("rust mention", "rust and cooking pasta recipes today", 9000),
        ];
        let results = index(&records).rank("rust", DEFAULT_TOP_N);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].claps, 9000);
        assert!(results[0].similarity_score <= results[1].similarity_score);
    }

    #[test]
    fn unknown_query_terms_yield_empty_list() {
        let records = vec![record("rust", "rust", 1)];
        assert!(index(&records).rank("quantum entanglement", 5).is_empty());
    }

    #[test]
    fn top_n_truncates_after_ordering() {
        let records = vec![
            record("rust one", "rust", 100),
            record("rust two", "rust", 300),
            record("rust three", "rust", 200),
        ];
        let results = index(&records).rank("rust", 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].claps, 300);
        assert_eq!(results[1].claps, 200);
    }
}
