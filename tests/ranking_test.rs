#![allow(clippy::unwrap_used)]

use article_harvest::{CorpusIndex, IndexOptions, Record, SearchService};

fn record(title: &str, text: &str, claps: u64) -> Record {
    Record {
        url: format!("https://medium.com/{}", title.replace(' ', "-")),
        title: title.to_string(),
        text: text.to_string(),
        claps,
        ..Record::default()
    }
}

fn small_corpus_options() -> IndexOptions {
    IndexOptions {
        min_doc_freq: 1,
        ..IndexOptions::default()
    }
}

#[test]
fn similar_but_unpopular_beats_popular_but_dissimilar() {
    let records = vec![
        record("Intro to Machine Learning", "ml basics", 500),
        record("Cooking pasta", "recipe", 9000),
    ];
    let index = CorpusIndex::build(&records, &small_corpus_options());
    let results = index.rank("machine learning", 10);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Intro to Machine Learning");
    assert_eq!(results[0].claps, 500);
    assert!(results[0].similarity_score > 0.0);
}

#[test]
fn results_are_ordered_by_claps_then_similarity() {
    let records = vec![
        record("rust alpha", "rust rust rust", 100),
        record("rust beta", "rust threads and channels today", 100),
        record("rust gamma", "rust", 700),
        record("rust delta", "rust macros", 300),
    ];
    let index = CorpusIndex::build(&records, &small_corpus_options());
    let results = index.rank("rust", 10);

    assert_eq!(results.len(), 4);
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.claps > b.claps
                || (a.claps == b.claps && a.similarity_score >= b.similarity_score),
            "order violated: {a:?} before {b:?}"
        );
    }
}

#[test]
fn queries_outside_the_vocabulary_return_nothing() {
    let records = vec![
        record("rust alpha", "rust tooling", 10),
        record("rust beta", "rust tooling", 20),
    ];
    let index = CorpusIndex::build(&records, &small_corpus_options());
    assert!(index.rank("quantum chromodynamics", 10).is_empty());
}

#[test]
fn rebuilding_is_idempotent_for_a_fixed_corpus() {
    let records = vec![
        record("rust alpha", "ownership and borrowing in rust", 50),
        record("rust beta", "borrowing lifetimes in rust", 90),
        record("python gamma", "generators and iterators", 40),
    ];
    let first = CorpusIndex::build(&records, &small_corpus_options()).rank("rust borrowing", 10);
    let second = CorpusIndex::build(&records, &small_corpus_options()).rank("rust borrowing", 10);
    assert_eq!(first, second);
}

#[test]
fn empty_record_set_returns_empty_without_fault() {
    let service = SearchService::new(small_corpus_options());
    service.rebuild(&[]);
    let results = service.search("any query", None).unwrap();
    assert!(results.is_empty());
}

#[test]
fn service_status_reflects_build_state() {
    let service = SearchService::new(small_corpus_options());
    let before = service.status();
    assert!(!before.index_built);
    assert_eq!(before.record_count, 0);

    service.rebuild(&[record("rust", "rust", 1)]);
    let after = service.status();
    assert!(after.index_built);
    assert_eq!(after.record_count, 1);
}

#[test]
fn default_top_n_is_ten() {
    let records: Vec<Record> = (0..15)
        .map(|i| record(&format!("rust post {i}"), "rust", i))
        .collect();
    let service = SearchService::new(small_corpus_options());
    service.rebuild(&records);
    let results = service.search("rust", None).unwrap();
    assert_eq!(results.len(), 10);
}

#[test]
fn caller_top_n_has_no_enforced_upper_bound() {
    let records = vec![record("rust", "rust", 1), record("rust two", "rust", 2)];
    let service = SearchService::new(small_corpus_options());
    service.rebuild(&records);
    let results = service.search("rust", Some(1000)).unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn keywords_contribute_to_similarity() {
    let records = vec![Record {
        url: "https://medium.com/tagged".into(),
        title: "Untitled".into(),
        keywords: "kubernetes, orchestration".into(),
        claps: 5,
        ..Record::default()
    }];
    let index = CorpusIndex::build(&records, &small_corpus_options());
    let results = index.rank("kubernetes", 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "https://medium.com/tagged");
}
