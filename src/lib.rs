//! # article-harvest
//!
//! Harvests semi-structured web articles into normalized records and serves
//! keyword-based similarity search ranked by popularity.
//!
//! Two subsystems make up the core: the extraction pipeline, which turns
//! arbitrary article markup into a [`Record`] through a cascade of fallback
//! heuristics, and the corpus index, which vectorizes the record set with
//! tf-idf weighting and ranks candidates against free-text queries by
//! popularity first, similarity second.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_harvest::extract_record;
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><p>Main content here.</p></article></body></html>"#;
//!
//! let record = extract_record(html, "https://medium.com/@me/my-article");
//! assert_eq!(record.title, "My Article");
//! assert_eq!(record.text, "Main content here.");
//! ```
//!
//! ## Searching
//!
//! ```rust
//! use article_harvest::{IndexOptions, Record, SearchService};
//!
//! let records = vec![Record {
//!     url: "https://medium.com/a".into(),
//!     title: "Intro to Rust".into(),
//!     text: "ownership and borrowing".into(),
//!     claps: 120,
//!     ..Record::default()
//! }];
//!
//! let service = SearchService::new(IndexOptions { min_doc_freq: 1, ..IndexOptions::default() });
//! service.rebuild(&records);
//! let results = service.search("rust ownership", None)?;
//! assert_eq!(results[0].claps, 120);
//! # Ok::<(), article_harvest::Error>(())
//! ```

mod error;
mod options;
mod patterns;
mod record;

/// Crawl orchestration: paced sequential fetching with incremental
/// persistence.
pub mod crawler;

/// The field extraction cascade (structured data, content container,
/// media, engagement signals).
pub mod extractor;

/// Syndication feed harvesting.
pub mod feed;

/// Blocking HTTP fetching with charset transcoding.
pub mod fetch;

/// Corpus index and ranking engine.
pub mod index;

/// The search service context owning the index snapshot.
pub mod service;

/// Append-only CSV record persistence.
pub mod store;

// Public API - re-exports
pub use error::{Error, Result};
pub use index::rank::RankedResult;
pub use index::CorpusIndex;
pub use options::{IndexOptions, Options};
pub use record::{Fault, Record};
pub use service::{IndexStatus, SearchService};
pub use store::RecordStore;

/// Extracts a normalized record from one article's markup using default
/// options.
///
/// Never fails: fields whose heuristics all miss stay at their defaults.
/// `url` becomes the record identity and the base for resolving relative
/// locators.
#[must_use]
pub fn extract_record(html: &str, url: &str) -> Record {
    extractor::extract(html, url, &Options::default())
}

/// Extracts a normalized record with custom options.
#[must_use]
pub fn extract_record_with_options(html: &str, url: &str, options: &Options) -> Record {
    extractor::extract(html, url, options)
}
