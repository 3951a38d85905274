//! Configuration options for extraction and indexing.
//!
//! The `Options` struct controls extraction behavior, `IndexOptions` the
//! corpus vectorizer. Use `Default::default()` for standard settings.

use std::time::Duration;

/// Configuration options for article extraction and crawling.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_harvest::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     platform_host: "medium.com".to_string(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Host of the publishing platform itself. Links resolving to this host
    /// never count as external, regardless of the article's own host.
    ///
    /// Default: `"medium.com"`
    pub platform_host: String,

    /// Maximum number of image locators stored on a record. The image
    /// *count* is taken before this cap is applied.
    ///
    /// Default: `50`
    pub max_stored_images: usize,

    /// Number of top-frequency body terms used when no keywords meta tag is
    /// present.
    ///
    /// Default: `10`
    pub derived_keyword_count: usize,

    /// Minimum word length for derived keywords.
    ///
    /// Default: `4`
    pub min_keyword_len: usize,

    /// Pause between consecutive fetches during a crawl. Not applied after
    /// the last locator.
    ///
    /// Default: 1 second
    pub crawl_delay: Duration,

    /// HTTP request timeout.
    ///
    /// Default: 30 seconds
    pub request_timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            platform_host: "medium.com".to_string(),
            max_stored_images: 50,
            derived_keyword_count: 10,
            min_keyword_len: 4,
            crawl_delay: Duration::from_secs(1),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Configuration for the corpus vectorizer.
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Vocabulary size cap. When the corpus yields more surviving terms,
    /// the highest corpus-frequency terms are retained (ties alphabetical).
    ///
    /// Default: `5000`
    pub max_features: usize,

    /// Minimum number of records a term must occur in to enter the
    /// vocabulary.
    ///
    /// Default: `2`
    pub min_doc_freq: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            max_features: 5000,
            min_doc_freq: 2,
        }
    }
}
