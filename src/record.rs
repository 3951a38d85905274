//! The normalized article record.
//!
//! `Record` is the shared data contract between the extraction pipeline, the
//! CSV store, and the corpus index. Every field has a total default so that
//! extraction can always produce a record, degrading field by field instead
//! of failing.

use serde::{Deserialize, Deserializer, Serialize};

/// Separator used to join stored image locators in the persisted form.
pub const IMAGE_URL_SEPARATOR: &str = "; ";

/// Fault annotation attached to a record produced from a failed fetch/parse.
///
/// Never persisted; the store drops it on write so callers can distinguish
/// "clean empty" from "faulted empty" only while the record is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Network/transport failure reaching the article.
    Request(String),
    /// Any other failure while producing the record.
    Other(String),
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fault::Request(msg) => write!(f, "Request error: {msg}"),
            Fault::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// One harvested article, normalized.
///
/// Field names mirror the canonical persisted header:
/// `url, title, subtitle, text, num_images, image_urls, num_external_links,
/// author_name, author_url, claps, reading_time, keywords`.
///
/// Records are immutable once produced. The `url` is the identity key; the
/// store itself never deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique article locator.
    pub url: String,

    /// Article title (may be empty).
    #[serde(default)]
    pub title: String,

    /// Article subtitle/deck (may be empty).
    #[serde(default)]
    pub subtitle: String,

    /// Concatenated extracted prose.
    #[serde(default)]
    pub text: String,

    /// Number of qualifying images found, counted *before* the stored-list
    /// cap is applied.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub num_images: u64,

    /// Stored image locators, joined by `"; "`, capped at the configured
    /// maximum. Avatar/icon images are excluded.
    #[serde(default)]
    pub image_urls: String,

    /// Count of links whose host differs from both the article's host and
    /// the platform host. The links themselves are not stored.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub num_external_links: u64,

    /// Author display name (may be empty).
    #[serde(default)]
    pub author_name: String,

    /// Author profile locator (may be empty).
    #[serde(default)]
    pub author_url: String,

    /// Popularity signal (clap/reaction count). 0 when absent or
    /// unparseable.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub claps: u64,

    /// Estimated reading time in minutes. 0 when unknown.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub reading_time: u64,

    /// Comma-joined keywords, either declared metadata or derived
    /// top-frequency body terms.
    #[serde(default)]
    pub keywords: String,

    /// Fault annotation for records produced from a failed fetch/parse.
    /// Dropped on persistence.
    #[serde(skip)]
    pub error: Option<Fault>,
}

impl Record {
    /// Creates a record carrying only its locator, all other fields at
    /// their defaults.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Creates a default-valued record annotated with a fault.
    #[must_use]
    pub fn faulted(url: impl Into<String>, fault: Fault) -> Self {
        Self {
            url: url.into(),
            error: Some(fault),
            ..Self::default()
        }
    }

    /// Stored image locators, in document order.
    pub fn image_locations(&self) -> impl Iterator<Item = &str> {
        self.image_urls
            .split(IMAGE_URL_SEPARATOR)
            .filter(|s| !s.is_empty())
    }

    /// Title, subtitle, body, and keywords space-joined for vectorization.
    #[must_use]
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.subtitle, self.text, self.keywords
        )
    }
}

/// Coerces numeric fields on load: missing, empty, or non-numeric values
/// become 0, float-formatted values truncate.
fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else { return Ok(0) };
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<u64>() {
        return Ok(value);
    }
    match raw.parse::<f64>() {
        Ok(value) if value > 0.0 => Ok(value as u64),
        _ => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_total() {
        let record = Record::new("https://example.com/post");
        assert_eq!(record.url, "https://example.com/post");
        assert_eq!(record.title, "");
        assert_eq!(record.claps, 0);
        assert_eq!(record.num_images, 0);
        assert!(record.error.is_none());
    }

    #[test]
    fn faulted_record_keeps_only_location() {
        let record = Record::faulted("https://example.com/x", Fault::Request("timeout".into()));
        assert_eq!(record.url, "https://example.com/x");
        assert_eq!(record.text, "");
        assert_eq!(
            record.error.as_ref().map(ToString::to_string).as_deref(),
            Some("Request error: timeout")
        );
    }

    #[test]
    fn combined_text_joins_all_sources() {
        let record = Record {
            url: "u".into(),
            title: "a".into(),
            subtitle: "b".into(),
            text: "c".into(),
            keywords: "d".into(),
            ..Record::default()
        };
        assert_eq!(record.combined_text(), "a b c d");
    }

    #[test]
    fn image_locations_splits_joined_form() {
        let record = Record {
            image_urls: "https://a/1.jpg; https://a/2.jpg".into(),
            ..Record::default()
        };
        let locations: Vec<&str> = record.image_locations().collect();
        assert_eq!(locations, vec!["https://a/1.jpg", "https://a/2.jpg"]);
    }
}
