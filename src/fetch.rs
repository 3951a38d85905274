//! HTTP fetching for articles and feeds.
//!
//! A thin blocking client that sends a browser-like header set, classifies
//! transport failures as [`Error::Fetch`], and transcodes response bytes to
//! UTF-8 from whatever charset the page declares.

use std::sync::LazyLock;
use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

use crate::error::{Error, Result};

#[allow(clippy::expect_used)]
static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("CHARSET_META regex")
});

/// Blocking HTTP client for article and feed sources.
#[derive(Debug)]
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// Builds a client with the browser-like headers article platforms
    /// expect and the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers.insert(
            reqwest::header::REFERER,
            reqwest::header::HeaderValue::from_static("https://www.google.com/"),
        );

        let client = reqwest::blocking::Client::builder()
            .user_agent(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            )
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetches a document and returns its body as UTF-8 text.
    ///
    /// Non-success status codes and transport failures both come back as
    /// [`Error::Fetch`].
    pub fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let bytes = response.bytes().map_err(|e| Error::Fetch(e.to_string()))?;
        Ok(transcode_to_utf8(&bytes))
    }
}

/// Decodes document bytes to UTF-8, honoring a declared meta charset.
///
/// Invalid characters are replaced rather than rejected; a fetched page
/// never fails at this stage.
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

/// Reads the charset declaration from the first kilobyte of the document.
/// Defaults to UTF-8.
fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(1024)]);
    CHARSET_META
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passthrough() {
        let bytes = b"<html><body>Hello</body></html>";
        assert_eq!(transcode_to_utf8(bytes), "<html><body>Hello</body></html>");
    }

    #[test]
    fn declared_charset_is_honored() {
        let bytes = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        assert!(transcode_to_utf8(bytes).contains("Caf\u{e9}"));
    }

    #[test]
    fn missing_charset_defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html></html>"), UTF_8);
    }
}
