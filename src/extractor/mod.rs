//! The field extraction cascade.
//!
//! Turns one article's raw markup into a [`Record`] via ordered fallback
//! heuristics. Each field is extracted independently and short-circuits on
//! the first strategy that succeeds; extraction as a whole never fails, it
//! degrades field by field to defaults.

pub mod content;
pub mod json_ld;
pub mod signals;

use dom_query::{Document, Selection};
use tracing::debug;
use url::Url;

use crate::options::Options;
use crate::patterns::{AUTHOR_CLASS, SUBTITLE_CLASS};
use crate::record::Record;

use self::content::{
    body_text, collect_images, count_external_links, find_content_container, strip_noise,
};
use self::json_ld::{find_blog_posting, BlogPosting};

/// Extracts a normalized record from one article's markup.
///
/// `url` is the article's own locator; it becomes the record identity and
/// the base for resolving relative image/link locators. This function does
/// not fetch anything and cannot fail: absent fields stay at their
/// defaults.
#[must_use]
pub fn extract(html: &str, url: &str, options: &Options) -> Record {
    let doc = Document::from(html);
    let base = Url::parse(url).ok();
    let mut record = Record::new(url);

    let posting = find_blog_posting(&doc);

    record.title = title(&doc, posting.as_ref());
    record.subtitle = subtitle(&doc, posting.as_ref());
    (record.author_name, record.author_url) = author(&doc, posting.as_ref(), options);

    let container = find_content_container(&doc);
    if let Some(container) = &container {
        strip_noise(container);
        record.text = body_text(container);
    }

    // Media collection falls back to the whole document when no container
    // was found.
    let scope = match container {
        Some(container) => container,
        None => doc.select("html"),
    };
    (record.num_images, record.image_urls) = collect_images(&scope, base.as_ref(), options);
    record.num_external_links = count_external_links(&scope, base.as_ref(), options);

    record.claps = signals::popularity(&doc);
    record.reading_time = signals::reading_minutes(&doc);

    record.keywords = signals::declared_keywords(&doc).unwrap_or_default();
    if record.keywords.is_empty() && !record.text.is_empty() {
        record.keywords = signals::derived_keywords(&record.text, options);
    }

    debug!(url, title = %record.title, "extracted record");
    record
}

/// Title: structured-data headline, else first h1, else the title tag.
fn title(doc: &Document, posting: Option<&BlogPosting>) -> String {
    if let Some(headline) = posting.and_then(|p| p.headline.clone()) {
        return headline;
    }

    for selector in ["h1", "title"] {
        if let Some(node) = doc.select(selector).nodes().first() {
            let text = Selection::from(*node).text().trim().to_string();
            if !text.is_empty() {
                return text;
            }
        }
    }

    String::new()
}

/// Subtitle: a heading/div with a subtitle/deck class, else the
/// structured-data description.
fn subtitle(doc: &Document, posting: Option<&BlogPosting>) -> String {
    for node in doc.select("h2[class], div[class]").nodes() {
        let sel = Selection::from(*node);
        let class = sel.attr("class").unwrap_or_default();
        if SUBTITLE_CLASS.is_match(&class) {
            return sel.text().trim().to_string();
        }
    }

    posting
        .and_then(|p| p.description.clone())
        .unwrap_or_default()
}

/// Author: structured-data author object, else the first byline anchor,
/// its href resolved against the platform host when relative.
fn author(doc: &Document, posting: Option<&BlogPosting>, options: &Options) -> (String, String) {
    if let Some(name) = posting.and_then(|p| p.author_name.clone()) {
        let url = posting
            .and_then(|p| p.author_url.clone())
            .unwrap_or_default();
        return (name, url);
    }

    for node in doc.select("a[class]").nodes() {
        let sel = Selection::from(*node);
        let class = sel.attr("class").unwrap_or_default();
        if !AUTHOR_CLASS.is_match(&class) {
            continue;
        }

        let name = sel.text().trim().to_string();
        let mut href = sel.attr("href").unwrap_or_default().to_string();
        if !href.is_empty() && !href.starts_with("http") {
            if let Ok(base) = Url::parse(&format!("https://{}", options.platform_host)) {
                if let Ok(resolved) = base.join(&href) {
                    href = resolved.to_string();
                }
            }
        }
        return (name, href);
    }

    (String::new(), String::new())
}
