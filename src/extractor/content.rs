//! Content container location, body text assembly, and media collection.
//!
//! The primary content container is found by a fixed cascade: an `article`
//! element, then any `div` whose class matches a post/article/content
//! pattern, then `main`, then a `div` with a content-like id. Image and
//! link collection fall back to the whole document when no container is
//! found.

use dom_query::{Document, Selection};
use url::Url;

use crate::options::Options;
use crate::patterns::{CONTENT_CLASS, CONTENT_ID, WHITESPACE_NORMALIZE};
use crate::record::IMAGE_URL_SEPARATOR;

/// Tags stripped from the content container before text assembly.
const NOISE_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

/// Lazy-load attributes checked after `src`.
const IMAGE_SRC_ATTRS: [&str; 3] = ["src", "data-src", "data-lazy-src"];

/// Locates the primary content container, if any.
#[must_use]
pub fn find_content_container(doc: &Document) -> Option<Selection<'_>> {
    if let Some(node) = doc.select("article").nodes().first() {
        return Some(Selection::from(*node));
    }

    for node in doc.select("div[class]").nodes() {
        let sel = Selection::from(*node);
        let class = sel.attr("class").unwrap_or_default();
        if CONTENT_CLASS.is_match(&class) {
            return Some(sel);
        }
    }

    if let Some(node) = doc.select("main").nodes().first() {
        return Some(Selection::from(*node));
    }

    for node in doc.select("div[id]").nodes() {
        let sel = Selection::from(*node);
        let id = sel.attr("id").unwrap_or_default();
        if CONTENT_ID.is_match(&id) {
            return Some(sel);
        }
    }

    None
}

/// Removes script/style/nav/footer/header descendants from the container.
pub fn strip_noise(container: &Selection) {
    for tag in NOISE_TAGS {
        container.select(tag).remove();
    }
}

/// Concatenates the visible text of every heading and paragraph descendant,
/// each trimmed, joined by single spaces, whitespace-collapsed.
#[must_use]
pub fn body_text(container: &Selection) -> String {
    let mut parts: Vec<String> = Vec::new();
    for node in container.select("p, h1, h2, h3, h4, h5, h6").nodes() {
        let text = Selection::from(*node).text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(WHITESPACE_NORMALIZE.replace_all(trimmed, " ").into_owned());
        }
    }
    parts.join(" ")
}

/// Resolves a raw locator to absolute form.
///
/// Protocol-relative (`//`) locators get an https scheme; root-relative
/// (`/`) locators resolve against the base. Anything else passes through
/// unchanged.
#[must_use]
pub fn normalize_locator(raw: &str, base: Option<&Url>) -> String {
    let raw = raw.trim();
    if raw.starts_with("//") {
        return format!("https:{raw}");
    }
    if raw.starts_with('/') {
        if let Some(base) = base {
            if let Ok(resolved) = base.join(raw) {
                return resolved.to_string();
            }
        }
    }
    raw.to_string()
}

/// Collects image locators within the scope.
///
/// Returns the count of all qualifying images and the stored, capped,
/// joined locator list. Avatar/icon locators are excluded before either
/// is taken; the cap applies only to the stored list.
#[must_use]
pub fn collect_images(scope: &Selection, base: Option<&Url>, options: &Options) -> (u64, String) {
    let mut count: u64 = 0;
    let mut stored: Vec<String> = Vec::new();

    for node in scope.select("img").nodes() {
        let sel = Selection::from(*node);
        let Some(raw) = IMAGE_SRC_ATTRS
            .iter()
            .find_map(|&attr| sel.attr(attr).filter(|v| !v.trim().is_empty()))
        else {
            continue;
        };

        let locator = normalize_locator(&raw, base);
        let lowered = locator.to_lowercase();
        if lowered.contains("avatar") || lowered.contains("icon") {
            continue;
        }

        count += 1;
        if stored.len() < options.max_stored_images {
            stored.push(locator);
        }
    }

    (count, stored.join(IMAGE_URL_SEPARATOR))
}

/// Counts anchors whose resolved host differs from both the article host
/// and the platform host. The links themselves are not stored.
#[must_use]
pub fn count_external_links(scope: &Selection, base: Option<&Url>, options: &Options) -> u64 {
    let article_host = base.and_then(Url::host_str).unwrap_or_default();
    let mut count: u64 = 0;

    for node in scope.select("a[href]").nodes() {
        let sel = Selection::from(*node);
        let Some(raw) = sel.attr("href") else { continue };
        if raw.trim().is_empty() {
            continue;
        }

        let resolved = normalize_locator(&raw, base);
        let Ok(parsed) = Url::parse(&resolved) else {
            continue;
        };
        let Some(host) = parsed.host_str() else {
            continue;
        };

        if host != article_host && host != options.platform_host {
            count += 1;
        }
    }

    count
}
