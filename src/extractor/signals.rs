//! Engagement signals: popularity, reading time, and keywords.

use std::collections::HashMap;

use dom_query::{Document, Selection};

use crate::options::Options;
use crate::patterns::{
    CLAP_ACTION, CLAP_CLASS, COUNT_TOKEN, FIRST_NUMBER, KEYWORDS_META, KEYWORD_WORD,
    MIN_READ_TEXT, READING_TIME_CLASS,
};

/// Stop list for derived keywords.
const KEYWORD_STOP_LIST: [&str; 9] = [
    "that", "this", "with", "from", "have", "will", "your", "they", "their",
];

/// Parses a count token with an optional K/M magnitude suffix.
///
/// `"340"` → 340, `"2.5K"` → 2500, `"1M"` → 1000000. Fractional values
/// truncate after scaling. Unparseable text yields 0.
#[must_use]
pub fn parse_count(text: &str) -> u64 {
    let Some(caps) = COUNT_TOKEN.captures(text) else {
        return 0;
    };
    let Some(value) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) else {
        return 0;
    };

    let scale = match caps.get(2).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(suffix) if suffix == "K" => 1_000.0,
        Some(suffix) if suffix == "M" => 1_000_000.0,
        _ => 1.0,
    };

    let scaled = value * scale;
    if scaled > 0.0 {
        scaled as u64
    } else {
        0
    }
}

/// Extracts the popularity signal (clap/like count).
///
/// Button controls with a clap/like class are scanned before like-styled
/// containers; when neither yields a positive value, a control whose
/// `data-action` marks a clap action, its numeric text read directly.
/// Defaults to 0.
#[must_use]
pub fn popularity(doc: &Document) -> u64 {
    for selector in ["button[class]", "div[class]"] {
        for node in doc.select(selector).nodes() {
            let sel = Selection::from(*node);
            let class = sel.attr("class").unwrap_or_default();
            if !CLAP_CLASS.is_match(&class) {
                continue;
            }
            let count = parse_count(sel.text().trim());
            if count > 0 {
                return count;
            }
        }
    }

    for node in doc.select("button[data-action]").nodes() {
        let sel = Selection::from(*node);
        let action = sel.attr("data-action").unwrap_or_default();
        if !CLAP_ACTION.is_match(&action) {
            continue;
        }
        let text = sel.text();
        if let Some(m) = FIRST_NUMBER.captures(&text).and_then(|c| c.get(1)) {
            if let Ok(count) = m.as_str().parse::<u64>() {
                if count > 0 {
                    return count;
                }
            }
        }
    }

    0
}

/// Extracts the reading time in minutes.
///
/// "N min read" text anywhere in the document wins; otherwise the first
/// number inside a div whose class matches a reading/time pattern.
/// Defaults to 0.
#[must_use]
pub fn reading_minutes(doc: &Document) -> u64 {
    let full_text = doc.select("body").text();
    if let Some(m) = MIN_READ_TEXT.captures(&full_text).and_then(|c| c.get(1)) {
        if let Ok(minutes) = m.as_str().parse::<u64>() {
            return minutes;
        }
    }

    for node in doc.select("div[class]").nodes() {
        let sel = Selection::from(*node);
        let class = sel.attr("class").unwrap_or_default();
        if !READING_TIME_CLASS.is_match(&class) {
            continue;
        }
        let text = sel.text();
        if let Some(m) = FIRST_NUMBER.captures(&text).and_then(|c| c.get(1)) {
            if let Ok(minutes) = m.as_str().parse::<u64>() {
                return minutes;
            }
        }
    }

    0
}

/// Reads declared keywords from a keywords meta tag, if present.
#[must_use]
pub fn declared_keywords(doc: &Document) -> Option<String> {
    for node in doc.select("meta[name]").nodes() {
        let sel = Selection::from(*node);
        let name = sel.attr("name").unwrap_or_default();
        if KEYWORDS_META.is_match(&name) {
            return sel.attr("content").map(|c| c.to_string());
        }
    }
    None
}

/// Derives keywords from body text: lowercase words of the configured
/// minimum length, stop list dropped, the top-frequency terms comma-joined.
/// Ties break by first-encountered order.
#[must_use]
pub fn derived_keywords(body: &str, options: &Options) -> String {
    let lowered = body.to_lowercase();
    let mut frequency: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut order = 0usize;

    for m in KEYWORD_WORD.find_iter(&lowered) {
        let word = m.as_str();
        if word.len() < options.min_keyword_len || KEYWORD_STOP_LIST.contains(&word) {
            continue;
        }
        let entry = frequency.entry(word).or_insert_with(|| {
            order += 1;
            (0, order)
        });
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = frequency.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

    ranked
        .into_iter()
        .take(options.derived_keyword_count)
        .map(|(word, _)| word)
        .collect::<Vec<_>>()
        .join(", ")
}
