//! Compiled regex patterns for field extraction heuristics.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by the record field they serve.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Metadata Heuristic Patterns
// =============================================================================

/// Matches class names marking a subtitle/deck element.
pub static SUBTITLE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(subtitle|deck)").expect("SUBTITLE_CLASS regex"));

/// Matches class names marking an author byline link.
pub static AUTHOR_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(author|writer)").expect("AUTHOR_CLASS regex"));

/// Matches class/id names likely to wrap the main article content.
pub static CONTENT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(post|article|content)").expect("CONTENT_CLASS regex"));

/// Matches id names used as a content-container fallback.
pub static CONTENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(content|post)").expect("CONTENT_ID regex"));

// =============================================================================
// Engagement Signal Patterns
// =============================================================================

/// Matches class names on clap/like controls.
pub static CLAP_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(clap|like)").expect("CLAP_CLASS regex"));

/// Matches `data-action` values marking a clap control.
pub static CLAP_ACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)clap").expect("CLAP_ACTION regex"));

/// Matches a count token with an optional adjacent K/M magnitude suffix,
/// e.g. "2.5K". A separated letter ("3 Members") is not a suffix.
pub static COUNT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)([KkMm])?").expect("COUNT_TOKEN regex"));

/// Matches "N min read" style reading-time text.
pub static MIN_READ_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*min\s*read").expect("MIN_READ_TEXT regex"));

/// Matches class names on reading-time containers.
pub static READING_TIME_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(reading|time)").expect("READING_TIME_CLASS regex"));

/// Matches the first bare number in a text fragment.
pub static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)").expect("FIRST_NUMBER regex"));

// =============================================================================
// Keyword Patterns
// =============================================================================

/// Matches meta tag names declaring keywords.
pub static KEYWORDS_META: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)keyword").expect("KEYWORDS_META regex"));

/// Matches ASCII word tokens for keyword derivation.
pub static KEYWORD_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("KEYWORD_WORD regex"));

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));
