//! Structured-data (JSON-LD) extraction.
//!
//! Scans embedded `application/ld+json` script blocks for a blog/article
//! posting schema. When present, it is the first source for title,
//! subtitle, and author.

use dom_query::{Document, Selection};
use serde_json::Value;

/// Blog-posting fields pulled from a JSON-LD block.
#[derive(Debug, Clone, Default)]
pub struct BlogPosting {
    /// Schema `headline`.
    pub headline: Option<String>,
    /// Schema `description`.
    pub description: Option<String>,
    /// Schema `author.name`.
    pub author_name: Option<String>,
    /// Schema `author.url`.
    pub author_url: Option<String>,
}

/// Finds the first JSON-LD script declaring a blog/article posting type.
///
/// Scripts that fail to parse, or whose `@type` does not mark an article,
/// are skipped silently.
#[must_use]
pub fn find_blog_posting(doc: &Document) -> Option<BlogPosting> {
    for script in doc.select(r#"script[type="application/ld+json"]"#).nodes() {
        let text = Selection::from(*script).text().trim().to_string();
        if text.is_empty() {
            continue;
        }

        let data: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => continue,
        };

        let Value::Object(map) = data else { continue };
        if !is_posting_type(map.get("@type")) {
            continue;
        }

        let mut posting = BlogPosting {
            headline: string_value(map.get("headline")),
            description: string_value(map.get("description")),
            ..BlogPosting::default()
        };

        if let Some(Value::Object(author)) = map.get("author") {
            posting.author_name = string_value(author.get("name"));
            posting.author_url = string_value(author.get("url"));
        }

        return Some(posting);
    }

    None
}

/// Whether a schema `@type` marks a blog/article posting.
fn is_posting_type(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => matches!(s.as_str(), "BlogPosting" | "Article" | "NewsArticle"),
        Some(Value::Array(items)) => items.iter().any(|item| is_posting_type(Some(item))),
        _ => false,
    }
}

fn string_value(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn finds_blog_posting_block() {
        let html = r#"
            <html><head>
              <script type="application/ld+json">{"@type":"WebSite","name":"x"}</script>
              <script type="application/ld+json">
                {"@type":"BlogPosting","headline":"The Headline",
                 "description":"The deck",
                 "author":{"name":"Ada","url":"https://medium.com/@ada"}}
              </script>
            </head><body></body></html>
        "#;
        let doc = Document::from(html);
        let posting = find_blog_posting(&doc).unwrap();
        assert_eq!(posting.headline.as_deref(), Some("The Headline"));
        assert_eq!(posting.description.as_deref(), Some("The deck"));
        assert_eq!(posting.author_name.as_deref(), Some("Ada"));
        assert_eq!(posting.author_url.as_deref(), Some("https://medium.com/@ada"));
    }

    #[test]
    fn malformed_json_is_skipped() {
        let html = r#"
            <html><head>
              <script type="application/ld+json">{not json</script>
            </head><body></body></html>
        "#;
        let doc = Document::from(html);
        assert!(find_blog_posting(&doc).is_none());
    }
}
