//! Syndication feed harvesting.
//!
//! Pulls article locators out of an RSS feed document: the trimmed text of
//! each `<item><link>` element, in feed order. Fetch or parse faults
//! degrade to an empty list with a logged diagnostic; harvesting never
//! raises to the caller.

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{error, info};

use crate::error::{Error, Result};
use crate::fetch::Fetcher;

/// Parses a feed document into an ordered list of article locators.
///
/// Returns [`Error::Parse`] on malformed XML; the convenience wrapper
/// [`harvest_feed`] degrades that to an empty list.
pub fn parse_feed(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut locators = Vec::new();
    let mut in_item = false;
    let mut in_link = false;
    let mut current = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"item" => in_item = true,
                b"link" if in_item => {
                    in_link = true;
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Text(text)) if in_link => {
                let text = text.unescape().map_err(|e| Error::Parse(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::CData(data)) if in_link => {
                current.push_str(&String::from_utf8_lossy(&data));
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"item" => in_item = false,
                b"link" if in_link => {
                    in_link = false;
                    let locator = current.trim().to_string();
                    if !locator.is_empty() {
                        locators.push(locator);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::Parse(e.to_string())),
        }
    }

    Ok(locators)
}

/// Fetches a feed and extracts its article locators.
///
/// Faults (fetch or parse) yield an empty list plus a logged fault.
#[must_use]
pub fn harvest_feed(fetcher: &Fetcher, feed_url: &str) -> Vec<String> {
    info!(feed_url, "extracting article locators from feed");
    let result = fetcher.fetch(feed_url).and_then(|xml| parse_feed(&xml));
    match result {
        Ok(locators) => {
            info!(feed_url, count = locators.len(), "feed harvested");
            locators
        }
        Err(e) => {
            error!(feed_url, fault = %e, "feed harvest failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn item_links_come_back_in_order() {
        let xml = r#"<?xml version="1.0"?>
            <rss version="2.0"><channel>
              <title>Feed</title>
              <link>https://medium.com/feed-home</link>
              <item><title>A</title><link> https://medium.com/a </link></item>
              <item><title>B</title><link>https://medium.com/b</link></item>
            </channel></rss>"#;
        let locators = parse_feed(xml).unwrap();
        assert_eq!(locators, vec!["https://medium.com/a", "https://medium.com/b"]);
    }

    #[test]
    fn channel_level_link_is_ignored() {
        let xml = r#"<rss><channel><link>https://medium.com/home</link></channel></rss>"#;
        assert!(parse_feed(xml).unwrap().is_empty());
    }

    #[test]
    fn malformed_feed_is_a_parse_fault() {
        let xml = "<rss><channel><item></wrong></item></channel></rss>";
        assert!(matches!(parse_feed(xml), Err(Error::Parse(_))));
    }
}
