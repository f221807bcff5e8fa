//! sitemaps.org sitemap for the home page and every event page.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use std::fmt::Write;

use crate::event::Event;
use crate::metadata::event_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChangeFrequency::Daily => write!(f, "daily"),
            ChangeFrequency::Weekly => write!(f, "weekly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Home page first, then one entry per event in dataset order.
pub fn entries(events: &[Event], base_url: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let home = SitemapEntry {
        url: base_url.trim_end_matches('/').to_string(),
        last_modified: now,
        change_frequency: ChangeFrequency::Daily,
        priority: 1.0,
    };

    std::iter::once(home)
        .chain(events.iter().map(|event| SitemapEntry {
            url: event_url(base_url, &event.slug),
            last_modified: now,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
        }))
        .collect()
}

pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        // Writing into a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency,
            entry.priority,
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{parse_instant, tests::event};

    #[test]
    fn test_entries_home_then_events() {
        let events = vec![
            event("a", "2030-01-01T00:00:00Z", "holiday"),
            event("b", "2025-06-01T00:00:00Z", "launch"),
        ];
        let now = parse_instant("2024-05-01T10:00:00Z").unwrap();
        let entries = entries(&events, "https://example.com/", now);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].url, "https://example.com");
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Daily);
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[2].url, "https://example.com/events/b");
        assert_eq!(entries[2].change_frequency, ChangeFrequency::Weekly);
        assert!(entries.iter().all(|e| e.last_modified == now));
    }

    #[test]
    fn test_to_xml() {
        let now = parse_instant("2024-05-01T10:00:00Z").unwrap();
        let xml = to_xml(&entries(&[], "https://example.com/?a=1&b=2", now));

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2</loc>"));
        assert!(xml.contains("<lastmod>2024-05-01T10:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
