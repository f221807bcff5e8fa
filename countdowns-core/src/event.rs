//! Event records as they appear in the catalog.
//!
//! The data file stores `startsAtUtc` as an RFC 3339 string. Records are read
//! into [`RawEvent`] first and validated into [`Event`], so the rest of the
//! crate only ever sees parsed instants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CountdownError, CountdownResult};

/// A single dated occurrence with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawEvent")]
pub struct Event {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub starts_at_utc: DateTime<Utc>,
    pub category: String,
    /// Display order only; matching ignores it.
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// An event record exactly as stored in the data file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub starts_at_utc: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl TryFrom<RawEvent> for Event {
    type Error = CountdownError;

    fn try_from(raw: RawEvent) -> CountdownResult<Self> {
        let starts_at_utc = parse_instant(&raw.starts_at_utc).ok_or_else(|| {
            CountdownError::InvalidTimestamp {
                slug: raw.slug.clone(),
                value: raw.starts_at_utc.clone(),
            }
        })?;

        // An empty image string in the data file means "no image".
        let image = raw.image.filter(|url| !url.trim().is_empty());

        Ok(Event {
            id: raw.id,
            slug: raw.slug,
            title: raw.title,
            description: raw.description,
            starts_at_utc,
            category: raw.category,
            tags: raw.tags,
            image,
        })
    }
}

/// Parse an RFC 3339 timestamp into a UTC instant.
///
/// RFC 3339 requires an explicit offset, so the result never depends on the
/// reader's local timezone.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

impl Event {
    /// Case-insensitive substring match against title, description or any tag.
    ///
    /// `lower_query` must already be lowercased. An empty query matches.
    pub fn matches_query(&self, lower_query: &str) -> bool {
        self.title.to_lowercase().contains(lower_query)
            || self.description.to_lowercase().contains(lower_query)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(lower_query))
    }

    /// The start instant in HTTP-date form, e.g. `Tue, 01 Jan 2030 00:00:00 GMT`.
    pub fn utc_string(&self) -> String {
        self.starts_at_utc
            .format("%a, %d %b %Y %H:%M:%S GMT")
            .to_string()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Build an event with the fields the tests care about.
    pub(crate) fn event(slug: &str, starts_at: &str, category: &str) -> Event {
        Event {
            id: format!("id-{slug}"),
            slug: slug.to_string(),
            title: slug.replace('-', " "),
            description: String::new(),
            starts_at_utc: parse_instant(starts_at).expect("valid timestamp"),
            category: category.to_string(),
            tags: vec![],
            image: None,
        }
    }

    fn raw(starts_at: &str) -> RawEvent {
        RawEvent {
            id: "1".to_string(),
            slug: "new-year".to_string(),
            title: "New Year".to_string(),
            description: "A fresh start".to_string(),
            starts_at_utc: starts_at.to_string(),
            category: "holiday".to_string(),
            tags: vec!["Party".to_string()],
            image: Some(String::new()),
        }
    }

    #[test]
    fn test_offset_timestamp_normalizes_to_utc() {
        let event = Event::try_from(raw("2030-01-01T02:00:00+02:00")).unwrap();
        assert_eq!(
            event.starts_at_utc,
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_timestamp_without_offset_is_rejected() {
        let err = Event::try_from(raw("2030-01-01T00:00:00")).unwrap_err();
        match err {
            CountdownError::InvalidTimestamp { slug, value } => {
                assert_eq!(slug, "new-year");
                assert_eq!(value, "2030-01-01T00:00:00");
            }
            other => panic!("Expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_image_is_absent() {
        let event = Event::try_from(raw("2030-01-01T00:00:00Z")).unwrap();
        assert_eq!(event.image, None);
    }

    #[test]
    fn test_matches_query_checks_tags() {
        let event = Event::try_from(raw("2030-01-01T00:00:00Z")).unwrap();
        assert!(event.matches_query("party"));
        assert!(event.matches_query("fresh"));
        assert!(event.matches_query(""));
        assert!(!event.matches_query("launch"));
    }

    #[test]
    fn test_json_uses_camel_case_wire_names() {
        let event = Event::try_from(raw("2030-01-01T00:00:00Z")).unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["startsAtUtc"], "2030-01-01T00:00:00Z");
        assert!(json.get("image").is_none());

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_utc_string() {
        let event = Event::try_from(raw("2030-01-01T00:00:00Z")).unwrap();
        assert_eq!(event.utc_string(), "Tue, 01 Jan 2030 00:00:00 GMT");
    }
}
