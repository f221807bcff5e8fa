//! SEO metadata for the home page and event pages.

use serde::Serialize;

use crate::event::Event;

pub const HOME_TITLE: &str = "Countdown Timers - Track Time to Important Events";
pub const HOME_DESCRIPTION: &str = "Live countdown timers for important events, holidays, and special occasions. Track time remaining in years, days, hours, minutes, and seconds.";
const HOME_OG_DESCRIPTION: &str =
    "Live countdown timers for important events, holidays, and special occasions.";
const NOT_FOUND_TITLE: &str = "Event Not Found";

/// Page-level metadata: document title, description and social cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<OpenGraphImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraphImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// schema.org `Event` structured data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonLdEvent {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub event_status: &'static str,
}

pub fn home_page() -> PageMetadata {
    PageMetadata {
        title: HOME_TITLE.to_string(),
        description: Some(HOME_DESCRIPTION.to_string()),
        open_graph: Some(OpenGraph {
            title: HOME_TITLE.to_string(),
            description: HOME_OG_DESCRIPTION.to_string(),
            kind: "website".to_string(),
            images: vec![],
        }),
        twitter: None,
    }
}

pub fn not_found() -> PageMetadata {
    PageMetadata {
        title: NOT_FOUND_TITLE.to_string(),
        description: None,
        open_graph: None,
        twitter: None,
    }
}

/// Long-form date used in event page titles, e.g. `January 1, 2030`.
///
/// Always rendered in UTC so the title does not depend on where it is built.
pub fn date_label(event: &Event) -> String {
    event.starts_at_utc.format("%B %-d, %Y").to_string()
}

pub fn event_page(event: &Event) -> PageMetadata {
    let card_title = format!("{} Countdown", event.title);
    let images: Vec<String> = event.image.iter().cloned().collect();

    PageMetadata {
        title: format!("{} Countdown Timer - {}", event.title, date_label(event)),
        description: Some(format!(
            "{} Live countdown showing years, days, hours, minutes, and seconds remaining until {}.",
            event.description, event.title
        )),
        open_graph: Some(OpenGraph {
            title: card_title.clone(),
            description: event.description.clone(),
            kind: "website".to_string(),
            images: images
                .iter()
                .map(|url| OpenGraphImage { url: url.clone() })
                .collect(),
        }),
        twitter: Some(TwitterCard {
            card: "summary_large_image".to_string(),
            title: card_title,
            description: event.description.clone(),
            images,
        }),
    }
}

/// Public URL of an event's detail page.
pub fn event_url(base_url: &str, slug: &str) -> String {
    format!("{}/events/{}", base_url.trim_end_matches('/'), slug)
}

pub fn json_ld(event: &Event, base_url: &str) -> JsonLdEvent {
    JsonLdEvent {
        context: "https://schema.org",
        kind: "Event",
        name: event.title.clone(),
        description: event.description.clone(),
        start_date: event.starts_at_utc.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        url: event_url(base_url, &event.slug),
        image: event.image.clone(),
        event_status: "https://schema.org/EventScheduled",
    }
}
