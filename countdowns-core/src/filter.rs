//! Category filtering and search over the catalog, soonest first.

use serde::Serialize;
use std::fmt;

use crate::constants::ALL_CATEGORIES;
use crate::event::Event;

/// Category restriction. Parsed from the `"all"` sentinel or a category name;
/// an empty name means no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(value: Option<&str>) -> Self {
        value.map(CategoryFilter::from).unwrap_or_default()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", ALL_CATEGORIES),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl CategoryFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => event.category == *category,
        }
    }
}

/// The browsing filter: a category restriction and a search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub category: CategoryFilter,
    pub query: String,
}

/// Result of applying an [`EventFilter`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredEvents<'a> {
    pub events: Vec<&'a Event>,
    /// Size of the unfiltered input.
    pub total: usize,
}

impl<'a> FilteredEvents<'a> {
    pub fn shown(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventFilter {
    pub fn new(category: impl Into<CategoryFilter>, query: impl Into<String>) -> Self {
        EventFilter {
            category: category.into(),
            query: query.into(),
        }
    }

    /// Back to "all categories, no query".
    pub fn reset(&mut self) {
        *self = EventFilter::default();
    }

    pub fn is_default(&self) -> bool {
        *self == EventFilter::default()
    }

    pub fn matches(&self, event: &Event, lower_query: &str) -> bool {
        self.category.matches(event) && (lower_query.is_empty() || event.matches_query(lower_query))
    }

    /// Keep matching events and sort them by start time.
    ///
    /// The sort always applies, so the result does not follow dataset order.
    /// Ties keep their dataset order.
    pub fn apply<'a>(&self, events: &'a [Event]) -> FilteredEvents<'a> {
        let lower_query = self.query.to_lowercase();

        let mut matched: Vec<&Event> = events
            .iter()
            .filter(|e| self.matches(e, &lower_query))
            .collect();
        matched.sort_by_key(|e| e.starts_at_utc);

        FilteredEvents {
            events: matched,
            total: events.len(),
        }
    }
}
