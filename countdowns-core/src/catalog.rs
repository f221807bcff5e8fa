//! The read-only event catalog.
//!
//! A catalog is validated once when it is built and never mutated afterwards.
//! Binaries share one process-wide catalog through [`Catalog::global`].

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{CountdownError, CountdownResult};
use crate::event::{Event, RawEvent};
use crate::ranking::{RandomRanking, Ranking};

/// Event data compiled into the binary.
static BUNDLED_EVENTS: &str = include_str!("../data/events.json");

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

pub struct Catalog {
    events: Vec<Event>,
    ranking: Box<dyn Ranking>,
}

impl Catalog {
    /// Validate an in-memory event list.
    pub fn new(events: Vec<Event>) -> CountdownResult<Self> {
        let mut slugs = HashSet::new();
        let mut ids = HashSet::new();

        for event in &events {
            if slug::slugify(&event.slug) != event.slug {
                return Err(CountdownError::InvalidSlug(event.slug.clone()));
            }
            if !slugs.insert(event.slug.as_str()) {
                return Err(CountdownError::DuplicateSlug(event.slug.clone()));
            }
            if !ids.insert(event.id.as_str()) {
                return Err(CountdownError::DuplicateId(event.id.clone()));
            }
        }

        Ok(Catalog {
            events,
            ranking: Box::new(RandomRanking),
        })
    }

    /// Parse and validate a JSON array of event records.
    pub fn from_json(json: &str) -> CountdownResult<Self> {
        let raw: Vec<RawEvent> = serde_json::from_str(json)?;
        let events = raw
            .into_iter()
            .map(Event::try_from)
            .collect::<CountdownResult<Vec<_>>>()?;
        Self::new(events)
    }

    pub fn from_file(path: &Path) -> CountdownResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        log::debug!(
            "Loaded {} events from {}",
            catalog.events.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The dataset bundled with the crate.
    pub fn bundled() -> CountdownResult<Self> {
        Self::from_json(BUNDLED_EVENTS)
    }

    /// Load from `data_file` if given, otherwise the bundled dataset.
    pub fn load(data_file: Option<&Path>) -> CountdownResult<Self> {
        match data_file {
            Some(path) => Self::from_file(path),
            None => Self::bundled(),
        }
    }

    /// Replace the strategy behind [`Catalog::top`].
    pub fn with_ranking(mut self, ranking: impl Ranking + 'static) -> Self {
        self.ranking = Box::new(ranking);
        self
    }

    /// Install the process-wide catalog. Must run before the first
    /// [`Catalog::global`] call.
    pub fn install(catalog: Catalog) -> CountdownResult<&'static Catalog> {
        GLOBAL
            .set(catalog)
            .map_err(|_| CountdownError::AlreadyInitialized)?;
        Self::global()
    }

    /// The process-wide catalog, falling back to the bundled dataset when
    /// nothing was installed.
    pub fn global() -> CountdownResult<&'static Catalog> {
        if let Some(catalog) = GLOBAL.get() {
            return Ok(catalog);
        }
        let bundled = Self::bundled()?;
        log::debug!("Initialized bundled catalog with {} events", bundled.len());
        Ok(GLOBAL.get_or_init(|| bundled))
    }

    // QUERIES:

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Exact, case-sensitive slug lookup.
    pub fn by_slug(&self, slug: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.slug == slug)
    }

    pub fn by_category(&self, category: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.category == category).collect()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.events
            .iter()
            .map(|e| e.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Up to `n` events, ordered by the catalog's ranking strategy.
    pub fn top(&self, n: usize) -> Vec<&Event> {
        self.top_with(self.ranking.as_ref(), n)
    }

    pub fn top_with(&self, ranking: &dyn Ranking, n: usize) -> Vec<&Event> {
        let mut ranked = ranking.rank(&self.events);
        ranked.truncate(n);
        ranked
    }

    /// Case-insensitive substring search in dataset order.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let lower_query = query.to_lowercase();
        self.events
            .iter()
            .filter(|e| e.matches_query(&lower_query))
            .collect()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}
